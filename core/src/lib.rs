pub mod card;
pub mod carousel;
pub mod catalog;
pub mod detail;
pub mod images;
pub mod overlay;
pub mod scroll;
pub mod tilt;
pub mod tuning;

pub use card::{rotation_from_unit, CardRotation};
pub use carousel::CarouselEngine;
pub use catalog::{catalog, project_by_id, ProjectDetails, ProjectRecord, PLACEHOLDER_IMAGE};
pub use detail::{detail_sections, DetailSection};
pub use images::{resolve_image_src, validate_image_url, ImageUrlError};
pub use overlay::{OverlayEffect, OverlayMachine, OverlayPhase, Ticket};
pub use scroll::{
    active_scroll, decide_wheel, scrolls_horizontally, ScrollCarry, ScrollMetrics, WheelDecision,
    WheelSample,
};
pub use tilt::{pointer_tilt_enabled, tilt_for_pointer, PanePointer, Tilt};
pub use tuning::{Tuning, TuningError, TUNING_KEYS};
