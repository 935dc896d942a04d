use std::fmt;

pub const HORIZONTAL_THRESHOLD_DEFAULT: usize = 4;
pub const WHEEL_SCROLL_FACTOR_DEFAULT: f64 = 1.5;
pub const EDGE_TOLERANCE_PX_DEFAULT: f64 = 1.0;
pub const WHEEL_LINE_HEIGHT_PX_DEFAULT: f64 = 16.0;
pub const CLOSE_DELAY_MS_DEFAULT: u32 = 350;
pub const TRANSITION_MS_DEFAULT: u32 = 300;
pub const TILT_MAX_DEG_DEFAULT: f64 = 15.0;
pub const CARD_ROTATION_RANGE_DEG_DEFAULT: f64 = 7.5;
pub const MOBILE_BREAKPOINT_PX_DEFAULT: f64 = 768.0;
pub const CAROUSEL_ADJACENT_OPACITY_DEFAULT: f64 = 0.5;
pub const CAROUSEL_FAR_OPACITY_DEFAULT: f64 = 0.15;

/// Keys accepted by [`Tuning::apply_override`].
pub const TUNING_KEYS: &[&str] = &[
    "horizontal_threshold",
    "wheel_scroll_factor",
    "edge_tolerance_px",
    "wheel_line_height_px",
    "close_delay_ms",
    "transition_ms",
    "tilt_max_deg",
    "card_rotation_range_deg",
    "mobile_breakpoint_px",
    "carousel_adjacent_opacity",
    "carousel_far_opacity",
];

/// Hand-tuned interaction constants. None of them has a derivation; they are
/// kept adjustable so the feel can be changed without touching the logic.
#[derive(Clone, Debug, PartialEq)]
pub struct Tuning {
    /// Grid switches to a horizontal strip when the card count exceeds this.
    pub horizontal_threshold: usize,
    pub wheel_scroll_factor: f64,
    pub edge_tolerance_px: f64,
    pub wheel_line_height_px: f64,
    /// Delay between a close request and unmounting the overlay.
    pub close_delay_ms: u32,
    /// Duration of the overlay pane slide.
    pub transition_ms: u32,
    pub tilt_max_deg: f64,
    pub card_rotation_range_deg: f64,
    pub mobile_breakpoint_px: f64,
    pub carousel_adjacent_opacity: f64,
    pub carousel_far_opacity: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            horizontal_threshold: HORIZONTAL_THRESHOLD_DEFAULT,
            wheel_scroll_factor: WHEEL_SCROLL_FACTOR_DEFAULT,
            edge_tolerance_px: EDGE_TOLERANCE_PX_DEFAULT,
            wheel_line_height_px: WHEEL_LINE_HEIGHT_PX_DEFAULT,
            close_delay_ms: CLOSE_DELAY_MS_DEFAULT,
            transition_ms: TRANSITION_MS_DEFAULT,
            tilt_max_deg: TILT_MAX_DEG_DEFAULT,
            card_rotation_range_deg: CARD_ROTATION_RANGE_DEG_DEFAULT,
            mobile_breakpoint_px: MOBILE_BREAKPOINT_PX_DEFAULT,
            carousel_adjacent_opacity: CAROUSEL_ADJACENT_OPACITY_DEFAULT,
            carousel_far_opacity: CAROUSEL_FAR_OPACITY_DEFAULT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuningError {
    UnknownKey { key: String },
    InvalidValue { key: String, value: String },
    OutOfRange { key: String, value: String },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::UnknownKey { key } => write!(f, "unknown tuning key '{key}'"),
            TuningError::InvalidValue { key, value } => {
                write!(f, "tuning key '{key}' cannot parse '{value}'")
            }
            TuningError::OutOfRange { key, value } => {
                write!(f, "tuning key '{key}' value '{value}' is out of range")
            }
        }
    }
}

impl std::error::Error for TuningError {}

impl Tuning {
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), TuningError> {
        let key = key.trim();
        let value = value.trim();
        match key {
            "horizontal_threshold" => self.horizontal_threshold = parse_count(key, value)?,
            "wheel_scroll_factor" => self.wheel_scroll_factor = parse_positive(key, value)?,
            "edge_tolerance_px" => self.edge_tolerance_px = parse_non_negative(key, value)?,
            "wheel_line_height_px" => self.wheel_line_height_px = parse_positive(key, value)?,
            "close_delay_ms" => self.close_delay_ms = parse_millis(key, value)?,
            "transition_ms" => self.transition_ms = parse_millis(key, value)?,
            "tilt_max_deg" => {
                self.tilt_max_deg = parse_bounded(key, value, 0.0, 90.0)?;
            }
            "card_rotation_range_deg" => {
                self.card_rotation_range_deg = parse_bounded(key, value, 0.0, 45.0)?;
            }
            "mobile_breakpoint_px" => self.mobile_breakpoint_px = parse_non_negative(key, value)?,
            "carousel_adjacent_opacity" => {
                self.carousel_adjacent_opacity = parse_bounded(key, value, 0.0, 1.0)?;
            }
            "carousel_far_opacity" => {
                self.carousel_far_opacity = parse_bounded(key, value, 0.0, 1.0)?;
            }
            _ => {
                return Err(TuningError::UnknownKey {
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> TuningError {
    TuningError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn out_of_range(key: &str, value: &str) -> TuningError {
    TuningError::OutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_count(key: &str, value: &str) -> Result<usize, TuningError> {
    value.parse::<usize>().map_err(|_| invalid(key, value))
}

fn parse_millis(key: &str, value: &str) -> Result<u32, TuningError> {
    value.parse::<u32>().map_err(|_| invalid(key, value))
}

fn parse_float(key: &str, value: &str) -> Result<f64, TuningError> {
    let parsed = value.parse::<f64>().map_err(|_| invalid(key, value))?;
    if !parsed.is_finite() {
        return Err(out_of_range(key, value));
    }
    Ok(parsed)
}

fn parse_positive(key: &str, value: &str) -> Result<f64, TuningError> {
    let parsed = parse_float(key, value)?;
    if parsed <= 0.0 {
        return Err(out_of_range(key, value));
    }
    Ok(parsed)
}

fn parse_non_negative(key: &str, value: &str) -> Result<f64, TuningError> {
    parse_bounded(key, value, 0.0, f64::MAX)
}

fn parse_bounded(key: &str, value: &str, min: f64, max: f64) -> Result<f64, TuningError> {
    let parsed = parse_float(key, value)?;
    if parsed < min || parsed > max {
        return Err(out_of_range(key, value));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_key_is_accepted() {
        for key in TUNING_KEYS {
            let mut tuning = Tuning::default();
            assert!(tuning.apply_override(key, "1").is_ok(), "key {key} rejected");
        }
    }

    #[test]
    fn bad_overrides_leave_defaults_untouched() {
        let mut tuning = Tuning::default();
        assert!(matches!(
            tuning.apply_override("wheel_scroll_factor", "fast"),
            Err(TuningError::InvalidValue { .. })
        ));
        assert!(matches!(
            tuning.apply_override("wheel_scroll_factor", "-2"),
            Err(TuningError::OutOfRange { .. })
        ));
        assert!(matches!(
            tuning.apply_override("carousel_far_opacity", "NaN"),
            Err(TuningError::OutOfRange { .. })
        ));
        assert!(matches!(
            tuning.apply_override("speed", "1"),
            Err(TuningError::UnknownKey { .. })
        ));
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn override_is_trimmed() {
        let mut tuning = Tuning::default();
        tuning
            .apply_override(" close_delay_ms ", " 500 ")
            .expect("valid override");
        assert_eq!(tuning.close_delay_ms, 500);
    }
}
