use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;

use crate::app_runtime;
use crate::carousel::ImageCarousel;
use crate::page_services::{is_mobile, is_touch_device, PageServices, ScrollLockGuard};
use folio_core::{
    detail_sections, pointer_tilt_enabled, resolve_image_src, DetailSection, OverlayEffect,
    OverlayMachine, PanePointer, ProjectRecord, Ticket,
};

const PANE_EASING: &str = "cubic-bezier(0.22, 1, 0.36, 1)";

#[derive(Properties, PartialEq)]
pub(crate) struct ProjectOverlayProps {
    pub(crate) project: Option<&'static ProjectRecord>,
    pub(crate) open: bool,
    pub(crate) on_close: Callback<()>,
}

/// Runs the effects requested by [`OverlayMachine`] against the browser:
/// timers, animation frames and the scroll lock. Scheduled callbacks hold a
/// weak reference so a torn-down overlay is never touched.
struct OverlayDriver {
    machine: RefCell<OverlayMachine>,
    services: PageServices,
    timer: RefCell<Option<Timeout>>,
    first_frame: RefCell<Option<AnimationFrame>>,
    second_frame: RefCell<Option<AnimationFrame>>,
    scroll_lock: RefCell<Option<ScrollLockGuard>>,
    redraw: RefCell<Option<Callback<()>>>,
}

impl OverlayDriver {
    fn new(services: PageServices, close_delay_ms: u32) -> Self {
        Self {
            machine: RefCell::new(OverlayMachine::new(close_delay_ms)),
            services,
            timer: RefCell::new(None),
            first_frame: RefCell::new(None),
            second_frame: RefCell::new(None),
            scroll_lock: RefCell::new(None),
            redraw: RefCell::new(None),
        }
    }

    fn set_redraw(&self, redraw: Callback<()>) {
        *self.redraw.borrow_mut() = Some(redraw);
    }

    fn apply<F>(self: &Rc<Self>, step: F)
    where
        F: FnOnce(&mut OverlayMachine) -> Vec<OverlayEffect>,
    {
        let (before, effects, after) = {
            let mut machine = self.machine.borrow_mut();
            let before = machine.phase();
            let effects = step(&mut machine);
            (before, effects, machine.phase())
        };
        if before != after {
            gloo::console::log!("overlay", format!("{before:?} -> {after:?}"));
        }
        for effect in effects {
            self.run(effect);
        }
        let redraw = self.redraw.borrow().clone();
        if let Some(redraw) = redraw {
            redraw.emit(());
        }
    }

    fn run(self: &Rc<Self>, effect: OverlayEffect) {
        match effect {
            OverlayEffect::ScheduleMount { ticket } => self.schedule_timer(ticket, 0),
            OverlayEffect::ScheduleUnmount { ticket, delay_ms } => {
                self.schedule_timer(ticket, delay_ms)
            }
            OverlayEffect::ScheduleAnimateIn { ticket } => self.schedule_frames(ticket),
            OverlayEffect::CancelTimer => {
                self.timer.borrow_mut().take();
            }
            OverlayEffect::CancelFrames => {
                self.first_frame.borrow_mut().take();
                self.second_frame.borrow_mut().take();
            }
            OverlayEffect::AcquireScrollLock => {
                let mut slot = self.scroll_lock.borrow_mut();
                if slot.is_none() {
                    *slot = Some(self.services.lock_scroll());
                }
            }
            OverlayEffect::ReleaseScrollLock => {
                self.scroll_lock.borrow_mut().take();
            }
        }
    }

    fn schedule_timer(self: &Rc<Self>, ticket: Ticket, delay_ms: u32) {
        let driver = Rc::downgrade(self);
        let timer = Timeout::new(delay_ms, move || {
            with_driver(&driver, |driver| {
                driver.apply(|machine| machine.timer_elapsed(ticket));
            });
        });
        *self.timer.borrow_mut() = Some(timer);
    }

    // first frame commits the closed transform, second flips to open
    fn schedule_frames(self: &Rc<Self>, ticket: Ticket) {
        let driver = Rc::downgrade(self);
        let handle = request_animation_frame(move |_| {
            with_driver(&driver, |driver| {
                let inner = Rc::downgrade(driver);
                let handle = request_animation_frame(move |_| {
                    with_driver(&inner, |driver| {
                        driver.apply(|machine| machine.frames_elapsed(ticket));
                    });
                });
                *driver.second_frame.borrow_mut() = Some(handle);
            });
        });
        self.second_frame.borrow_mut().take();
        *self.first_frame.borrow_mut() = Some(handle);
    }
}

fn with_driver<F>(driver: &Weak<OverlayDriver>, f: F)
where
    F: FnOnce(&Rc<OverlayDriver>),
{
    if let Some(driver) = driver.upgrade() {
        f(&driver);
    }
}

#[function_component(ProjectOverlay)]
pub(crate) fn project_overlay(props: &ProjectOverlayProps) -> Html {
    let tuning = use_memo((), |_| app_runtime::tuning());
    let services = use_context::<PageServices>().unwrap_or_else(PageServices::new);
    let driver = {
        let close_delay_ms = tuning.close_delay_ms;
        use_memo((), move |_| OverlayDriver::new(services, close_delay_ms))
    };
    let force_update = use_force_update();
    driver.set_redraw(Callback::from(move |_| force_update.force_update()));

    let mobile = use_state({
        let breakpoint = tuning.mobile_breakpoint_px;
        move || is_mobile(breakpoint)
    });
    let touch_device = use_state(is_touch_device);
    let image_pane_ref = use_node_ref();

    {
        let mobile = mobile.clone();
        let touch_device = touch_device.clone();
        let breakpoint = tuning.mobile_breakpoint_px;
        use_effect_with((), move |_| {
            mobile.set(is_mobile(breakpoint));
            touch_device.set(is_touch_device());
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_event| {
                    mobile.set(is_mobile(breakpoint));
                    touch_device.set(is_touch_device());
                })
            });
            move || drop(listener)
        });
    }

    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            move || {
                driver.redraw.borrow_mut().take();
                driver.apply(|machine| machine.teardown());
            }
        });
    }

    {
        let driver = driver.clone();
        use_effect_with((props.project, props.open), move |(project, open)| {
            driver.apply(|machine| machine.request(*project, *open));
            || ()
        });
    }

    {
        let services = driver.services.clone();
        let on_close = props.on_close.clone();
        use_effect_with((props.open, on_close), move |(open, on_close)| {
            let listener = if *open {
                let on_close = on_close.clone();
                services.on_escape(move || on_close.emit(()))
            } else {
                None
            };
            move || drop(listener)
        });
    }

    let tilt_enabled = pointer_tilt_enabled(*mobile, *touch_device);
    let onmousemove = {
        let driver = driver.clone();
        let image_pane_ref = image_pane_ref.clone();
        let max_deg = tuning.tilt_max_deg;
        Callback::from(move |event: MouseEvent| {
            let Some(pane) = image_pane_ref.cast::<Element>() else {
                return;
            };
            let rect = pane.get_bounding_client_rect();
            let pointer = PanePointer {
                x: event.client_x() as f64 - rect.left(),
                y: event.client_y() as f64 - rect.top(),
                width: rect.width(),
                height: rect.height(),
            };
            let changed = driver
                .machine
                .borrow_mut()
                .pointer_moved(pointer, max_deg, tilt_enabled);
            if changed {
                driver.apply(|_| Vec::new());
            }
        })
    };
    let onmouseleave = {
        let driver = driver.clone();
        Callback::from(move |_: MouseEvent| {
            let changed = driver.machine.borrow_mut().pointer_left(tilt_enabled);
            if changed {
                driver.apply(|_| Vec::new());
            }
        })
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let (project, presented, tilt) = {
        let machine = driver.machine.borrow();
        (machine.rendered(), machine.is_presented(), machine.tilt())
    };
    let Some(project) = project else {
        return Html::default();
    };

    let pane_transition = format!("transform {}ms {PANE_EASING}", tuning.transition_ms);
    let image_transform = if presented {
        "translateX(0) translateY(0)"
    } else {
        "translateX(-100%)"
    };
    let content_transform = match (presented, *mobile) {
        (true, _) => "translateX(0) translateY(0)",
        (false, true) => "translateY(100%)",
        (false, false) => "translateX(150%)",
    };
    let inert = (!presented).then_some("overlay--inert");
    let tilt_transition = if tilt.is_rest() {
        "transform 0.3s ease-out"
    } else {
        "none"
    };

    let image_pane = if *mobile {
        Html::default()
    } else {
        html! {
            <div
                class={classes!("overlay-pane", "overlay-pane--image", inert)}
                style={format!("transform: {image_transform}; transition: {pane_transition}; will-change: transform;")}
            >
                <div
                    ref={image_pane_ref}
                    class="overlay-stage"
                    {onmousemove}
                    {onmouseleave}
                >
                    <div
                        class="overlay-stage__tilt"
                        style={format!("transform: {}; transition: {tilt_transition};", tilt.css_transform())}
                    >
                        <img
                            class="overlay-stage__image"
                            src={resolve_image_src(project.image)}
                            alt={project.title}
                        />
                    </div>
                </div>
            </div>
        }
    };

    let sections: Html = detail_sections(project)
        .into_iter()
        .map(|section| render_section(project, section))
        .collect();

    html! {
        <>
            { image_pane }
            <div
                class={classes!(
                    "overlay-pane",
                    "overlay-pane--content",
                    (*mobile).then_some("overlay-pane--mobile"),
                    inert,
                )}
                style={format!("transform: {content_transform}; transition: {pane_transition}; will-change: transform;")}
                role="dialog"
                aria-modal="true"
                aria-label={project.title}
            >
                <button
                    type="button"
                    class={if *mobile { "overlay-close overlay-close--mobile" } else { "overlay-close" }}
                    aria-label="Close"
                    onclick={on_close_click}
                >
                    <img src="svg/exit.svg" width="24" height="24" alt="Close" />
                </button>
                <h1 class="modal-title">{ project.title }</h1>
                <p class="modal-meta">{ project.year }</p>
                <div class="modal-body">
                    { sections }
                </div>
            </div>
        </>
    }
}

fn render_section(project: &'static ProjectRecord, section: DetailSection) -> Html {
    let heading = section.heading();
    match section {
        DetailSection::Overview(text) | DetailSection::Role(text) => html! {
            <div class="modal-section">
                <h3 class="modal-section-title">{ heading.unwrap_or_default() }</h3>
                <p class="modal-section-text">{ text }</p>
            </div>
        },
        DetailSection::Tools(tools) => html! {
            <div class="modal-section">
                <h3 class="modal-section-title">{ heading.unwrap_or_default() }</h3>
                <p class="modal-section-text">{ tools }</p>
            </div>
        },
        DetailSection::Gallery(images) => html! {
            <div class="modal-section">
                <ImageCarousel key={project.id} {images} alt={project.title} />
            </div>
        },
        DetailSection::Link(href) => html! {
            <a class="link modal-link" {href} target="_blank" rel="noopener noreferrer">
                { "View project ↗" }
            </a>
        },
    }
}
