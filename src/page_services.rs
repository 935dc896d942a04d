use std::cell::Cell;
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent};

/// Page-wide capabilities shared through Yew context. Components acquire what
/// they need and release it by dropping the returned handle.
#[derive(Clone)]
pub(crate) struct PageServices {
    scroll_locks: Rc<Cell<u32>>,
}

impl PartialEq for PageServices {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.scroll_locks, &other.scroll_locks)
    }
}

impl PageServices {
    pub(crate) fn new() -> Self {
        Self {
            scroll_locks: Rc::new(Cell::new(0)),
        }
    }

    /// Disables body scrolling until the last guard is dropped.
    pub(crate) fn lock_scroll(&self) -> ScrollLockGuard {
        let held = self.scroll_locks.get();
        if held == 0 {
            set_body_overflow(true);
        }
        self.scroll_locks.set(held.saturating_add(1));
        ScrollLockGuard {
            scroll_locks: Rc::clone(&self.scroll_locks),
        }
    }

    #[cfg(test)]
    pub(crate) fn scroll_locked(&self) -> bool {
        self.scroll_locks.get() > 0
    }

    /// Calls `on_escape` for every Escape key release on the window.
    pub(crate) fn on_escape<F>(&self, on_escape: F) -> Option<EventListener>
    where
        F: Fn() + 'static,
    {
        let window = web_sys::window()?;
        Some(EventListener::new(&window, "keyup", move |event: &Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if event.key() == "Escape" {
                on_escape();
            }
        }))
    }
}

pub(crate) struct ScrollLockGuard {
    scroll_locks: Rc<Cell<u32>>,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let remaining = self.scroll_locks.get().saturating_sub(1);
        self.scroll_locks.set(remaining);
        if remaining == 0 {
            set_body_overflow(false);
        }
    }
}

fn set_body_overflow(hidden: bool) {
    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        return;
    };
    let value = if hidden { "hidden" } else { "unset" };
    let _ = body.style().set_property("overflow", value);
}

/// The URL fragment without its leading `#`, if any.
pub(crate) fn location_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let fragment = hash.trim_start_matches('#').trim();
    (!fragment.is_empty()).then(|| fragment.to_string())
}

pub(crate) fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub(crate) fn is_mobile(breakpoint_px: f64) -> bool {
    let width = viewport_width();
    width > 0.0 && width < breakpoint_px
}

pub(crate) fn is_touch_device() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let has_touch_handler = js_sys::Reflect::has(&window, &"ontouchstart".into()).unwrap_or(false);
    has_touch_handler || window.navigator().max_touch_points() > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_error_panic_hook::set_once as set_panic_hook;
    use std::rc::Rc;
    use wasm_bindgen_test::*;
    use web_sys::KeyboardEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn body_overflow() -> String {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn scroll_lock_restores_after_last_guard() {
        set_panic_hook();
        let services = PageServices::new();
        let first = services.lock_scroll();
        let second = services.lock_scroll();
        assert_eq!(body_overflow(), "hidden");
        drop(first);
        assert!(services.scroll_locked());
        assert_eq!(body_overflow(), "hidden");
        drop(second);
        assert!(!services.scroll_locked());
        assert_eq!(body_overflow(), "unset");
    }

    #[wasm_bindgen_test]
    fn escape_listener_ignores_other_keys() {
        set_panic_hook();
        let services = PageServices::new();
        let hits = Rc::new(Cell::new(0u32));
        let hits_for_listener = hits.clone();
        let listener = services.on_escape(move || hits_for_listener.set(hits_for_listener.get() + 1));
        assert!(listener.is_some());
        let window = web_sys::window().expect("window available");
        for key in ["Enter", "Escape"] {
            let init = KeyboardEventInit::new();
            init.set_key(key);
            let event = KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init)
                .expect("keyboard event");
            window.dispatch_event(&event).expect("dispatch keyup");
        }
        assert_eq!(hits.get(), 1);
        drop(listener);
        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keyup", &init)
            .expect("keyboard event");
        window.dispatch_event(&event).expect("dispatch keyup");
        assert_eq!(hits.get(), 1);
    }
}
