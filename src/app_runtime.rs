use std::cell::RefCell;

use folio_core::{Tuning, TUNING_KEYS};

const TUNING_KEY_PREFIX: &str = "folio.debug.";

thread_local! {
    static TUNING: RefCell<Option<Tuning>> = RefCell::new(None);
}

pub(crate) fn set_tuning(tuning: Tuning) {
    TUNING.with(|slot| {
        *slot.borrow_mut() = Some(tuning);
    });
}

pub(crate) fn tuning() -> Tuning {
    TUNING
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(load_tuning)
}

/// Defaults with any `folio.debug.<key>` overrides found in local storage.
pub(crate) fn load_tuning() -> Tuning {
    let mut tuning = Tuning::default();
    let Some(storage) = web_sys::window().and_then(|window| window.local_storage().ok().flatten())
    else {
        return tuning;
    };
    for key in TUNING_KEYS {
        let storage_key = format!("{TUNING_KEY_PREFIX}{key}");
        let Ok(Some(value)) = storage.get_item(&storage_key) else {
            continue;
        };
        match tuning.apply_override(key, &value) {
            Ok(()) => gloo::console::log!("tuning override", storage_key, value),
            Err(err) => gloo::console::warn!("tuning override ignored", err.to_string()),
        }
    }
    tuning
}
