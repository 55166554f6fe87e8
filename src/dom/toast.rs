//! Toast messages: transient status text that hides itself.
//!
//! One `#toast` element is reused for every message. A single auto-hide
//! timer is kept per element and cancelled-and-replaced on each call, so a
//! rapid second toast gets its full display time instead of being hidden
//! early by the first one's timer.

#[cfg(feature = "web")]
use std::cell::RefCell;

#[cfg(feature = "web")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;

/// How long a toast stays visible.
pub const TOAST_VISIBLE_MS: u32 = 3000;

#[cfg(feature = "web")]
thread_local! {
    static HIDE_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

/// Template-facing `showToast(message, kind)`. `kind` defaults to
/// `"success"` and selects the `toast-{kind}` style class.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: &str, kind: Option<String>) {
    show(message, kind.as_deref().unwrap_or("success"));
}

/// Show a toast of the given kind and (re)arm its auto-hide timer.
#[cfg(feature = "web")]
pub(crate) fn show(message: &str, kind: &str) {
    let Some(toast) = super::element_by_id("toast") else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name(&format!("toast toast-{kind}"));
    let _ = toast.class_list().remove_1("hidden");

    HIDE_TIMER.with_borrow_mut(|slot| {
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        *slot = Some(Timeout::new(TOAST_VISIBLE_MS, hide));
    });
}

#[cfg(feature = "web")]
fn hide() {
    if let Some(toast) = super::element_by_id("toast") {
        let _ = toast.class_list().add_1("hidden");
    }
    HIDE_TIMER.with_borrow_mut(|slot| {
        slot.take();
    });
}
