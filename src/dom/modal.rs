//! Modal lifecycle: open/close by id, overlay-click and Escape dismissal.
//!
//! Modal elements carry the `modal-overlay` class and are hidden via the
//! `hidden` class. Several modals may be open at once; every visibility
//! transition routes through the shared scroll lock so the page unlocks
//! only when the last one closes.

#[cfg(feature = "web")]
use wasm_bindgen::JsCast;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Marker class carried by dismissable modal overlay elements.
pub const OVERLAY_CLASS: &str = "modal-overlay";

/// Reveal the modal with the given id and suspend background scroll.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = openModal)]
pub fn open_modal(modal_id: &str) {
    let Some(modal) = super::element_by_id(modal_id) else {
        return;
    };
    // Already visible: nothing to do, and no extra lock reference.
    if !modal.class_list().contains("hidden") {
        return;
    }
    let _ = modal.class_list().remove_1("hidden");
    super::scroll::lock();
}

/// Hide the modal with the given id and release its scroll reference.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = closeModal)]
pub fn close_modal(modal_id: &str) {
    let Some(modal) = super::element_by_id(modal_id) else {
        return;
    };
    if modal.class_list().contains("hidden") {
        return;
    }
    let _ = modal.class_list().add_1("hidden");
    super::scroll::unlock();
}

/// Document click: a click landing on an overlay element dismisses it.
#[cfg(feature = "web")]
pub(crate) fn handle_overlay_click(event: &web_sys::Event) {
    let Some(target) = event.target() else {
        return;
    };
    let Some(element) = target.dyn_ref::<web_sys::Element>() else {
        return;
    };
    if element.class_list().contains(OVERLAY_CLASS) {
        let _ = element.class_list().add_1("hidden");
        super::scroll::unlock();
    }
}

/// Escape key: dismiss every visible overlay.
#[cfg(feature = "web")]
pub(crate) fn handle_keydown(event: &web_sys::KeyboardEvent) {
    if event.key() != "Escape" {
        return;
    }
    let Some(document) = super::document() else {
        return;
    };
    let Ok(overlays) = document.query_selector_all(&format!(".{OVERLAY_CLASS}:not(.hidden)"))
    else {
        return;
    };
    for i in 0..overlays.length() {
        let Some(element) = overlays.get(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let _ = element.class_list().add_1("hidden");
        super::scroll::unlock();
    }
}
