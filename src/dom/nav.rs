//! Mobile navigation panel: open/close, resize force-close, swipe-to-close.
//!
//! The panel (`#mobile-nav`) and its overlay (`#mobile-nav-overlay`) carry
//! the `active` class together; [`NavState`] mirrors that so a resize event
//! landing on an already-closed panel does not disturb the scroll lock.

#[cfg(feature = "web")]
use std::cell::RefCell;

#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "web")]
use crate::state::nav::{NavState, SwipeTracker};

/// Viewport widths above this are desktop: the panel force-closes.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

#[cfg(feature = "web")]
thread_local! {
    static NAV: RefCell<NavState> = RefCell::new(NavState::default());
    static SWIPE: RefCell<SwipeTracker> = RefCell::new(SwipeTracker::default());
}

/// Open the panel and overlay, suspending background scroll.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = openMobileNav)]
pub fn open_mobile_nav() {
    let Some(nav) = super::element_by_id("mobile-nav") else {
        return;
    };
    let Some(overlay) = super::element_by_id("mobile-nav-overlay") else {
        return;
    };
    if !NAV.with_borrow_mut(NavState::open) {
        return;
    }
    let _ = nav.class_list().add_1("active");
    let _ = overlay.class_list().add_1("active");
    super::scroll::lock();
}

/// Close the panel and overlay, releasing the scroll lock. Idempotent.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = closeMobileNav)]
pub fn close_mobile_nav() {
    let Some(nav) = super::element_by_id("mobile-nav") else {
        return;
    };
    let Some(overlay) = super::element_by_id("mobile-nav-overlay") else {
        return;
    };
    if !NAV.with_borrow_mut(NavState::close) {
        return;
    }
    let _ = nav.class_list().remove_1("active");
    let _ = overlay.class_list().remove_1("active");
    super::scroll::unlock();
}

/// Window resize: crossing above the mobile breakpoint force-closes.
#[cfg(feature = "web")]
pub(crate) fn handle_resize() {
    let width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64());
    if let Some(width) = width {
        if width > MOBILE_BREAKPOINT_PX {
            close_mobile_nav();
        }
    }
}

/// Document `touchstart`: remember where the gesture began.
#[cfg(feature = "web")]
pub(crate) fn handle_touch_start(event: &web_sys::TouchEvent) {
    if let Some(touch) = event.changed_touches().get(0) {
        SWIPE.with_borrow_mut(|tracker| tracker.touch_start(touch.screen_x()));
    }
}

/// Document `touchend`: a long-enough leftward swipe closes an open panel.
#[cfg(feature = "web")]
pub(crate) fn handle_touch_end(event: &web_sys::TouchEvent) {
    let Some(touch) = event.changed_touches().get(0) else {
        return;
    };
    let close_gesture = SWIPE.with_borrow_mut(|tracker| tracker.touch_end(touch.screen_x()));
    if close_gesture && NAV.with_borrow(|state| state.is_open()) {
        close_mobile_nav();
    }
}
