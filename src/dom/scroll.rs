//! Page scroll suspension shared by the navigation panel and modals.
//!
//! Backed by a [`ScrollLock`] reference count: `body { overflow: hidden }`
//! is applied on the first lock and removed when the last holder unlocks.

#[cfg(feature = "web")]
use std::cell::RefCell;

#[cfg(feature = "web")]
use crate::state::scroll_lock::ScrollLock;

#[cfg(feature = "web")]
thread_local! {
    static LOCK: RefCell<ScrollLock> = RefCell::new(ScrollLock::default());
}

/// Take a scroll-suspension reference for an overlay that just opened.
#[cfg(feature = "web")]
pub(crate) fn lock() {
    if LOCK.with_borrow_mut(ScrollLock::acquire) {
        set_body_overflow(true);
    }
}

/// Release the reference for an overlay that just closed.
#[cfg(feature = "web")]
pub(crate) fn unlock() {
    if LOCK.with_borrow_mut(ScrollLock::release) {
        set_body_overflow(false);
    }
}

#[cfg(feature = "web")]
fn set_body_overflow(hidden: bool) {
    let Some(body) = super::document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    if hidden {
        let _ = style.set_property("overflow", "hidden");
    } else {
        let _ = style.remove_property("overflow");
    }
}
