//! DOM glue: the element mutations behind each UI behavior.
//!
//! DESIGN
//! ======
//! Every module here reacts to one browser event or template call and
//! mutates a small set of elements looked up by id. A missing element is a
//! silent no-op, matching the pages that simply do not render that widget.
//! Anything touching `web_sys` is gated behind the `web` feature; the
//! localized strings and small pure helpers build everywhere so they stay
//! testable on the host.

pub mod confirm;
pub mod flash;
pub mod forms;
pub mod modal;
pub mod nav;
pub mod notifications;
pub mod scroll;
pub mod storage;
pub mod toast;

/// The browser document, if running in one.
#[cfg(feature = "web")]
pub(crate) fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Guarded element lookup by id.
#[cfg(feature = "web")]
pub(crate) fn element_by_id(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}
