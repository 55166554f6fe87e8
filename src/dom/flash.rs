//! Flash banner auto-hide.
//!
//! Server-rendered `.alert` banners fade out after a fixed delay and are
//! removed from the document once the transition has played.

#[cfg(feature = "web")]
use gloo_timers::callback::Timeout;
#[cfg(feature = "web")]
use wasm_bindgen::JsCast;

/// How long a flash banner stays fully visible.
pub const FLASH_VISIBLE_MS: u32 = 5000;

/// Duration of the fade transition before removal.
pub const FLASH_FADE_MS: u32 = 300;

/// Schedule fade-and-remove for every flash banner on the page.
#[cfg(feature = "web")]
pub(crate) fn schedule_auto_hide() {
    let Some(document) = super::document() else {
        return;
    };
    let Ok(alerts) = document.query_selector_all(".alert") else {
        return;
    };
    for i in 0..alerts.length() {
        let Some(alert) = alerts.get(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        Timeout::new(FLASH_VISIBLE_MS, move || {
            let style = alert.style();
            let _ = style.set_property("opacity", "0");
            let _ = style.set_property("transform", "translateY(-10px)");
            Timeout::new(FLASH_FADE_MS, move || alert.remove()).forget();
        })
        .forget();
    }
}
