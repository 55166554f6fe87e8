//! Native confirmation dialog, exported for the templates' delete links.

#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Ask the user to confirm an action. Returns `false` outside a browser
/// window or when the dialog is suppressed.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = confirmAction)]
pub fn confirm_action(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
