//! Page-load initialization.
//!
//! Runs once when the WASM module loads (module scripts execute after the
//! document has been parsed, so the DOM is ready): sets up logging and the
//! panic hook, installs the window/document listeners, schedules flash
//! banner auto-hide, and seeds the notification badge.
//!
//! Listener closures are intentionally leaked with `forget`; they live for
//! the life of the page.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::AddEventListenerOptions;

use crate::dom;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    install_window_listeners();
    install_document_listeners();

    dom::flash::schedule_auto_hide();
    dom::notifications::seed_badge();
}

fn install_window_listeners() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_resize = Closure::<dyn FnMut()>::new(|| dom::nav::handle_resize());
    let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}

fn install_document_listeners() {
    let Some(document) = dom::document() else {
        return;
    };

    let passive = AddEventListenerOptions::new();
    passive.set_passive(true);

    let on_touch_start = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(
        |event: web_sys::TouchEvent| dom::nav::handle_touch_start(&event),
    );
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchstart",
        on_touch_start.as_ref().unchecked_ref(),
        &passive,
    );
    on_touch_start.forget();

    let on_touch_end = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(
        |event: web_sys::TouchEvent| dom::nav::handle_touch_end(&event),
    );
    let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "touchend",
        on_touch_end.as_ref().unchecked_ref(),
        &passive,
    );
    on_touch_end.forget();

    // Two independent click concerns, as two listeners: closing the
    // notifications dropdown and dismissing clicked modal overlays.
    let on_outside_click = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        dom::notifications::handle_document_click(&event);
    });
    let _ = document
        .add_event_listener_with_callback("click", on_outside_click.as_ref().unchecked_ref());
    on_outside_click.forget();

    let on_overlay_click = Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
        dom::modal::handle_overlay_click(&event);
    });
    let _ = document
        .add_event_listener_with_callback("click", on_overlay_click.as_ref().unchecked_ref());
    on_overlay_click.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        |event: web_sys::KeyboardEvent| dom::modal::handle_keydown(&event),
    );
    let _ =
        document.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
