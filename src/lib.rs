//! # schoolmeal-client
//!
//! WASM front-end glue for the school meal management application.
//! The pages themselves are server-rendered; this crate provides the
//! client-side behavior layer: mobile navigation, toast messages, the
//! notifications dropdown, modal lifecycle, a JSON request helper,
//! locale formatting, form validation, and localStorage persistence.
//!
//! Functions the templates invoke inline (`openModal(...)`,
//! `showToast(...)`, ...) are exported through `wasm_bindgen` under their
//! original camelCase names. Everything that touches the browser is gated
//! behind the `web` feature; the pure models and formatting logic build
//! and test on any host.

pub mod dom;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "web")]
pub mod boot;
