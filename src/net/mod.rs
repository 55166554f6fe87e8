//! Network layer: wire types and the JSON request helpers.

pub mod api;
pub mod types;
