//! Small shared utilities: locale formatting and debounce.

pub mod debounce;
pub mod format;
