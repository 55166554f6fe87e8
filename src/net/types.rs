//! Wire types for the notifications endpoint.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// A single notification record as served by `GET /api/notifications`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Notification {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub is_read: bool,
}

/// Response body of `GET /api/notifications`.
///
/// Both fields default so a sparse or partial payload still deserializes;
/// the server is the sole source of truth and nothing is cached locally.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct NotificationFeed {
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub unread_count: u32,
}
