//! localStorage persistence helpers.
//!
//! Values are stored as JSON under caller-chosen keys. Every failure mode
//! (no storage, quota exceeded, corrupt JSON) is logged and degrades to an
//! absent result; nothing here ever propagates an error to the caller.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Serialize `value` and store it under `key`.
pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(raw) = encode(value) else {
        return;
    };
    #[cfg(feature = "web")]
    {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.set_item(key, &raw) {
                log::warn!("localStorage write failed for {key:?}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (key, raw);
    }
}

/// Load and deserialize the value under `key`, or `None` if it is absent
/// or unparseable.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "web")]
    {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        decode(&raw)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = key;
        None
    }
}

/// Delete the value under `key`.
pub fn remove(key: &str) {
    #[cfg(feature = "web")]
    {
        if let Some(storage) = local_storage() {
            if let Err(e) = storage.remove_item(key) {
                log::warn!("localStorage remove failed for {key:?}: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = key;
    }
}

/// JSON-encode a value, logging serialization failures.
pub fn encode<T: Serialize>(value: &T) -> Option<String> {
    match serde_json::to_string(value) {
        Ok(raw) => Some(raw),
        Err(e) => {
            log::warn!("failed to serialize value for localStorage: {e}");
            None
        }
    }
}

/// Decode a stored JSON string, treating parse failures as absence.
pub fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("failed to parse stored value: {e}");
            None
        }
    }
}

#[cfg(feature = "web")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
