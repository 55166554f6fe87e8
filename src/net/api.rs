//! JSON request helpers.
//!
//! Browser builds issue real HTTP calls via `gloo-net`; without the `web`
//! feature the typed helpers are stubs so the crate still builds and tests
//! on the host.
//!
//! ERROR HANDLING
//! ==============
//! The generic [`api_request`] helper collapses every failure mode (network
//! error, non-JSON body) into a `null` return plus one error toast, which is
//! the contract the inline template scripts rely on. The typed notification
//! calls are best-effort: they log and return `None`/nothing, leaving the UI
//! in its last-known state.

#![allow(clippy::unused_async)]

use crate::net::types::NotificationFeed;

/// Toast text shown when a generic API request fails.
pub const REQUEST_FAILED_TEXT: &str = "Произошла ошибка";

/// Fetch the notification feed from `GET /api/notifications`.
///
/// Returns `None` on any failure; the caller keeps whatever it last
/// rendered. There is deliberately no error toast in this path.
pub async fn fetch_notifications() -> Option<NotificationFeed> {
    #[cfg(feature = "web")]
    {
        let resp = match gloo_net::http::Request::get("/api/notifications").send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("notifications fetch failed: {e}");
                return None;
            }
        };
        match resp.json::<NotificationFeed>().await {
            Ok(feed) => Some(feed),
            Err(e) => {
                log::warn!("notifications payload invalid: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Mark all notifications read via `POST /api/notifications/read`.
///
/// Best-effort, non-blocking side effect: the response body is ignored and
/// a failure is neither retried nor surfaced.
pub async fn mark_notifications_read() {
    #[cfg(feature = "web")]
    {
        let _ = gloo_net::http::Request::post("/api/notifications/read").send().await;
    }
}

/// Generic JSON request helper exported to the templates as `apiRequest`.
///
/// Content type is always JSON; the optional body is serialized from the
/// caller's value. The parsed response payload is returned as-is, or `null`
/// after logging and showing one error toast. HTTP status codes are not
/// inspected: an error page that happens to be JSON still resolves.
#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(js_name = apiRequest)]
pub async fn api_request(
    url: String,
    method: Option<String>,
    body: wasm_bindgen::JsValue,
) -> wasm_bindgen::JsValue {
    let method = method.unwrap_or_else(|| "GET".to_owned());
    match request_json(&url, &method, &body).await {
        Ok(value) => value,
        Err(e) => {
            log::error!("API error: {e}");
            crate::dom::toast::show(REQUEST_FAILED_TEXT, "error");
            wasm_bindgen::JsValue::NULL
        }
    }
}

#[cfg(feature = "web")]
async fn request_json(
    url: &str,
    method: &str,
    body: &wasm_bindgen::JsValue,
) -> Result<wasm_bindgen::JsValue, String> {
    use gloo_net::http::{Method, RequestBuilder};

    let method = match method.to_ascii_uppercase().as_str() {
        "POST" => Method::POST,
        "PUT" => Method::PUT,
        "PATCH" => Method::PATCH,
        "DELETE" => Method::DELETE,
        _ => Method::GET,
    };

    let builder = RequestBuilder::new(url)
        .method(method)
        .header("Content-Type", "application/json");

    let request = if body.is_undefined() || body.is_null() {
        builder.build().map_err(|e| e.to_string())?
    } else {
        let json = js_sys::JSON::stringify(body)
            .map_err(|_| "request body is not serializable".to_owned())?;
        builder
            .body(String::from(json))
            .map_err(|e| e.to_string())?
    };

    let resp = request.send().await.map_err(|e| e.to_string())?;
    let text = resp.text().await.map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&text).map_err(|_| format!("response from {url} is not valid JSON"))
}
