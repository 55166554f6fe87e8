//! Notifications dropdown and unread badge.
//!
//! Opening the dropdown fetches the feed, replaces the list markup, updates
//! the badge, and then fires a best-effort mark-read POST. A click anywhere
//! outside the dropdown and its toggle button closes it. Failed loads leave
//! whatever was rendered before; there is no error toast in this path.
//!
//! There is deliberately no guard against overlapping loads: toggling fast
//! enough can let a stale response land after a newer one. The feed is
//! idempotent server state, so the next open corrects it.

#[cfg(feature = "web")]
use wasm_bindgen::JsCast;
#[cfg(feature = "web")]
use wasm_bindgen::prelude::wasm_bindgen;
#[cfg(feature = "web")]
use wasm_bindgen_futures::spawn_local;

#[cfg(feature = "web")]
use crate::net::api;
#[cfg(feature = "web")]
use crate::state::notifications::{badge_label, render_list};

/// Flip dropdown visibility; a transition to visible triggers a load.
#[cfg(feature = "web")]
#[wasm_bindgen(js_name = toggleNotifications)]
pub fn toggle_notifications() {
    let Some(dropdown) = super::element_by_id("notifications-dropdown") else {
        return;
    };
    let Ok(hidden) = dropdown.class_list().toggle("hidden") else {
        return;
    };
    if !hidden {
        load();
    }
}

/// Fetch the feed and render it into the dropdown and badge.
#[cfg(feature = "web")]
fn load() {
    spawn_local(async {
        let Some(feed) = api::fetch_notifications().await else {
            return;
        };

        if let Some(list) = super::element_by_id("notifications-list") {
            list.set_inner_html(&render_list(&feed.notifications));
        }
        if let Some(badge) = super::element_by_id("notification-badge") {
            apply_badge(&badge, feed.unread_count);
        }

        // Everything just rendered counts as seen. Best-effort only.
        api::mark_notifications_read().await;
    });
}

/// One count fetch at page load to seed the badge. Unlike the dropdown
/// load this never marks anything read.
#[cfg(feature = "web")]
pub(crate) fn seed_badge() {
    if super::element_by_id("notification-badge").is_none() {
        return;
    }
    spawn_local(async {
        let Some(feed) = api::fetch_notifications().await else {
            return;
        };
        if let Some(badge) = super::element_by_id("notification-badge") {
            apply_badge(&badge, feed.unread_count);
        }
    });
}

/// Show the badge with the unread count, or hide it at zero.
#[cfg(feature = "web")]
fn apply_badge(badge: &web_sys::Element, unread_count: u32) {
    match badge_label(unread_count) {
        Some(label) => {
            badge.set_text_content(Some(&label));
            let _ = badge.class_list().remove_1("hidden");
            let _ = badge.class_list().add_1("flex");
        }
        None => {
            let _ = badge.class_list().add_1("hidden");
            let _ = badge.class_list().remove_1("flex");
        }
    }
}

/// Document click: close the dropdown unless the click landed inside it or
/// on its toggle button (`#notifications-toggle`).
#[cfg(feature = "web")]
pub(crate) fn handle_document_click(event: &web_sys::Event) {
    let Some(dropdown) = super::element_by_id("notifications-dropdown") else {
        return;
    };
    if let Some(element) = event.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
        let inside_dropdown = element.closest("#notifications-dropdown").ok().flatten().is_some();
        let on_toggle = element.closest("#notifications-toggle").ok().flatten().is_some();
        if inside_dropdown || on_toggle {
            return;
        }
    }
    let _ = dropdown.class_list().add_1("hidden");
}
