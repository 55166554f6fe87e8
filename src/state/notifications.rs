//! Render decisions for the notifications dropdown and badge.
//!
//! The DOM layer applies these verbatim: the list markup replaces the
//! dropdown's contents and the badge label decides visibility. Keeping the
//! markup generation pure lets the empty-state and unread-styling rules be
//! tested without a browser.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

/// Shown in the dropdown when there are no notifications.
pub const EMPTY_STATE_TEXT: &str = "Нет уведомлений";

/// Label for the unread-count badge: `Some(text)` means visible.
pub fn badge_label(unread_count: u32) -> Option<String> {
    if unread_count > 0 {
        Some(unread_count.to_string())
    } else {
        None
    }
}

/// Build the dropdown list markup for a set of notifications.
///
/// Unread records get the `unread` modifier class. Text and date come from
/// the server but are escaped anyway before being placed into `innerHTML`.
pub fn render_list(notifications: &[Notification]) -> String {
    if notifications.is_empty() {
        return format!(r#"<p class="p-4 text-center text-gray-500">{EMPTY_STATE_TEXT}</p>"#);
    }

    let mut html = String::new();
    for n in notifications {
        let unread = if n.is_read { "" } else { " unread" };
        html.push_str(&format!(
            concat!(
                r#"<div class="notification-item{}">"#,
                r#"<p class="text-sm text-gray-800">{}</p>"#,
                r#"<p class="text-xs text-gray-400 mt-1">{}</p>"#,
                "</div>"
            ),
            unread,
            escape_html(&n.text),
            escape_html(&n.date),
        ));
    }
    html
}

/// Minimal HTML escaping for text interpolated into markup.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
