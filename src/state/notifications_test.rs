use super::*;

fn notification(text: &str, date: &str, is_read: bool) -> Notification {
    Notification {
        text: text.to_owned(),
        date: date.to_owned(),
        is_read,
    }
}

// =============================================================
// badge_label
// =============================================================

#[test]
fn badge_hidden_at_zero() {
    assert_eq!(badge_label(0), None);
}

#[test]
fn badge_shows_count_when_positive() {
    assert_eq!(badge_label(1).as_deref(), Some("1"));
    assert_eq!(badge_label(42).as_deref(), Some("42"));
}

// =============================================================
// render_list
// =============================================================

#[test]
fn empty_feed_renders_empty_state() {
    let html = render_list(&[]);
    assert!(html.contains(EMPTY_STATE_TEXT));
    assert!(!html.contains("notification-item"));
}

#[test]
fn single_unread_item_gets_unread_class() {
    let html = render_list(&[notification("A", "2024-01-01", false)]);
    assert_eq!(html.matches("notification-item").count(), 1);
    assert!(html.contains(r#"class="notification-item unread""#));
    assert!(html.contains(">A</p>"));
    assert!(html.contains(">2024-01-01</p>"));
}

#[test]
fn read_item_has_no_unread_class() {
    let html = render_list(&[notification("B", "2024-02-02", true)]);
    assert!(html.contains(r#"class="notification-item""#));
    assert!(!html.contains("unread"));
}

#[test]
fn list_preserves_order() {
    let html = render_list(&[
        notification("first", "d1", true),
        notification("second", "d2", false),
    ]);
    let first = html.find("first").expect("first");
    let second = html.find("second").expect("second");
    assert!(first < second);
}

#[test]
fn notification_text_is_escaped() {
    let html = render_list(&[notification("<script>alert(1)</script>", "d & t", false)]);
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("d &amp; t"));
}

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_replaces_special_characters() {
    assert_eq!(escape_html(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
}

#[test]
fn escape_html_leaves_plain_text_untouched() {
    assert_eq!(escape_html("Меню обновлено"), "Меню обновлено");
}
