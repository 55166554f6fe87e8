use super::*;

#[test]
fn feed_deserializes_full_payload() {
    let json = r#"{
        "notifications": [
            {"text": "Меню обновлено", "date": "2024-01-01", "is_read": false},
            {"text": "Оплата получена", "date": "2024-01-02", "is_read": true}
        ],
        "unread_count": 1
    }"#;
    let feed: NotificationFeed = serde_json::from_str(json).expect("feed");
    assert_eq!(feed.notifications.len(), 2);
    assert_eq!(feed.notifications[0].text, "Меню обновлено");
    assert!(!feed.notifications[0].is_read);
    assert!(feed.notifications[1].is_read);
    assert_eq!(feed.unread_count, 1);
}

#[test]
fn feed_defaults_missing_fields() {
    let feed: NotificationFeed = serde_json::from_str("{}").expect("feed");
    assert!(feed.notifications.is_empty());
    assert_eq!(feed.unread_count, 0);
}

#[test]
fn notification_defaults_missing_fields() {
    let n: Notification = serde_json::from_str(r#"{"text": "A"}"#).expect("notification");
    assert_eq!(n.text, "A");
    assert_eq!(n.date, "");
    assert!(!n.is_read);
}
