use ticklist::Item;

#[test]
fn new_item_gets_default_flags_and_a_clock_id() {
    let item = Item::new("hello");

    assert_eq!(item.text, "hello");
    assert!(!item.completed);
    assert!(!item.removed);
    assert!(item.id > 0);
}

#[test]
fn created_at_recovers_seconds_from_the_id() {
    let item = Item {
        id: 1_700_000_000_123_456_789,
        text: "fixed".to_string(),
        completed: false,
        removed: false,
    };

    assert_eq!(item.created_at(), 1_700_000_000);
}

#[test]
fn time_ago_formats_by_elapsed_magnitude() {
    let seconds_ago = |secs: i64| Item {
        id: (chrono::Utc::now().timestamp() - secs) * 1_000_000_000,
        text: "aged".to_string(),
        completed: false,
        removed: false,
    };

    assert_eq!(Item::new("fresh").time_ago(), "just now");
    assert_eq!(seconds_ago(300).time_ago(), "5m ago");
    assert_eq!(seconds_ago(3 * 3600).time_ago(), "3h ago");
    assert_eq!(seconds_ago(7 * 86400).time_ago(), "7d ago");
}

#[test]
fn item_serialization_uses_expected_wire_fields() {
    let item = Item {
        id: 42,
        text: "ship it".to_string(),
        completed: true,
        removed: false,
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], 42);
    assert_eq!(json["text"], "ship it");
    assert_eq!(json["completed"], true);
    assert_eq!(json["removed"], false);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}
