use ent_client::model::responses::RawNotification;
use ent_client::presentation::FeedItem;
use serde_json::json;

#[test]
fn test_feed_item_from_raw() {
    let raw: RawNotification = serde_json::from_value(json!({
        "_id": "n1",
        "type": "BLOG",
        "event-type": "PUBLISH",
        "sender": "u1",
        "params": {"username": "Jean Dupont", "uri": "/blog#/view/1"},
        "message": "<p>Nouveau billet</p>",
        "date": {"$date": "2024-03-14T09:26:53.589"}
    }))
    .unwrap();

    let item = FeedItem::from(raw);
    assert_eq!(item.kind.as_deref(), Some("BLOG"));
    assert_eq!(item.event.as_deref(), Some("PUBLISH"));
    assert_eq!(item.sender.name.as_deref(), Some("Jean Dupont"));
    assert_eq!(item.url.as_deref(), Some("/blog#/view/1"));
    assert!(item.date.is_some());
}

#[test]
fn test_feed_item_falls_back_to_resource_uri() {
    let raw: RawNotification = serde_json::from_value(json!({
        "_id": "n2",
        "params": {"resourceUri": "/rack"},
        "date": "2024-03-14T09:26:53.589"
    }))
    .unwrap();

    let item = FeedItem::from(raw);
    assert_eq!(item.url.as_deref(), Some("/rack"));
    assert!(item.date.is_some());
    assert_eq!(item.sender.id, "");
}
