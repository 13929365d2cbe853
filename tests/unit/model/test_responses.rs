use ent_client::model::responses::{
    PersonResponse, RawFolder, RawMail, RawRackItem, TimelineResponse, UserInfo, VisibleResponse,
};
use serde_json::json;

#[test]
fn test_folder_tree() {
    let raw: RawFolder = serde_json::from_value(json!({
        "folderName": "Inbox",
        "id": "2",
        "path": "/Inbox",
        "unread": null,
        "folders": [
            {"folderName": "School", "id": 7, "path": "/Inbox/School", "unread": 3}
        ]
    }))
    .unwrap();

    assert_eq!(raw.id, 2);
    assert_eq!(raw.unread, 0);
    assert_eq!(raw.folders.len(), 1);
    assert_eq!(raw.folders[0].unread, 3);
    assert!(raw.folders[0].folders.is_empty());
}

#[test]
fn test_mail_entry() {
    let raw: RawMail = serde_json::from_value(json!({
        "id": 1234,
        "date": 1_710_408_413_000_i64,
        "subject": "Sortie",
        "unread": true,
        "hasAttachment": false,
        "from": "u1",
        "to": ["u2"],
        "cc": null,
        "displayNames": [["u1", "Jean Dupont"], ["u2", "Marie Curie"]]
    }))
    .unwrap();

    assert_eq!(raw.id, 1234);
    assert!(raw.unread);
    assert!(raw.cc.is_empty());
    assert!(raw.bcc.is_empty());
    assert_eq!(raw.display_names[1].1, "Marie Curie");
}

#[test]
fn test_rack_item() {
    let raw: RawRackItem = serde_json::from_value(json!({
        "_id": "r1",
        "name": "notes.pdf",
        "sent": "2024-03-14T09:26+0100",
        "metadata": {"content-type": "application/pdf", "size": 2048}
    }))
    .unwrap();

    assert_eq!(raw.id, "r1");
    let metadata = raw.metadata.unwrap();
    assert_eq!(metadata.content_type.as_deref(), Some("application/pdf"));
    assert_eq!(metadata.size, Some(2048));
    assert!(raw.file.is_none());
}

#[test]
fn test_visible_response_with_missing_lists() {
    let raw: VisibleResponse = serde_json::from_value(json!({"users": null})).unwrap();
    assert!(raw.users.is_empty());
    assert!(raw.groups.is_empty());
}

#[test]
fn test_person_response() {
    let raw: PersonResponse = serde_json::from_value(json!({
        "result": [{"mood": "happy", "hobbies": [{"visibility": "PRIVE", "category": "sport", "values": "judo"}]}]
    }))
    .unwrap();
    assert_eq!(raw.result[0].hobbies[0].values.as_deref(), Some("judo"));
}

#[test]
fn test_timeline_response() {
    let raw: TimelineResponse = serde_json::from_value(json!({
        "results": [{
            "_id": "n1",
            "type": "MESSAGERIE",
            "event-type": "SEND-MESSAGE",
            "params": {"username": "Jean", "resourceUri": "/zimbra/1"}
        }]
    }))
    .unwrap();

    let notification = &raw.results[0];
    assert_eq!(notification.kind.as_deref(), Some("MESSAGERIE"));
    assert_eq!(notification.event_type.as_deref(), Some("SEND-MESSAGE"));
    assert_eq!(notification.params.resource_uri.as_deref(), Some("/zimbra/1"));
}

#[test]
fn test_user_info() {
    let raw: UserInfo = serde_json::from_value(json!({
        "userId": "u1",
        "username": "Jean Dupont",
        "type": ["Student"],
        "groupsIds": ["g1", "g2"],
        "classes": ["c1"],
        "structures": null
    }))
    .unwrap();

    assert_eq!(raw.user_id, "u1");
    assert_eq!(raw.groups_ids.len(), 2);
    assert!(raw.structures.is_empty());
}
