use ent_client::model::responses::{RawVisibleGroup, RawVisibleUser, UserInfo};
use ent_client::presentation::{Group, User};
use serde_json::json;

#[test]
fn test_user_constructors() {
    let user = User::from_id("u1");
    assert_eq!(user.id, "u1");
    assert!(user.name.is_none());

    let named = User::named("u2", Some("Marie".to_string()));
    assert_eq!(named.name.as_deref(), Some("Marie"));
}

#[test]
fn test_user_from_search() {
    let raw: RawVisibleUser = serde_json::from_value(json!({
        "id": "u1", "displayName": "Jean Dupont", "profile": "Student"
    }))
    .unwrap();
    let user = User::from(raw);

    assert_eq!(user.name.as_deref(), Some("Jean Dupont"));
    assert_eq!(user.kind.as_deref(), Some("Student"));
}

#[test]
fn test_user_from_info() {
    let info: UserInfo = serde_json::from_value(json!({
        "userId": "u1",
        "username": "Jean Dupont",
        "type": ["Teacher"],
        "level": "6EME",
        "groupsIds": ["g1"],
        "classes": ["c1"],
        "structures": ["s1"]
    }))
    .unwrap();
    let user = User::from(info);

    assert_eq!(user.kind.as_deref(), Some("Teacher"));
    assert_eq!(user.level.as_deref(), Some("6EME"));
    assert_eq!(user.groups, vec!["g1"]);
    assert_eq!(user.schools, vec!["s1"]);
}

#[test]
fn test_group_from_search() {
    let raw: RawVisibleGroup = serde_json::from_value(json!({
        "id": "g1",
        "name": "6A-students",
        "groupDisplayName": "Élèves de 6A",
        "nbUsers": 28,
        "profile": "Student",
        "sortName": ["6A"]
    }))
    .unwrap();
    let group = Group::from(raw);

    assert_eq!(group.title.as_deref(), Some("Élèves de 6A"));
    assert_eq!(group.length, Some(28));
    assert_eq!(group.sort_name.as_deref(), Some("6A"));
}
