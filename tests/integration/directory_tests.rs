use crate::common::{self, TOKEN};
use ent_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_search_users() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mock = server
        .mock("POST", "/communication/visible")
        .match_header("x-xsrf-token", TOKEN)
        .match_body(Matcher::Json(json!({
            "search": "dupont",
            "classes": null,
            "structures": null,
            "functions": null,
            "types": ["User"],
        })))
        .with_status(200)
        .with_body(r#"{"users": [{"id": "u1", "displayName": "Jean Dupont", "profile": "Student"}], "groups": []}"#)
        .create_async()
        .await;

    let users = client
        .userbase()
        .search_users(&SearchFilter::query("dupont"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].kind.as_deref(), Some("Student"));
}

#[tokio::test]
async fn test_search_groups() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mock = server
        .mock("POST", "/communication/visible")
        .match_body(Matcher::PartialJson(json!({
            "search": "6A",
            "classes": ["c1"],
            "types": DEFAULT_GROUP_TYPE,
            "groupType": true,
            "nbUsersInGroups": true,
        })))
        .with_status(200)
        .with_body(r#"{"groups": [{"id": "g1", "name": "6A", "groupDisplayName": "Élèves de 6A", "nbUsers": 28}]}"#)
        .create_async()
        .await;

    let filter = SearchFilter {
        classes: Some(vec!["c1".to_string()]),
        ..SearchFilter::query("6A")
    };
    let groups = client
        .userbase()
        .search_groups(&filter, DEFAULT_GROUP_TYPE)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(groups[0].length, Some(28));
}

#[tokio::test]
async fn test_userbook_fetch() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let _mock = server
        .mock("GET", Matcher::Regex(r"^/userbook/api/person".to_string()))
        .match_query(Matcher::UrlEncoded("id".into(), "u1".into()))
        .with_status(200)
        .with_body(r#"{"result": [{"mood": "happy", "motto": "Carpe diem", "hobbies": []}]}"#)
        .create_async()
        .await;

    let data = client
        .userbook()
        .fetch(&User::from_id("u1"))
        .await
        .unwrap();
    assert_eq!(data.motto.as_deref(), Some("Carpe diem"));
}
