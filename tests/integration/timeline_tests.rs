use crate::common;
use ent_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_list_exercises() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let _mock = server
        .mock("GET", "/exercizer/subjects-copy")
        .with_status(200)
        .with_body(
            r#"[{"id": 3, "owner": "me", "created": "2024-03-14T09:26:53.589",
                 "final_score": 12.0, "is_corrected": true}]"#,
        )
        .create_async()
        .await;

    let exercises = client.exercises().list().await.unwrap();
    assert_eq!(exercises.len(), 1);
    assert!(exercises[0].corrected);
    assert_eq!(exercises[0].result.score, Some(12.0));
}

#[tokio::test]
async fn test_feed_fetch() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mock = server
        .mock("GET", Matcher::Regex(r"^/timeline/lastNotifications".to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("type".into(), "MESSAGERIE".into()),
            Matcher::UrlEncoded("page".into(), "0".into()),
        ]))
        .with_status(200)
        .with_body(
            r#"{"results": [{"_id": "n1", "type": "MESSAGERIE", "event-type": "SEND-MESSAGE",
                 "sender": "u1", "params": {"username": "Jean Dupont", "uri": "/zimbra/1"},
                 "message": "Nouveau message", "date": {"$date": "2024-03-14T09:26:53.589"}}]}"#,
        )
        .create_async()
        .await;

    let filter = FeedFilter {
        types: vec!["MESSAGERIE".to_string()],
        page: Some(0),
    };
    let items = client.feed().fetch(&filter).await.unwrap();

    mock.assert_async().await;
    assert_eq!(items[0].url.as_deref(), Some("/zimbra/1"));
    assert!(items[0].date.is_some());
}

#[tokio::test]
async fn test_account_refresh_bypasses_cache() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mock = server
        .mock("GET", "/auth/oauth2/userinfo")
        .with_status(200)
        .with_body(r#"{"userId": "me", "username": "Moi", "type": "Student", "classes": ["c1"]}"#)
        .expect(3)
        .create_async()
        .await;

    let user = client.account().refresh().await.unwrap();
    assert_eq!(user.id, "me");
    client.account().refresh().await.unwrap();
    client.account().refresh().await.unwrap();

    // memoized from the last refresh
    let memoized = client.account().user().await.unwrap();
    assert_eq!(memoized.classes, vec!["c1"]);

    mock.assert_async().await;
}
