use crate::common::{self, TOKEN};
use ent_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_login() {
    let mut server = Server::new_async().await;
    let login = common::mock_login(&mut server).await;

    let client = Client::new(common::config_for(&server)).await.unwrap();

    login.assert_async().await;
    assert!(client.http().is_authenticated().await);
    assert_eq!(client.http().csrf_token().as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn test_login_without_cookie() {
    let mut server = Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body("<html>Identifiant ou mot de passe incorrect</html>")
        .create_async()
        .await;

    let result = Client::new(common::config_for(&server)).await;
    assert!(matches!(result, Err(AppError::Authentication(_))));
}

#[tokio::test]
async fn test_login_server_error() {
    let mut server = Server::new_async().await;
    let _login = server
        .mock("POST", "/auth/login")
        .with_status(503)
        .create_async()
        .await;

    let error = Client::new(common::config_for(&server))
        .await
        .err()
        .expect("login must fail");
    assert_eq!(error.status(), Some(StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn test_csrf_header_is_sent() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mock = server
        .mock("POST", "/communication/visible")
        .match_header("x-xsrf-token", TOKEN)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    client
        .http()
        .request(
            "communication/visible",
            RequestOptions::post()
                .header("X-XSRF-TOKEN", "stale")
                .inject_csrf_token(true),
        )
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_cached_reads_hit_server_once() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mock = server
        .mock("GET", Matcher::Regex(r"^/zimbra/count/INBOX".to_string()))
        .match_query(Matcher::UrlEncoded("unread".into(), "true".into()))
        .with_status(200)
        .with_body(r#"{"count": 4}"#)
        .expect(1)
        .create_async()
        .await;

    assert_eq!(client.mail().unread_count().await.unwrap(), 4);
    assert_eq!(client.mail().unread_count().await.unwrap(), 4);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_failed_reads_are_retried_by_caller_only() {
    let mut server = Server::new_async().await;
    let client = common::logged_in_client(&mut server).await;

    let mock = server
        .mock("GET", "/exercizer/subjects-copy")
        .with_status(401)
        .with_body("session expired")
        .expect(2)
        .create_async()
        .await;

    for _ in 0..2 {
        match client.exercises().list().await {
            Err(AppError::RequestFailed { status, body, .. }) => {
                assert_eq!(status, StatusCode::UNAUTHORIZED);
                assert_eq!(body, b"session expired");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    mock.assert_async().await;
}
