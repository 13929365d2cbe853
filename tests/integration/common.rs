// Common utilities for integration tests

use ent_client::prelude::*;
use mockito::{Matcher, ServerGuard};

pub const TOKEN: &str = "test-token";

/// Configuration pointing at the mock server
pub fn config_for(server: &ServerGuard) -> Config {
    Config::with_credentials("jean.dupont", "secret").with_base_url(format!("{}/", server.url()))
}

/// Mocks the login endpoint, setting the CSRF cookie
pub async fn mock_login(server: &mut ServerGuard) -> mockito::Mock {
    server
        .mock("POST", "/auth/login")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), "jean.dupont".into()),
            Matcher::UrlEncoded("password".into(), "secret".into()),
        ]))
        .with_status(200)
        .with_header("set-cookie", &format!("XSRF-TOKEN={TOKEN}; Path=/"))
        .with_body("<html></html>")
        .create_async()
        .await
}

/// Logged-in client against the mock server
pub async fn logged_in_client(server: &mut ServerGuard) -> Client {
    setup_logger();
    let _login = mock_login(server).await;
    Client::new(config_for(server))
        .await
        .expect("Failed to login")
}
