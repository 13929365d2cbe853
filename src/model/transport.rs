/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Wire layer: one request in, one response out, cookies kept in a jar.

use crate::application::config::RestApiConfig;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Fully resolved outgoing request
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Final headers, after token injection
    pub headers: BTreeMap<String, String>,
    /// Encoded body
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Looks a header up, ignoring case
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response as received from the server, body fully buffered.
///
/// The content is exactly what the server sent; nothing is decoded until a
/// caller asks for it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    status: StatusCode,
    url: String,
    headers: HeaderMap,
    content: Vec<u8>,
}

impl HttpResponse {
    /// Builds a response from its status and body
    #[must_use]
    pub fn new(status: StatusCode, content: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            url: String::new(),
            headers: HeaderMap::new(),
            content: content.into(),
        }
    }

    /// Sets the URL the response came from
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Adds a header; invalid names or values are ignored
    #[must_use]
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            self.headers.append(name, value);
        }
        self
    }

    /// Status code
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Whether the status is 2xx
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Final URL, after redirects
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// First value of a header
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Raw body
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Body as text, invalid UTF-8 replaced
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }

    /// Body decoded as JSON
    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_slice(&self.content)?)
    }
}

/// Seam between the session manager and the network
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one request and buffers the whole response.
    ///
    /// Non-success statuses are returned as responses, not errors.
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse>;

    /// Value of a cookie held for the portal, if any
    fn cookie(&self, name: &str) -> Option<String>;
}

/// reqwest transport with an in-memory cookie jar
pub struct ReqwestTransport {
    client: Client,
    jar: Arc<Jar>,
    cookie_url: Url,
}

impl ReqwestTransport {
    /// Creates a transport for the configured portal
    pub fn new(config: &RestApiConfig) -> AppResult<Self> {
        let cookie_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::InvalidInput(format!("invalid base url {}: {e}", config.base_url))
        })?;
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .cookie_provider(jar.clone())
            .build()?;

        Ok(Self {
            client,
            jar,
            cookie_url,
        })
    }

    /// Puts a cookie in the jar, e.g. to restore a session saved elsewhere
    pub fn set_cookie(&self, name: &str, value: &str) {
        self.jar
            .add_cookie_str(&format!("{name}={value}; Path=/"), &self.cookie_url);
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        let url = response.url().to_string();
        let headers = response.headers().clone();
        let content = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status,
            url,
            headers,
            content,
        })
    }

    fn cookie(&self, name: &str) -> Option<String> {
        let header = self.jar.cookies(&self.cookie_url)?;
        find_cookie(header.to_str().ok()?, name)
    }
}

/// Extracts one cookie from a `Cookie` header value (`a=1; b=2`)
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}
