/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request description handed to [`crate::model::http::HttpClient::request`].

use crate::error::{AppError, AppResult};
use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Body of an outgoing request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Key/value payload, sent form-encoded or as JSON text
    Structured(Value),
    /// Pre-encoded bytes sent untouched (multipart uploads)
    Raw(Vec<u8>),
}

/// Wire form of a [`RequestBody`]
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedBody {
    /// Bytes put on the wire
    pub bytes: Vec<u8>,
    /// Content type implied by the encoding, if any
    pub content_type: Option<&'static str>,
}

impl RequestBody {
    /// Serialized form used in the cache key
    #[must_use]
    pub fn fingerprint_bytes(&self) -> Vec<u8> {
        match self {
            RequestBody::Structured(value) => value.to_string().into_bytes(),
            RequestBody::Raw(bytes) => bytes.clone(),
        }
    }

    /// Encodes the body for the wire.
    ///
    /// Structured bodies become JSON text when `as_json` is set (no content
    /// type is implied, the portal's own front-end sends JSON that way),
    /// otherwise `application/x-www-form-urlencoded`.
    pub fn encode(&self, as_json: bool) -> AppResult<EncodedBody> {
        match self {
            RequestBody::Structured(value) if as_json => Ok(EncodedBody {
                bytes: serde_json::to_vec(value)?,
                content_type: None,
            }),
            RequestBody::Structured(value) => Ok(EncodedBody {
                bytes: encode_form(value)?.into_bytes(),
                content_type: Some("application/x-www-form-urlencoded"),
            }),
            RequestBody::Raw(bytes) => Ok(EncodedBody {
                bytes: bytes.clone(),
                content_type: None,
            }),
        }
    }
}

/// Form-encodes a JSON object.
///
/// Arrays become repeated keys, `null` values are skipped, nested objects
/// are sent as JSON text.
///
/// # Errors
/// `AppError::InvalidInput` when `value` is not an object.
pub fn encode_form(value: &Value) -> AppResult<String> {
    let Value::Object(map) = value else {
        return Err(AppError::InvalidInput(format!(
            "form body must be an object, got {value}"
        )));
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in map {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.iter().filter(|item| !item.is_null()) {
                    pairs.push(form_pair(key, item));
                }
            }
            other => pairs.push(form_pair(key, other)),
        }
    }
    Ok(pairs.join("&"))
}

fn form_pair(key: &str, value: &Value) -> String {
    let value = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    format!(
        "{}={}",
        urlencoding::encode(key),
        urlencoding::encode(&value)
    )
}

/// Cache key of a request: method, path, serialized body and serialized
/// caller headers. Two requests with equal fingerprints are interchangeable.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RequestFingerprint {
    method: String,
    path: String,
    body: Option<Vec<u8>>,
    headers: Option<String>,
}

impl RequestFingerprint {
    /// Builds a fingerprint from the parts of a request
    #[must_use]
    pub fn new(
        method: &Method,
        path: &str,
        body: Option<&RequestBody>,
        headers: Option<&BTreeMap<String, String>>,
    ) -> Self {
        Self {
            method: method.as_str().to_string(),
            path: path.to_string(),
            body: body.map(RequestBody::fingerprint_bytes),
            headers: headers.map(|headers| {
                headers
                    .iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            }),
        }
    }

    /// HTTP method
    #[must_use]
    pub fn method(&self) -> &str {
        &self.method
    }

    /// Path as given by the caller
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Serialized body, if any
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

// Bodies carry credentials on login, only their size is ever printed.
impl fmt::Display for RequestFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        if let Some(body) = &self.body {
            write!(f, " (body: {} bytes)", body.len())?;
        }
        if let Some(headers) = &self.headers {
            write!(f, " (headers: {})", headers.lines().count())?;
        }
        Ok(())
    }
}

impl fmt::Debug for RequestFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestFingerprint")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("body_len", &self.body.as_ref().map(Vec::len))
            .field("headers", &self.headers)
            .finish()
    }
}

/// Options of a single request.
///
/// ```
/// use ent_client::model::requests::RequestOptions;
/// use serde_json::json;
///
/// let options = RequestOptions::post()
///     .json(json!({"search": "dupont"}))
///     .inject_csrf_token(true);
/// assert!(options.body_is_json);
/// assert!(options.use_cache);
/// ```
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method, GET by default
    pub method: Method,
    /// Optional body
    pub body: Option<RequestBody>,
    /// Caller headers
    pub headers: Option<BTreeMap<String, String>>,
    /// Serve from and store into the request cache
    pub use_cache: bool,
    /// Join the path to the base URL; when false the path is a full URL
    pub absolute_path: bool,
    /// Send a structured body as JSON text instead of form-encoded
    pub body_is_json: bool,
    /// Echo the CSRF cookie in the `X-XSRF-TOKEN` header
    pub inject_csrf_token: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: None,
            use_cache: true,
            absolute_path: true,
            body_is_json: false,
            inject_csrf_token: false,
        }
    }
}

impl RequestOptions {
    /// GET with caching, the defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shorthand for a POST
    #[must_use]
    pub fn post() -> Self {
        Self::default().method(Method::POST)
    }

    /// Sets the HTTP method
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Sets a body without changing its encoding
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Structured body sent form-encoded
    #[must_use]
    pub fn form(self, value: Value) -> Self {
        self.body(RequestBody::Structured(value)).body_is_json(false)
    }

    /// Structured body sent as JSON text
    #[must_use]
    pub fn json(self, value: Value) -> Self {
        self.body(RequestBody::Structured(value)).body_is_json(true)
    }

    /// Raw bytes sent as-is
    #[must_use]
    pub fn raw(self, bytes: Vec<u8>) -> Self {
        self.body(RequestBody::Raw(bytes))
    }

    /// Chooses JSON or form encoding for structured bodies
    #[must_use]
    pub fn body_is_json(mut self, body_is_json: bool) -> Self {
        self.body_is_json = body_is_json;
        self
    }

    /// Adds one caller header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replaces the caller headers
    #[must_use]
    pub fn headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Enables or disables the request cache for this call
    #[must_use]
    pub fn use_cache(mut self, use_cache: bool) -> Self {
        self.use_cache = use_cache;
        self
    }

    /// See [`RequestOptions::absolute_path`]
    #[must_use]
    pub fn absolute_path(mut self, absolute_path: bool) -> Self {
        self.absolute_path = absolute_path;
        self
    }

    /// Enables CSRF header injection
    #[must_use]
    pub fn inject_csrf_token(mut self, inject: bool) -> Self {
        self.inject_csrf_token = inject;
        self
    }

    /// Cache key of this request for `path`, computed from the caller's
    /// headers only (before any token injection)
    #[must_use]
    pub fn fingerprint(&self, path: &str) -> RequestFingerprint {
        RequestFingerprint::new(
            &self.method,
            path,
            self.body.as_ref(),
            self.headers.as_ref(),
        )
    }
}

/// Criteria of a userbase search
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    /// Free text matched against names
    pub query: String,
    /// Class ids to restrict to
    pub classes: Option<Vec<String>>,
    /// School ids to restrict to
    pub schools: Option<Vec<String>>,
    /// Function codes to restrict to
    pub functions: Option<Vec<String>>,
}

impl SearchFilter {
    /// Search by free text only
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Criteria of a timeline fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedFilter {
    /// Notification types, e.g. `MESSAGERIE`, `BLOG`; empty means all
    pub types: Vec<String>,
    /// Page index
    pub page: Option<u32>,
}

impl FeedFilter {
    /// Query string appended to the timeline path, empty when unfiltered
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut params: Vec<String> = self
            .types
            .iter()
            .map(|kind| format!("type={}", urlencoding::encode(kind)))
            .collect();
        if let Some(page) = self.page {
            params.push(format!("page={page}"));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}
