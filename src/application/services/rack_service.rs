/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Rack ("casier"): files users drop into each other's storage.

use crate::application::registry::{App, AppKind};
use crate::error::{AppError, AppResult};
use crate::model::http::HttpClient;
use crate::model::requests::RequestOptions;
use crate::model::responses::{QuotaResponse, RawRackItem};
use crate::presentation::rack::{RackItem, RackStorage};
use crate::presentation::serialization::is_truthy;
use crate::presentation::user::User;
use crate::utils::id::get_boundary;
use crate::utils::parsing::{get_filename, guess_content_type};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const BOUNDARY_PREFIX: &str = "---------------------------";

/// File part of a rack upload
#[derive(Debug, Clone, PartialEq)]
pub struct RackUpload<'a> {
    /// Name the file is stored under
    pub filename: &'a str,
    /// MIME type of the file
    pub content_type: &'a str,
    /// File bytes
    pub content: &'a [u8],
    /// Comma-separated receiver ids
    pub users: &'a str,
}

/// Builds the multipart body of a rack upload and its `Content-Type` header.
///
/// Same layout as the portal front-end: a `file` part followed by a
/// `users` part, delimited by `-----------------------------<boundary>`.
pub fn build_rack_multipart(upload: &RackUpload<'_>, boundary: &str) -> (Vec<u8>, String) {
    let delimiter = format!("--{BOUNDARY_PREFIX}{boundary}");
    let mut body = Vec::with_capacity(upload.content.len() + 512);

    body.extend_from_slice(
        format!(
            "{delimiter}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n\
             Content-Type: {}\r\n\r\n",
            upload.filename, upload.content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(upload.content);
    body.extend_from_slice(
        format!(
            "\r\n{delimiter}\r\n\
             Content-Disposition: form-data; name=\"users\"\r\n\r\n\
             {}\r\n\
             {delimiter}--\r\n",
            upload.users
        )
        .as_bytes(),
    );

    let content_type = format!("multipart/form-data; boundary={BOUNDARY_PREFIX}{boundary}");
    (body, content_type)
}

/// Rack service
pub struct RackService {
    http: Arc<HttpClient>,
    storage: RwLock<Option<RackStorage>>,
}

impl App for RackService {
    const KIND: AppKind = AppKind::Rack;

    fn build(http: Arc<HttpClient>) -> Self {
        Self {
            http,
            storage: RwLock::new(None),
        }
    }
}

impl RackService {
    /// Files in the user's rack
    pub async fn get_rack(&self) -> AppResult<Vec<RackItem>> {
        let raw: Vec<RawRackItem> = self.http.get_json("rack/list").await?;
        let base_url = &self.http.config().rest_api.base_url;
        let items: Vec<RackItem> = raw
            .into_iter()
            .map(|item| RackItem::from_raw(item, base_url))
            .collect();
        debug!("Rack obtained: {} files", items.len());
        Ok(items)
    }

    /// Deposits the file at `path` in the racks of `users`
    pub async fn deposit(&self, users: &[User], path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        if users.is_empty() {
            return Err(AppError::InvalidInput(
                "rack deposit needs at least one receiver".to_string(),
            ));
        }

        let content = tokio::fs::read(path).await?;
        let filename = get_filename(path);
        let receivers = users
            .iter()
            .map(|user| user.id.as_str())
            .collect::<Vec<_>>()
            .join(",");

        let upload = RackUpload {
            filename: &filename,
            content_type: guess_content_type(path, &content),
            content: &content,
            users: &receivers,
        };
        let (body, content_type) = build_rack_multipart(&upload, &get_boundary());

        let response = self
            .http
            .request(
                "rack?thumbnail=120x120",
                RequestOptions::post()
                    .raw(body)
                    .header("Content-Type", content_type)
                    .inject_csrf_token(true)
                    .use_cache(false),
            )
            .await?
            .json::<Value>()?;

        if !is_truthy(response.get("success")) {
            warn!("Rack deposit of {} refused: {}", path.display(), response);
            return Err(AppError::Rejected(format!(
                "failed to transmit {}: {response}",
                path.display()
            )));
        }

        info!("Deposited {} for {} users", filename, users.len());
        Ok(())
    }

    /// Fetches the storage quota of `user_id`, bypassing the request cache,
    /// and remembers it
    pub async fn refresh_storage(&self, user_id: &str) -> AppResult<RackStorage> {
        let raw: QuotaResponse = self
            .http
            .request(
                &format!("workspace/quota/user/{user_id}"),
                RequestOptions::new().use_cache(false),
            )
            .await?
            .json()?;
        let storage = RackStorage::from(raw);
        *self.storage.write().await = Some(storage);
        Ok(storage)
    }

    /// Storage quota, fetched on first call only
    pub async fn storage(&self, user_id: &str) -> AppResult<RackStorage> {
        if let Some(storage) = *self.storage.read().await {
            return Ok(storage);
        }
        self.refresh_storage(user_id).await
    }
}
