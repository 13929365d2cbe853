/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Session manager: one cookie session, one cache, one request primitive
//! shared by every app service.

use crate::application::auth::Auth;
use crate::application::cache::RequestCache;
use crate::application::config::Config;
use crate::constants::{LOGIN_PATH, XSRF_COOKIE, XSRF_HEADER};
use crate::error::{AppError, AppResult};
use crate::model::auth::SessionState;
use crate::model::requests::RequestOptions;
use crate::model::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Authenticated ENT session
pub struct HttpClient {
    auth: Auth,
    transport: Arc<dyn Transport>,
    cache: RequestCache,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates an unauthenticated session over `transport`
    pub fn new(config: Arc<Config>, transport: Arc<dyn Transport>) -> Self {
        Self {
            auth: Auth::new(config.credentials.clone()),
            transport,
            cache: RequestCache::new(),
            config,
        }
    }

    /// Creates an unauthenticated session over a reqwest transport
    pub fn with_reqwest(config: Arc<Config>) -> AppResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(&config.rest_api)?);
        Ok(Self::new(config, transport))
    }

    /// Posts the credentials and checks that the portal set its CSRF cookie.
    ///
    /// # Errors
    /// * `AppError::Authentication` - the cookie is absent after the call
    /// * `AppError::RequestFailed` - the login endpoint answered non-2xx
    pub async fn login(&self) -> AppResult<()> {
        let form = serde_json::to_value(self.auth.login_form())?;
        debug!("Logging in as {}", self.auth.credentials().username);

        self.request(LOGIN_PATH, RequestOptions::post().form(form).use_cache(false))
            .await?;

        if self.transport.cookie(XSRF_COOKIE).is_none() {
            warn!("Login refused: no {} cookie in session", XSRF_COOKIE);
            return Err(AppError::Authentication("invalid credentials".to_string()));
        }

        self.auth.set_state(SessionState::Authenticated).await;
        info!("Login successful for {}", self.auth.credentials().username);
        Ok(())
    }

    /// Current session state
    pub async fn state(&self) -> SessionState {
        self.auth.state().await
    }

    /// Whether login succeeded
    pub async fn is_authenticated(&self) -> bool {
        self.state().await.is_authenticated()
    }

    /// Marks the session authenticated without a login round trip, for
    /// sessions whose cookies were restored by other means
    pub async fn mark_authenticated(&self) {
        self.auth.set_state(SessionState::Authenticated).await;
    }

    /// Current CSRF cookie value
    pub fn csrf_token(&self) -> Option<String> {
        self.transport.cookie(XSRF_COOKIE)
    }

    /// Request cache
    pub fn cache(&self) -> &RequestCache {
        &self.cache
    }

    /// Client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// URL a path resolves to
    pub fn url_for(&self, path: &str, absolute_path: bool) -> String {
        if !absolute_path {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Sends a request through the session.
    ///
    /// The cache is consulted first when `options.use_cache` is set. On a
    /// miss the request is dispatched, any non-2xx status becomes
    /// `AppError::RequestFailed`, and a success is cached (again only when
    /// `use_cache` is set).
    ///
    /// With `inject_csrf_token`, the CSRF cookie is echoed in
    /// `X-XSRF-TOKEN`, replacing a caller header of the same name. The cache
    /// key is computed from the caller headers, before that injection.
    pub async fn request(&self, path: &str, options: RequestOptions) -> AppResult<Arc<HttpResponse>> {
        let fingerprint = options.fingerprint(path);

        if options.use_cache {
            if let Some(cached) = self.cache.get(&fingerprint).await {
                debug!("Cache hit: {}", fingerprint);
                return Ok(cached);
            }
        }

        let mut headers = options.headers.clone().unwrap_or_default();

        if options.inject_csrf_token {
            let token = self
                .csrf_token()
                .ok_or_else(|| AppError::MissingCookie(XSRF_COOKIE.to_string()))?;
            headers.retain(|name, _| !name.eq_ignore_ascii_case(XSRF_HEADER));
            headers.insert(XSRF_HEADER.to_string(), token);
        }

        let body = match &options.body {
            Some(body) => {
                let encoded = body.encode(options.body_is_json)?;
                if let Some(content_type) = encoded.content_type {
                    if !headers
                        .keys()
                        .any(|name| name.eq_ignore_ascii_case("content-type"))
                    {
                        headers.insert("Content-Type".to_string(), content_type.to_string());
                    }
                }
                Some(encoded.bytes)
            }
            None => None,
        };

        let request = HttpRequest {
            method: options.method.clone(),
            url: self.url_for(path, options.absolute_path),
            headers,
            body,
        };

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            error!(
                "Request failed with status {}: {}",
                response.status(),
                fingerprint
            );
            return Err(AppError::RequestFailed {
                fingerprint,
                status: response.status(),
                body: response.content().to_vec(),
            });
        }

        let response = Arc::new(response);
        if options.use_cache {
            self.cache.put(fingerprint, response.clone()).await;
        }
        Ok(response)
    }

    /// Cached GET
    pub async fn get(&self, path: &str) -> AppResult<Arc<HttpResponse>> {
        self.request(path, RequestOptions::new()).await
    }

    /// Cached GET decoded as JSON
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        self.get(path).await?.json()
    }
}
