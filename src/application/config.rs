/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, USER_AGENT};
use crate::error::{AppError, AppResult};
use crate::utils::config::{get_env_non_empty, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::{debug, error};

#[derive(DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Credentials of an ENT account
pub struct Credentials {
    /// Login identifier
    pub username: String,
    /// Account password, kept in memory only
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    /// Creates credentials
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Loads `{"username": "...", "password": "..."}` from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = std::fs::read(path.as_ref())?;
        let credentials: Credentials = serde_json::from_slice(&raw)?;
        debug!("Loaded credentials from {}", path.as_ref().display());
        Ok(credentials)
    }

    /// Rejects empty usernames and passwords
    pub fn validate(&self) -> AppResult<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(AppError::InvalidInput("empty credentials".to_string()));
        }
        Ok(())
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST endpoints
pub struct RestApiConfig {
    /// Portal root every relative path is joined to
    pub base_url: String,
    /// User agent sent with each request
    pub user_agent: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the ENT client
pub struct Config {
    /// Account credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment.
    ///
    /// Reads `ENT_USERNAME`, `ENT_PASSWORD`, `ENT_BASE_URL` and
    /// `ENT_USER_AGENT`, loading a `.env` file first when there is one.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_non_empty("ENT_USERNAME").unwrap_or_default();
        let password = get_env_non_empty("ENT_PASSWORD").unwrap_or_default();

        if username.is_empty() {
            error!("ENT_USERNAME not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("ENT_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("ENT_BASE_URL", DEFAULT_BASE_URL.to_string()),
                user_agent: get_env_or_default("ENT_USER_AGENT", USER_AGENT.to_string()),
            },
        }
    }

    /// Configuration for the default portal with explicit credentials
    pub fn with_credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            rest_api: RestApiConfig::default(),
        }
    }

    /// Points the client at another portal root
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}
