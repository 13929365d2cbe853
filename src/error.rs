/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types shared by the session layer and every app service.

use crate::model::requests::RequestFingerprint;
use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// All errors that can occur while talking to the ENT
#[derive(Error, Debug)]
pub enum AppError {
    /// Login went through but the session cookie never appeared
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The server answered with a non-success status
    #[error("request failed with status {status}: {fingerprint}")]
    RequestFailed {
        /// Cache key of the failing request
        fingerprint: RequestFingerprint,
        /// Status returned by the server
        status: StatusCode,
        /// Raw response body
        body: Vec<u8>,
    },

    /// A cookie required to build the request is not in the jar
    #[error("missing cookie: {0}")]
    MissingCookie(String),

    /// The server answered 2xx but reported that the operation did not happen
    #[error("rejected by server: {0}")]
    Rejected(String),

    /// The response did not have the expected shape
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Caller supplied something the client cannot use
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Status code carried by a `RequestFailed` error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
