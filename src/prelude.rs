/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ENT Client Prelude
//!
//! Imports the types needed by most programs talking to the portal.
//!
//! ```rust
//! use ent_client::prelude::*;
//!
//! let config = Config::with_credentials("jean.dupont", "secret");
//! assert!(config.credentials.validate().is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Client configuration
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// SESSION AND REQUESTS
// ============================================================================

/// Entry point
pub use crate::application::client::Client;

/// Session manager
pub use crate::model::http::HttpClient;

/// Session state
pub use crate::model::auth::SessionState;

/// Request description and cache key
pub use crate::model::requests::{
    FeedFilter, RequestBody, RequestFingerprint, RequestOptions, SearchFilter,
};

/// Transport seam
pub use crate::model::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

// ============================================================================
// APPS
// ============================================================================

/// App registry
pub use crate::application::registry::{App, AppKind, AppRegistry};

/// App services
pub use crate::application::services::{
    AccountService, ExercisesService, FeedService, MailService, RackService, UserbaseService,
    UserbookService,
};

// ============================================================================
// PRESENTATION LAYER
// ============================================================================

/// Records returned by the services
pub use crate::presentation::{
    Attachment, Contact, Exercise, ExerciseDates, ExerciseResult, FeedItem, Folder, Group, Hobby,
    Mail, MailContent, MailRecipients, PreparedMail, RackFile, RackItem, RackStorage, User,
    UserbookData,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest types used in request options and errors
pub use reqwest::{Method, StatusCode};
