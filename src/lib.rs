/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # ENT Client
//!
//! Async client for the Ile-de-France ENT portal. One [`application::client::Client`]
//! owns an authenticated cookie session, a request cache and a registry of app
//! services (mail, rack, userbase, userbook, exercises, feed, account).
//!
//! ```ignore
//! use ent_client::prelude::*;
//!
//! let client = Client::new(Config::new()).await?;
//! let unread = client.mail().unread_count().await?;
//! let inbox = client.mail().get_mails(None, false, 10).await?;
//! ```
//!
//! Responses are cached per request fingerprint for the lifetime of the
//! client. Writes never invalidate cached reads; pass
//! `RequestOptions::use_cache(false)` when fresh data is needed.

/// Session manager, services, configuration and the app registry
pub mod application;
/// Crate-wide constants
pub mod constants;
/// Error type
pub mod error;
/// Request, response and transport models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Domain records returned by the services
pub mod presentation;
/// Helpers: environment, logging, identifiers, file parsing
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
