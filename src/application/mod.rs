/// Credentials and session state holder
pub mod auth;
/// Response cache keyed by request fingerprint
pub mod cache;
/// Entry point tying the session and the app registry together
pub mod client;
/// Application configuration module
pub mod config;
/// Lazily built app services
pub mod registry;
/// App services
pub mod services;
