/// Exercise results
pub mod exercise;
/// Notification feed
pub mod feed;
/// Webmail folders, mails and attachments
pub mod mail;
/// Rack deposits and storage
pub mod rack;
/// Serialization utilities for API responses
pub mod serialization;
/// Users and groups
pub mod user;
/// Userbook profiles
pub mod userbook;

pub use exercise::*;
pub use feed::*;
pub use mail::*;
pub use rack::*;
pub use user::*;
pub use userbook::*;
