/// Logged-in account information
pub mod account_service;
/// Exercise results
pub mod exercises_service;
/// Notification timeline
pub mod feed_service;
/// Zimbra webmail
pub mod mail_service;
/// File drop-box
pub mod rack_service;
/// User and group directory
pub mod userbase_service;
/// Social profiles
pub mod userbook_service;

pub use account_service::AccountService;
pub use exercises_service::ExercisesService;
pub use feed_service::FeedService;
pub use mail_service::MailService;
pub use rack_service::RackService;
pub use userbase_service::UserbaseService;
pub use userbook_service::UserbookService;
