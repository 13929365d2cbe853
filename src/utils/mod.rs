/// Environment variable helpers
pub mod config;
/// Module containing random identifier generation
pub mod id;
/// Module containing logging utilities
pub mod logger;
/// Module containing file name and content type helpers
pub mod parsing;

pub use config::*;
pub use id::*;
pub use logger::*;
pub use parsing::*;
