// site-index - Directory listing generator for static file sites
//
// This is the library crate containing the traversal and listing logic.
// The binary crate (main.rs) provides the command-line entry point.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use error::IndexError;
pub use models::{GenerationResult, ListEntry, RedirectMap, Settings};
pub use services::generate_index;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
