//! Data models for the index generator.
//!
//! - [`Settings`]: file names, template locations and logging options, loaded by
//!   [`ConfigManager`](crate::config::ConfigManager)
//! - [`ListEntry`]: one rendered row of a directory listing
//! - [`RedirectMap`]: overrides parsed from a directory's redirect marker
//! - [`GenerationResult`]: per-subtree counts and findings, folded up the traversal

pub mod listing;
pub mod settings;

pub use listing::{GenerationResult, ListEntry, RedirectMap};
pub use settings::Settings;
