//! Services module - the index builder.
//!
//! # Components
//!
//! - [`filters`]: hidden-set loading and the directory / entry skip rules
//!   ([`SkipRules`])
//! - [`classify`]: static extension and folder-name tables, date formatting and
//!   name collation used to render listing rows
//! - [`listing`]: redirect-marker parsing, listing rendering and write-if-changed
//! - [`generator`]: template loading and the recursive traversal
//!   ([`IndexGenerator`], [`generate_index`])
//!
//! # Output
//!
//! Every indexed directory receives two files:
//! 1. `file-info.js`, holding `redirectFileInfo` (from `.redirect`) and
//!    `fileList` (one row per visible entry)
//! 2. `index.html`, a verbatim copy of the HTML shell template
//!
//! Both are only rewritten when their bytes change, so repeated runs over an
//! unchanged tree leave modification times alone.
//!
//! # Usage Example
//!
//! ```ignore
//! use site_index::services::generate_index;
//!
//! let result = generate_index(root, &settings)?;
//! println!("{}", result.report(root));
//! ```

pub mod classify;
pub mod filters;
pub mod generator;
pub mod listing;

pub use filters::{HiddenSet, SkipRules, load_hidden_set};
pub use generator::{IndexGenerator, Templates, generate_index, generate_index_html};
pub use listing::{WriteOutcome, generate_file_info, parse_redirect, parse_redirect_str};
