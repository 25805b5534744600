//! site-index - Directory listing generator for static file sites
//!
//! Main entry point for the command-line tool.
//!
//! # Execution Flow
//!
//! 1. Resolve the site root (current working directory)
//! 2. Load settings: defaults, `.site-index.yaml`, `SITE_INDEX_*` variables
//! 3. Initialize logging (console, plus rotating files when `log_dir` is set)
//! 4. Walk the tree, writing `file-info.js` and `index.html` where changed
//! 5. Print the summary of updated and empty directories
//!
//! A missing template is reported and the tool exits without touching the tree.

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use site_index::{APP_NAME, ConfigManager, IndexError, VERSION};

fn main() -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
    let root = Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")?;

    let config_manager = ConfigManager::new(&root)?;
    let settings = config_manager.load_settings()?;

    let log_dir = settings.log_dir_path(&root);
    let _guard =
        site_index::logging::setup_logging(log_dir.as_deref(), &settings.log_prefix, settings.debug)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    match site_index::generate_index(&root, &settings) {
        Ok(result) => {
            print!("{}", result.report(&root));
            Ok(())
        }
        Err(IndexError::MissingTemplate(path)) => {
            tracing::error!("Template not found: {}", path);
            eprintln!("Error: template not found: {}", path);
            Ok(())
        }
        Err(e) => Err(e).context("Index generation failed"),
    }
}
