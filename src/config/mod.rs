use crate::models::Settings;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// File name of the optional settings file inside the site root
pub const SETTINGS_FILE_NAME: &str = ".site-index.yaml";

/// Prefix for environment variable overrides (e.g. `SITE_INDEX_DEBUG=true`)
pub const ENV_PREFIX: &str = "SITE_INDEX";

/// Configuration manager for the generator settings.
///
/// Settings are layered, lowest precedence first:
/// - built-in defaults
/// - `<root>/.site-index.yaml` (optional)
/// - `SITE_INDEX_*` environment variables
#[derive(Debug, Clone)]
pub struct ConfigManager {
    root: Utf8PathBuf,
    settings_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a ConfigManager for the given site root.
    ///
    /// # Arguments
    /// * `root` - Directory being indexed; the settings file is looked up here
    pub fn new<P: AsRef<Utf8Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();

        if !root.is_dir() {
            anyhow::bail!("Site root is not a directory: {}", root);
        }

        Ok(Self {
            settings_path: root.join(SETTINGS_FILE_NAME),
            root,
        })
    }

    /// Load settings from defaults, the settings file and the environment.
    ///
    /// # Returns
    /// The merged Settings; defaults when neither file nor variables are present
    pub fn load_settings(&self) -> Result<Settings> {
        self.load_settings_with_env(
            config::Environment::with_prefix(ENV_PREFIX).try_parsing(true),
        )
    }

    /// Load settings with an explicit environment layer.
    ///
    /// Used to supply `SITE_INDEX_*` variables from a map instead of the
    /// process environment.
    pub fn load_settings_with_env(&self, env: config::Environment) -> Result<Settings> {
        if self.settings_path.exists() {
            tracing::info!("Loading settings from {}", self.settings_path);
        } else {
            tracing::debug!(
                "Settings file not found at {}, using defaults",
                self.settings_path
            );
        }

        let layered = config::Config::builder()
            .add_source(
                config::File::from(self.settings_path.as_std_path())
                    .format(config::FileFormat::Yaml)
                    .required(false),
            )
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read settings: {}", self.settings_path))?;

        let settings: Settings = layered
            .try_deserialize()
            .with_context(|| format!("Failed to parse settings: {}", self.settings_path))?;

        Ok(settings)
    }

    /// Save settings to the settings file.
    ///
    /// # Arguments
    /// * `settings` - The Settings to save
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(settings).context("Failed to serialize settings to YAML")?;

        fs::write(&self.settings_path, yaml_string)
            .with_context(|| format!("Failed to write settings: {}", self.settings_path))?;

        tracing::info!("Saved settings to {}", self.settings_path);
        Ok(())
    }

    /// Get the site root.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Get the settings file path.
    pub fn settings_path(&self) -> &Utf8Path {
        &self.settings_path
    }
}
