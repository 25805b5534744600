use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Generator settings, loaded from `.site-index.yaml` and `SITE_INDEX_*` variables.
///
/// Every field has a default matching the conventional site layout, so an
/// absent settings file behaves exactly like the stock generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTML shell copied into every directory (relative to root, or absolute)
    pub index_template: String,

    /// Listing template; only its presence is checked
    pub file_info_template: String,

    /// Root-level exclusion list
    pub hidden_file: String,

    /// Per-directory redirect marker
    pub redirect_file: String,

    /// Generated listing file name
    pub file_info_name: String,

    /// Generated HTML shell file name
    pub index_html_name: String,

    /// Directory name that is never indexed (also matched as a path substring)
    pub reserved_dir: String,

    /// Root-relative prefix that is never indexed
    pub reserved_prefix: String,

    /// Files never shown in listings
    pub system_files: Vec<String>,

    pub debug: bool,

    /// Directory for rotating log files (relative to root, or absolute); console
    /// only when unset. Never indexed when it lies inside the root.
    pub log_dir: Option<String>,

    pub log_prefix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index_template: "assets/templates/index-template.html".to_string(),
            file_info_template: "assets/scripts/file-info-template.js".to_string(),
            hidden_file: ".hidden".to_string(),
            redirect_file: ".redirect".to_string(),
            file_info_name: "file-info.js".to_string(),
            index_html_name: "index.html".to_string(),
            reserved_dir: "assets".to_string(),
            reserved_prefix: ".github".to_string(),
            system_files: default_system_files(),
            debug: false,
            log_dir: None,
            log_prefix: "site-index".to_string(),
        }
    }
}

fn default_system_files() -> Vec<String> {
    [".gitignore", ".prettierrc", "LICENSE", "README.md", ".hidden"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Settings {
    /// Check whether `name` is one of the generated output files
    pub fn is_generated_file(&self, name: &str) -> bool {
        name == self.file_info_name || name == self.index_html_name
    }

    /// Resolved log directory, with relative paths taken from `root`
    pub fn log_dir_path(&self, root: &Utf8Path) -> Option<Utf8PathBuf> {
        self.log_dir.as_deref().map(|dir| root.join(dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.hidden_file, ".hidden");
        assert_eq!(settings.redirect_file, ".redirect");
        assert_eq!(settings.reserved_dir, "assets");
        assert_eq!(settings.system_files.len(), 5);
        assert!(settings.log_dir.is_none());
        assert!(!settings.debug);
    }

    #[test]
    fn test_is_generated_file() {
        let settings = Settings::default();
        assert!(settings.is_generated_file("file-info.js"));
        assert!(settings.is_generated_file("index.html"));
        assert!(!settings.is_generated_file("index.htm"));
    }

    #[test]
    fn test_log_dir_path() {
        let root = Utf8Path::new("/srv/site");
        assert_eq!(Settings::default().log_dir_path(root), None);

        let relative = Settings {
            log_dir: Some("logs".to_string()),
            ..Settings::default()
        };
        assert_eq!(relative.log_dir_path(root), Some(Utf8PathBuf::from("/srv/site/logs")));

        let absolute = Settings {
            log_dir: Some("/var/log/site-index".to_string()),
            ..Settings::default()
        };
        assert_eq!(absolute.log_dir_path(root), Some(Utf8PathBuf::from("/var/log/site-index")));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings: Settings = serde_yaml_ng::from_str("debug: true\n").unwrap();
        assert!(settings.debug);
        assert_eq!(settings.index_html_name, "index.html");
    }
}
