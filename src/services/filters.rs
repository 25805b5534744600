use crate::error::{IndexError, Result};
use crate::models::Settings;
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;

/// Names and root-relative paths excluded from traversal and listings
pub type HiddenSet = HashSet<String>;

/// Load the hidden set from the root-level exclusion file.
///
/// One entry per line; lines are trimmed and blank lines dropped. A missing
/// file yields an empty set.
pub fn load_hidden_set(root: &Utf8Path, hidden_file: &str) -> Result<HiddenSet> {
    let path = root.join(hidden_file);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("No hidden file found at {}", path);
            return Ok(HiddenSet::new());
        }
        Err(e) => return Err(IndexError::io(path, e)),
    };

    let hidden = parse_hidden_set(&content);
    tracing::info!("Loaded {} hidden entries from {}", hidden.len(), path);
    Ok(hidden)
}

pub fn parse_hidden_set(content: &str) -> HiddenSet {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Path of `path` relative to `root`, always `/`-separated; `""` for the root itself
pub fn relative_path(root: &Utf8Path, path: &Utf8Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string(),
    }
}

/// Skip rules for one run: the root, its hidden set and the reserved names.
///
/// The configured log directory is also excluded so log files never show up
/// in a listing.
#[derive(Debug, Clone)]
pub struct SkipRules<'a> {
    root: Utf8PathBuf,
    hidden: HiddenSet,
    settings: &'a Settings,
    log_dir: Option<Utf8PathBuf>,
}

impl<'a> SkipRules<'a> {
    pub fn new(root: impl Into<Utf8PathBuf>, hidden: HiddenSet, settings: &'a Settings) -> Self {
        let root = root.into();
        let log_dir = settings.log_dir_path(&root);
        Self {
            root,
            hidden,
            settings,
            log_dir,
        }
    }

    fn is_log_dir(&self, path: &Utf8Path) -> bool {
        self.log_dir.as_deref() == Some(path)
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn hidden(&self) -> &HiddenSet {
        &self.hidden
    }

    /// Whether a directory is excluded from traversal entirely.
    ///
    /// Any absolute path containing the reserved directory name is excluded,
    /// not just the root-level directory of that name.
    pub fn should_skip_directory(&self, dir: &Utf8Path) -> bool {
        let relative = relative_path(&self.root, dir);
        let reserved = self.settings.reserved_dir.as_str();

        if relative == reserved || dir.as_str().contains(reserved) {
            return true;
        }

        if relative.starts_with(self.settings.reserved_prefix.as_str()) {
            return true;
        }

        if self.is_log_dir(dir) {
            return true;
        }

        let name = dir.file_name().unwrap_or_default();
        self.hidden.contains(name) || self.hidden.contains(&relative)
    }

    /// Whether an entry of `dir` is left out of its listing (and traversal).
    pub fn should_skip_item(&self, dir: &Utf8Path, name: &str) -> bool {
        let path = dir.join(name);
        let relative = relative_path(&self.root, &path);

        if self.hidden.contains(name) || self.hidden.contains(&relative) {
            tracing::debug!("Skipping hidden entry: {}", relative);
            return true;
        }

        if name.starts_with('.') && name != self.settings.redirect_file {
            tracing::debug!("Skipping dot file: {}", relative);
            return true;
        }

        if self.settings.is_generated_file(name) {
            tracing::debug!("Skipping generated file: {}", relative);
            return true;
        }

        if self.settings.system_files.iter().any(|f| f == name) {
            tracing::debug!("Skipping system file: {}", relative);
            return true;
        }

        if self.is_log_dir(&path) {
            tracing::debug!("Skipping log directory: {}", relative);
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rules<'a>(settings: &'a Settings, hidden: &[&str]) -> SkipRules<'a> {
        let hidden = hidden.iter().map(|s| s.to_string()).collect();
        SkipRules::new("/srv/site", hidden, settings)
    }

    #[test]
    fn test_parse_hidden_set() {
        let hidden = parse_hidden_set("secret\n\n  build/tmp  \r\n\n");
        assert_eq!(hidden.len(), 2);
        assert!(hidden.contains("secret"));
        assert!(hidden.contains("build/tmp"));
    }

    #[test]
    fn test_load_hidden_set_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let root = Utf8Path::from_path(temp_dir.path()).unwrap();
        assert!(load_hidden_set(root, ".hidden").unwrap().is_empty());
    }

    #[test]
    fn test_relative_path() {
        let root = Utf8Path::new("/srv/site");
        assert_eq!(relative_path(root, Utf8Path::new("/srv/site")), "");
        assert_eq!(relative_path(root, Utf8Path::new("/srv/site/build/tmp")), "build/tmp");
    }

    #[test]
    fn test_skip_reserved_directories() {
        let settings = Settings::default();
        let rules = rules(&settings, &[]);

        assert!(rules.should_skip_directory(Utf8Path::new("/srv/site/assets")));
        assert!(rules.should_skip_directory(Utf8Path::new("/srv/site/my-assets-backup")));
        assert!(rules.should_skip_directory(Utf8Path::new("/srv/site/.github")));
        assert!(rules.should_skip_directory(Utf8Path::new("/srv/site/.github/workflows")));
        assert!(!rules.should_skip_directory(Utf8Path::new("/srv/site")));
        assert!(!rules.should_skip_directory(Utf8Path::new("/srv/site/music")));
    }

    #[test]
    fn test_skip_hidden_directories() {
        let settings = Settings::default();
        let rules = rules(&settings, &["secret", "build/tmp"]);

        assert!(rules.should_skip_directory(Utf8Path::new("/srv/site/secret")));
        assert!(rules.should_skip_directory(Utf8Path::new("/srv/site/deep/secret")));
        assert!(rules.should_skip_directory(Utf8Path::new("/srv/site/build/tmp")));
        assert!(!rules.should_skip_directory(Utf8Path::new("/srv/site/other/build/tmp")));
        assert!(!rules.should_skip_directory(Utf8Path::new("/srv/site/build")));
    }

    #[test]
    fn test_skip_items() {
        let settings = Settings::default();
        let rules = rules(&settings, &["secret", "build/tmp"]);
        let root = Utf8Path::new("/srv/site");
        let build = Utf8Path::new("/srv/site/build");

        assert!(rules.should_skip_item(root, "secret"));
        assert!(rules.should_skip_item(build, "tmp"));
        assert!(!rules.should_skip_item(root, "tmp"));
        assert!(rules.should_skip_item(root, ".git"));
        assert!(rules.should_skip_item(root, ".hidden"));
        assert!(!rules.should_skip_item(root, ".redirect"));
        assert!(rules.should_skip_item(root, "file-info.js"));
        assert!(rules.should_skip_item(root, "index.html"));
        assert!(rules.should_skip_item(root, "LICENSE"));
        assert!(rules.should_skip_item(root, "README.md"));
        assert!(!rules.should_skip_item(root, "readme.txt"));
    }

    #[test]
    fn test_skip_log_directory() {
        let settings = Settings {
            log_dir: Some("./logs".to_string()),
            ..Settings::default()
        };
        let rules = rules(&settings, &[]);
        let root = Utf8Path::new("/srv/site");

        assert!(rules.should_skip_item(root, "logs"));
        assert!(rules.should_skip_directory(Utf8Path::new("/srv/site/logs")));
        assert!(!rules.should_skip_item(Utf8Path::new("/srv/site/music"), "logs"));
        assert!(!rules.should_skip_directory(Utf8Path::new("/srv/site/music/logs")));
    }

    #[test]
    fn test_log_directory_outside_root_changes_nothing() {
        let settings = Settings {
            log_dir: Some("/var/log/site-index".to_string()),
            ..Settings::default()
        };
        let rules = rules(&settings, &[]);

        assert!(!rules.should_skip_item(Utf8Path::new("/srv/site"), "logs"));
        assert!(!rules.should_skip_directory(Utf8Path::new("/srv/site/site-index")));
    }
}
