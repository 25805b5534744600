use camino::{Utf8Path, Utf8PathBuf};
use indexmap::IndexMap;
use serde::Serialize;
use std::time::Duration;

/// Key/value overrides parsed from a directory's redirect marker.
///
/// Keys keep the order of their first appearance in the file.
pub type RedirectMap = IndexMap<String, String>;

/// One visible child of a directory, as rendered into `fileList`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub icon_class: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub version: String,
    pub date: String,
    pub description: String,
}

/// Outcome of traversing a directory subtree.
///
/// Each recursive call returns its own result; parents fold children in with
/// [`GenerationResult::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    /// Directories where at least one output file was written
    pub generated_count: usize,

    /// Directories with no visible entries and no redirect marker, in visit order
    pub empty_dirs: Vec<Utf8PathBuf>,

    /// Subtrees abandoned after an I/O error, in visit order
    pub failed_dirs: Vec<Utf8PathBuf>,

    pub visited_dirs: usize,
    pub skipped_dirs: usize,
}

impl GenerationResult {
    pub fn merge(&mut self, other: GenerationResult) {
        self.generated_count += other.generated_count;
        self.empty_dirs.extend(other.empty_dirs);
        self.failed_dirs.extend(other.failed_dirs);
        self.visited_dirs += other.visited_dirs;
        self.skipped_dirs += other.skipped_dirs;
    }

    pub fn has_empty_dirs(&self) -> bool {
        !self.empty_dirs.is_empty()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_dirs.is_empty()
    }

    /// Human-readable summary printed at the end of a run
    pub fn report(&self, root: &Utf8Path) -> String {
        let mut out = format!(
            "Index generation complete: updated files in {} directories\n",
            self.generated_count
        );

        if self.has_empty_dirs() {
            out.push_str(&format!(
                "\nWarning: found {} empty directories without a redirect marker:\n",
                self.empty_dirs.len()
            ));
            for dir in &self.empty_dirs {
                let relative = dir.strip_prefix(root).unwrap_or(dir);
                out.push_str(&format!("  - {}\n", relative));
            }
            out.push_str("\nAdd content or a redirect marker to these directories\n");
        } else {
            out.push_str("All directories have content or a redirect marker\n");
        }

        if self.has_failures() {
            out.push_str(&format!(
                "\nError: {} directories could not be indexed:\n",
                self.failed_dirs.len()
            ));
            for dir in &self.failed_dirs {
                let relative = dir.strip_prefix(root).unwrap_or(dir);
                out.push_str(&format!("  - {}\n", relative));
            }
        }

        out
    }

    /// Log run statistics
    pub fn log_summary(&self, elapsed: Duration) {
        tracing::info!("=== Index Generation Summary ===");
        tracing::info!("Elapsed: {:.2}s", elapsed.as_secs_f64());
        tracing::info!(
            "Directories: {} visited, {} skipped, {} updated",
            self.visited_dirs,
            self.skipped_dirs,
            self.generated_count
        );
        if self.has_empty_dirs() {
            tracing::warn!(
                "{} empty directories without a redirect marker",
                self.empty_dirs.len()
            );
        }
        if self.has_failures() {
            tracing::warn!("{} directories failed and were skipped", self.failed_dirs.len());
        }
    }
}
