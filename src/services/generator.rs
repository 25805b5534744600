use crate::error::{IndexError, Result};
use crate::models::{GenerationResult, Settings};
use crate::services::filters::{self, SkipRules};
use crate::services::listing::{self, write_if_changed};
use camino::Utf8Path;
use std::fs;
use std::time::Instant;

/// Template bodies read once per run
#[derive(Debug, Clone)]
pub struct Templates {
    /// HTML shell copied verbatim into every indexed directory
    pub index_html: String,

    /// Listing template; required to exist but not merged into the output
    pub file_info: String,
}

impl Templates {
    /// Read both templates, failing with [`IndexError::MissingTemplate`] if either is absent.
    ///
    /// Relative template paths are resolved against `root`.
    pub fn load(root: &Utf8Path, settings: &Settings) -> Result<Self> {
        let index_path = root.join(&settings.index_template);
        let file_info_path = root.join(&settings.file_info_template);

        tracing::info!("Template directory: {}", index_path.parent().unwrap_or(root));

        for path in [&index_path, &file_info_path] {
            if !path.is_file() {
                return Err(IndexError::MissingTemplate(path.clone()));
            }
        }

        let index_html =
            fs::read_to_string(&index_path).map_err(|e| IndexError::io(&index_path, e))?;
        let file_info =
            fs::read_to_string(&file_info_path).map_err(|e| IndexError::io(&file_info_path, e))?;

        tracing::info!("Templates loaded");
        Ok(Self {
            index_html,
            file_info,
        })
    }
}

/// Write the HTML shell into `dir`; returns whether it was written.
pub fn generate_index_html(dir: &Utf8Path, index_html_name: &str, template: &str) -> Result<bool> {
    Ok(write_if_changed(&dir.join(index_html_name), template)?.wrote())
}

/// Recursive index builder for one site root.
///
/// The traversal is depth-first and pre-order: a directory's files are
/// generated before its subdirectories are visited.
pub struct IndexGenerator<'a> {
    rules: SkipRules<'a>,
    settings: &'a Settings,
    templates: Templates,
}

impl<'a> IndexGenerator<'a> {
    pub fn new(rules: SkipRules<'a>, settings: &'a Settings, templates: Templates) -> Self {
        Self {
            rules,
            settings,
            templates,
        }
    }

    pub fn root(&self) -> &Utf8Path {
        self.rules.root()
    }

    /// Traverse from the root
    pub fn run(&self) -> Result<GenerationResult> {
        self.traverse(self.root())
    }

    /// Index `dir` and everything below it.
    ///
    /// Unreadable directories and unstatable entries are logged and skipped.
    /// An error while indexing a subdirectory abandons that subtree only: it is
    /// logged, recorded in [`GenerationResult::failed_dirs`] and its siblings
    /// are still visited. Errors in `dir` itself are returned to the caller.
    pub fn traverse(&self, dir: &Utf8Path) -> Result<GenerationResult> {
        let mut result = GenerationResult::default();

        if self.rules.should_skip_directory(dir) {
            tracing::info!("Skipping directory: {}", dir);
            result.skipped_dirs += 1;
            return Ok(result);
        }

        tracing::info!("Processing directory: {}", dir);

        let names = match list_dir(dir) {
            Ok(names) => names,
            Err(e) => {
                tracing::warn!("Failed to read directory {}: {}", dir, e);
                return Ok(result);
            }
        };
        result.visited_dirs += 1;

        let visible: Vec<String> = names
            .into_iter()
            .filter(|name| !self.rules.should_skip_item(dir, name))
            .collect();
        tracing::debug!("Visible entries in {}: {:?}", dir, visible);

        let has_redirect = dir.join(&self.settings.redirect_file).exists();
        if visible.is_empty() && !has_redirect {
            tracing::warn!("Directory {} is empty and has no redirect marker", dir);
            result.empty_dirs.push(dir.to_path_buf());
        }

        let file_info_written = listing::generate_file_info(
            dir,
            &visible,
            &self.settings.redirect_file,
            &self.settings.file_info_name,
        )?;
        let index_written = generate_index_html(
            dir,
            &self.settings.index_html_name,
            &self.templates.index_html,
        )?;

        if file_info_written || index_written {
            result.generated_count += 1;
            tracing::info!("Generated files in {}", dir);
        }

        for name in &visible {
            let path = dir.join(name);
            match fs::metadata(&path) {
                Ok(metadata) if metadata.is_dir() => match self.traverse(&path) {
                    Ok(child) => result.merge(child),
                    Err(e) => {
                        tracing::warn!("Failed to index {}: {}", path, e);
                        result.failed_dirs.push(path);
                    }
                },
                Ok(_) => {}
                Err(e) => tracing::warn!("Failed to access {}: {}", path, e),
            }
        }

        Ok(result)
    }
}

/// Entry names of `dir` in directory-listing order.
///
/// Names that are not valid UTF-8 are logged and dropped.
fn list_dir(dir: &Utf8Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => tracing::warn!("Skipping non UTF-8 entry in {}: {:?}", dir, raw),
        }
    }
    Ok(names)
}

/// Generate listings and HTML shells for the whole tree under `root`.
///
/// Fails before touching the tree when a template is missing.
pub fn generate_index(root: &Utf8Path, settings: &Settings) -> Result<GenerationResult> {
    let started = Instant::now();
    tracing::info!("Site root: {}", root);

    let templates = Templates::load(root, settings)?;
    let hidden = filters::load_hidden_set(root, &settings.hidden_file)?;
    tracing::debug!("Hidden entries: {:?}", hidden);

    let rules = SkipRules::new(root, hidden, settings);
    let generator = IndexGenerator::new(rules, settings, templates);
    let result = generator.run()?;

    result.log_summary(started.elapsed());
    Ok(result)
}
