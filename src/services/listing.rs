use crate::error::{IndexError, Result};
use crate::models::{ListEntry, RedirectMap};
use crate::services::classify::{self, FOLDER_LABEL};
use camino::Utf8Path;
use std::fs;
use std::io::ErrorKind;

/// Placeholder shown in the version column
pub const VERSION_PLACEHOLDER: &str = "-";

/// Whether a write-if-changed call touched the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

impl WriteOutcome {
    pub fn wrote(self) -> bool {
        self == WriteOutcome::Written
    }
}

/// Write `content` to `path` unless the file already holds identical bytes.
pub fn write_if_changed(path: &Utf8Path, content: &str) -> Result<WriteOutcome> {
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            tracing::debug!("{} unchanged, skipping write", path);
            return Ok(WriteOutcome::Unchanged);
        }
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(IndexError::io(path, e)),
    }

    fs::write(path, content).map_err(|e| IndexError::io(path, e))?;
    tracing::info!("Wrote {}", path);
    Ok(WriteOutcome::Written)
}

/// Parse redirect marker text into key/value pairs.
///
/// Each line is split on its first `:`; the rest of the line (including any
/// further colons) is the value. Both sides are trimmed. Lines without a colon
/// or with an empty key are ignored; a repeated key keeps its first position
/// and takes the last value.
pub fn parse_redirect_str(content: &str) -> RedirectMap {
    content
        .trim()
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

/// Read and parse the redirect marker of `dir`; empty when the marker is absent.
pub fn parse_redirect(dir: &Utf8Path, redirect_file: &str) -> Result<RedirectMap> {
    let path = dir.join(redirect_file);

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(RedirectMap::new()),
        Err(e) => return Err(IndexError::io(path, e)),
    };

    let redirect = parse_redirect_str(&content);
    tracing::debug!("Found redirect marker {} with {} keys", path, redirect.len());
    Ok(redirect)
}

/// Build listing entries for the visible names of `dir`.
///
/// Entries that cannot be stat'ed are logged and left out.
pub fn build_entries<S: AsRef<str>>(dir: &Utf8Path, visible: &[S]) -> Vec<ListEntry> {
    let mut entries: Vec<ListEntry> = visible
        .iter()
        .filter_map(|name| {
            let name = name.as_ref();
            let path = dir.join(name);
            match fs::metadata(&path) {
                Ok(metadata) => Some(list_entry(name, &metadata)),
                Err(e) => {
                    tracing::warn!("Failed to stat {}: {}", path, e);
                    None
                }
            }
        })
        .collect();

    sort_entries(&mut entries);
    entries
}

fn list_entry(name: &str, metadata: &fs::Metadata) -> ListEntry {
    let class = classify::classify(name, metadata.is_dir());
    let date = metadata
        .modified()
        .map(classify::format_date)
        .unwrap_or_default();

    ListEntry {
        icon_class: class.icon_class.to_string(),
        name: name.to_string(),
        kind: class.type_label.to_string(),
        version: VERSION_PLACEHOLDER.to_string(),
        date,
        description: class.description.to_string(),
    }
}

/// Folders first, then by zh collation of the name.
///
/// "Folder" means the folder type label, so special folders sort among files.
pub fn sort_entries(entries: &mut [ListEntry]) {
    let collator = classify::name_collator();
    entries.sort_by(|a, b| {
        let a_folder = a.kind == FOLDER_LABEL;
        let b_folder = b.kind == FOLDER_LABEL;
        b_folder
            .cmp(&a_folder)
            .then_with(|| collator.compare(&a.name, &b.name))
    });
}

/// Serialize the listing file: a redirect block and a file list block.
pub fn render_file_info(redirect: &RedirectMap, entries: &[ListEntry]) -> Result<String> {
    let redirect_json = serde_json::to_string_pretty(redirect)?;
    let list_json = serde_json::to_string_pretty(entries)?;

    Ok(format!(
        "const redirectFileInfo = {redirect_json}\n\nconst fileList = {list_json}"
    ))
}

/// Generate the listing file for `dir`; returns whether it was written.
pub fn generate_file_info<S: AsRef<str>>(
    dir: &Utf8Path,
    visible: &[S],
    redirect_file: &str,
    file_info_name: &str,
) -> Result<bool> {
    let redirect = parse_redirect(dir, redirect_file)?;
    let entries = build_entries(dir, visible);
    let content = render_file_info(&redirect, &entries)?;

    Ok(write_if_changed(&dir.join(file_info_name), &content)?.wrote())
}
