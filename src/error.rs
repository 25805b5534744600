use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while generating the index
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Template not found: {0}")]
    MissingTemplate(Utf8PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize listing: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IndexError {
    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;
