//! Error types

use std::path::PathBuf;

/// Errors from the fallible edges of the crate: loading candidate lists and
/// picking a timer. Selector events themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum PickerError {
    /// Candidate list file could not be read.
    #[error("Failed to read candidate list {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Candidate list is not a JSON array of `{name, slug}` objects.
    #[error("Invalid candidate list: {0}")]
    Json(#[from] serde_json::Error),

    /// Two candidates share a slug.
    #[error("Duplicate candidate slug: {0}")]
    DuplicateSlug(String),

    /// No explicit timer was given and there is no tokio runtime to fall back on.
    #[error("No tokio runtime available to schedule timers")]
    NoRuntime,
}

impl PickerError {
    /// Creates a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
