use std::path::PathBuf;
use thiserror::Error;

/// Result type for taxonomy operations
pub type Result<T> = std::result::Result<T, TaxonomyError>;

/// Errors that can occur while loading a taxonomy
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// Taxonomy source could not be read
    #[error("Failed to read taxonomy {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source is not valid JSON or does not have the silo -> cluster shape
    #[error("Invalid taxonomy: {0}")]
    Invalid(String),
}

impl TaxonomyError {
    /// Create a structural error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}

impl From<serde_json::Error> for TaxonomyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Invalid(err.to_string())
    }
}
