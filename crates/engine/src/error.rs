use silo_audit_corpus::CorpusError;
use silo_audit_taxonomy::TaxonomyError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for audit operations
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors that abort an audit run
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Configuration file unreadable or out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Report could not be written; there is no partial-report fallback
    #[error("Failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
