use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Invalid content root: {0}")]
    InvalidRoot(PathBuf),

    #[error("Invalid hub pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
}
