//! Loader Errors
//!
//! Error types for reading and validating order records.

use std::path::PathBuf;

use crate::domain::DomainError;

use super::validator::ValidationErrors;

/// Errors that can occur while loading orders
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Orders file could not be read
    #[error("Cannot read orders file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Orders data is not well-formed JSON of the expected shape
    #[error("Malformed orders data: {0}")]
    Json(#[from] serde_json::Error),

    /// A record failed validation; nothing was loaded
    #[error("Invalid order record {index}: {errors}")]
    InvalidRecord {
        index: usize,
        errors: ValidationErrors,
    },

    /// A validated record still could not be turned into entities
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl LoadError {
    /// Check if this error is caused by the data rather than the file system
    pub fn is_data_error(&self) -> bool {
        !matches!(self, LoadError::Io { .. })
    }
}
