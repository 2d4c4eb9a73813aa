//! Error handling module
//!
//! Centralized application error type.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    // Input errors
    #[error(transparent)]
    Load(#[from] crate::loader::LoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    // Output errors
    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}
