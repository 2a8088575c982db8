//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid maximum file size")]
    InvalidMaxFileSize,

    #[error("Default page range is inverted")]
    InvalidDefaultPageRange,

    #[error("Retry backoff multiplier must be at least 1")]
    InvalidRetryBackoff,

    #[error("Storage path cannot be empty")]
    EmptyStoragePath,

    #[error("Model id cannot be empty")]
    EmptyModelId,
}
