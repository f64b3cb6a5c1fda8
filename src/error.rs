//! Error types for the collaborator seam and the settings file.

use thiserror::Error;

/// Failure reported by a submit call.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("message rejected: {0}")]
    Rejected(String),
    #[error("service unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine a configuration directory")]
    NoConfigDir,
    #[error("settings i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings json error: {0}")]
    Json(#[from] serde_json::Error),
}
