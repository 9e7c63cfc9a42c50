//! Error types for my-npx-command

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for configuration operations
#[derive(Error, Debug)]
pub enum NpxError {
    /// `init` found a configuration file already in place
    #[error("Configuration file already exists at {}", .0.display())]
    ConfigExists(PathBuf),

    /// `hello` found no configuration file
    #[error("Configuration file not found at {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// File system error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration content failed to parse as a JSON object with a string `name`
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl NpxError {
    /// Returns true if the error is a precondition on the configuration file
    /// (already present for `init`, missing for `hello`)
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            NpxError::ConfigExists(_) | NpxError::ConfigNotFound(_)
        )
    }

    /// Process exit code for this error; every failure exits with 1
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type alias using NpxError
pub type Result<T> = std::result::Result<T, NpxError>;
