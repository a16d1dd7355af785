//! Error types and Result aliases for termo

use std::path::PathBuf;

/// Result type alias for termo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for termo
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // === Command errors ===
    /// The shell interpreter could not be launched
    #[error("Failed to spawn command '{command}': {reason}")]
    CommandSpawnFailed { command: String, reason: String },

    /// The rendered shell command line could not be split into arguments
    #[error("Failed to parse command line '{line}': {reason}")]
    CommandLineParseFailed { line: String, reason: String },

    // === Configuration errors ===
    /// Failed to load configuration file
    #[error("Failed to load config from '{}': {reason}", .path.display())]
    ConfigLoadFailed { path: PathBuf, reason: String },

    /// Failed to parse configuration
    #[error("Failed to parse {format} config: {reason}")]
    ConfigParseFailed { format: String, reason: String },

    /// Configuration validation failed
    #[error("Configuration validation failed for '{field}': {reason}")]
    ConfigValidationFailed { field: String, reason: String },

    // === UI errors ===
    /// Font file could not be read
    #[error("Failed to load font from '{}': {reason}", .path.display())]
    FontLoadFailed { path: PathBuf, reason: String },

    // === I/O ===
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors
    #[error("Error: {0}")]
    Other(String),
}

impl Error {
    /// Whether this error came from launching a command
    pub fn is_spawn_failure(&self) -> bool {
        matches!(
            self,
            Error::CommandSpawnFailed { .. } | Error::CommandLineParseFailed { .. }
        )
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}
