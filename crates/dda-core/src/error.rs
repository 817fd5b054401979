//! Core error types for dda-core.
//!
//! The classifier and adjuster are total over their inputs, so these errors
//! come from the edges: configuration loading and the JSON boundary.
//! [`LookupError`] only describes why a profile read degraded; it travels
//! inside [`crate::profile::LevelLookup::Unavailable`] and never reaches a
//! classifier caller.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dda-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a configuration or env file
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Why a profile lookup could not produce a row.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// URL or API key not configured
    #[error("profile store credentials not configured")]
    MissingCredentials,

    /// Connection, DNS, or TLS failure
    #[error("transport failure: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("profile store returned HTTP {0}")]
    Status(u16),

    /// Body was not the expected JSON array of rows
    #[error("malformed profile response: {0}")]
    Malformed(String),

    /// Query succeeded but matched no user
    #[error("no profile found for user")]
    NotFound,
}

/// Validation errors raised at the JSON boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was absent or null
    #[error("{0} is required")]
    MissingField(String),

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LookupError::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            LookupError::Status(status.as_u16())
        } else {
            LookupError::Transport(err.to_string())
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
