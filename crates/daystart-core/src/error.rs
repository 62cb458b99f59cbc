//! Centralized error types for the Daystart core.
//!
//! The resolvers themselves never surface errors to callers (they always
//! fall back to something displayable); these types cover the seams that
//! can legitimately fail: configuration and the preference store.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Preference store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Store(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to write configuration: {0}")]
    WriteFailed(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::WriteFailed(_) => "Could not save configuration. Check file permissions.",
        }
    }
}

/// Preference store errors (SQLite, serialization).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open preference store: {0}")]
    Open(String),

    #[error("Store query failed: {0}")]
    Query(String),

    #[error("Failed to encode value for key '{key}': {message}")]
    Encode { key: String, message: String },
}

impl StoreError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::Open(_) => "Unable to access local data. Try restarting the app.",
            StoreError::Query(_) => "A data operation failed. Please try again.",
            StoreError::Encode { .. } => "Failed to save a setting. Please try again.",
        }
    }
}
