//! Error Types
//!
//! Errors for store operations and startup configuration.

use crate::models::ItemId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No item with this id exists
    NotFound(ItemId),
    /// Another item is being edited; only committing that edit is allowed
    EditInProgress(ItemId),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Not found: item {}", id),
            StoreError::EditInProgress(id) => write!(f, "Locked: item {} is being edited", id),
        }
    }
}

impl std::error::Error for StoreError {}

/// Startup configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config JSON could not be parsed
    Parse(String),
    /// Unknown log level name
    InvalidLevel(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Parse(msg) => write!(f, "Invalid config: {}", msg),
            ConfigError::InvalidLevel(level) => write!(f, "Invalid log level: {}", level),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
