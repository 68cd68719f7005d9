//! Error types for chat-index
//!
//! This module provides error handling for all chat-index operations,
//! including seed data loading, schema creation, and storage.

use thiserror::Error;

/// Main error type for chat-index operations
#[derive(Error, Debug)]
pub enum ChatIndexError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Seed data errors (malformed rows, broken references)
    #[error("Seed data error: {0}")]
    Seed(String),

    /// Database/storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// SQLite database errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// Result type alias for chat-index operations
pub type Result<T> = std::result::Result<T, ChatIndexError>;
