//! Storage functionality for chat-index
//!
//! This module provides database operations using embedded SQLite.

pub mod database;
pub mod schema;

// Re-export main types
pub use database::{build_database, BuildReport, Database};
