//! # chat-index
//!
//! Builds a local SQLite database that indexes chat-session transcripts for
//! fast lookup: session metadata, per-session topics and keywords, secondary
//! indexes over the hot query dimensions, and an FTS5 shell for full-text
//! search over transcript content.
//!
//! The build is a one-shot operation: any stale database file at the target
//! path is deleted and the schema plus seed rows are recreated from scratch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chat_index::{build_database, Config, SeedData};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::new("search.db");
//!     let seed = SeedData::builtin();
//!
//!     let report = build_database(&config, &seed)?;
//!     println!("Indexed {} sessions at {}", report.session_count, report.db_path.display());
//!
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod seed;
pub mod storage;

// Re-export main API types
pub use config::Config;
pub use error::{ChatIndexError, Result};
pub use seed::{KeywordRecord, SeedData, SessionRecord, TopicRecord};
pub use storage::{build_database, BuildReport, Database};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_imports() {
        // Ensure all major types can be imported
        let _config = Config::default();
        let _seed = SeedData::builtin();
    }
}
