//! Build configuration for chat-index
//!
//! The original tooling this replaces pinned the database to one absolute
//! path; here the target is an explicit parameter so callers (and tests) can
//! build against any location.

use std::path::{Path, PathBuf};

/// Default database filename, relative to the working directory
pub const DEFAULT_DB_FILENAME: &str = "search.db";

/// Configuration for a database build
#[derive(Debug, Clone)]
pub struct Config {
    /// Target path for the SQLite database file
    pub db_path: PathBuf,

    /// Optional external seed file (JSON); `None` uses the built-in data set
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Create a configuration targeting the given database path
    pub fn new<P: AsRef<Path>>(db_path: P) -> Self {
        Self {
            db_path: db_path.as_ref().to_path_buf(),
            seed_file: None,
        }
    }

    /// Use an external JSON seed file instead of the built-in data set
    pub fn with_seed_file<P: AsRef<Path>>(mut self, seed_file: P) -> Self {
        self.seed_file = Some(seed_file.as_ref().to_path_buf());
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_DB_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_FILENAME));
        assert!(config.seed_file.is_none());
    }

    #[test]
    fn test_with_seed_file() {
        let config = Config::new("out/search.db").with_seed_file("seed.json");
        assert_eq!(config.db_path, PathBuf::from("out/search.db"));
        assert_eq!(config.seed_file, Some(PathBuf::from("seed.json")));
    }
}
