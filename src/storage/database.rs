//! SQLite database operations for chat-index
//!
//! This module owns the connection lifecycle: creating the schema, loading
//! the seed rows inside transactions, building the lookup indexes, and the
//! small read-back surface used to verify a finished build.

use crate::config::Config;
use crate::error::{ChatIndexError, Result};
use crate::seed::{KeywordRecord, SeedData, SessionRecord, TopicRecord};
use crate::storage::schema::*;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// Database connection and operations
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (creating if needed) a database file at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)
            .map_err(|e| ChatIndexError::Storage(format!("Failed to open database: {}", e)))?;

        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing)
    pub fn memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            ChatIndexError::Storage(format!("Failed to create in-memory database: {}", e))
        })?;

        Ok(Self { conn })
    }

    /// Create the five structured tables and the FTS5 virtual table
    pub fn create_schema(&self) -> Result<()> {
        self.conn
            .execute(CREATE_SESSIONS_TABLE, [])
            .map_err(|e| ChatIndexError::Storage(format!("Failed to create sessions table: {}", e)))?;

        self.conn
            .execute(CREATE_TOPICS_TABLE, [])
            .map_err(|e| ChatIndexError::Storage(format!("Failed to create topics table: {}", e)))?;

        self.conn
            .execute(CREATE_KEYWORDS_TABLE, [])
            .map_err(|e| ChatIndexError::Storage(format!("Failed to create keywords table: {}", e)))?;

        self.conn
            .execute(CREATE_VERSIONS_TABLE, [])
            .map_err(|e| ChatIndexError::Storage(format!("Failed to create versions table: {}", e)))?;

        self.conn.execute(CREATE_KEY_CHANGES_TABLE, []).map_err(|e| {
            ChatIndexError::Storage(format!("Failed to create key_changes table: {}", e))
        })?;

        self.conn.execute(CREATE_SEARCH_FTS_TABLE, []).map_err(|e| {
            ChatIndexError::Storage(format!("Failed to create search_fts table: {}", e))
        })?;

        log::info!("Created schema version {}", SCHEMA_VERSION);
        Ok(())
    }

    /// Insert all session rows in one transaction
    pub fn insert_sessions(&mut self, sessions: &[SessionRecord]) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| ChatIndexError::Storage(format!("Failed to start transaction: {}", e)))?;

        {
            let mut stmt = tx
                .prepare(
                    r#"
                    INSERT INTO sessions
                        (session_id, filename, date, time_period, size_kb, lines, status, priority, quick_summary)
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .map_err(|e| ChatIndexError::Storage(format!("Failed to prepare statement: {}", e)))?;

            for session in sessions {
                stmt.execute(params![
                    session.session_id,
                    session.filename,
                    session.date,
                    session.time_period,
                    session.size_kb as i64,
                    session.lines as i64,
                    session.status,
                    session.priority,
                    session.quick_summary,
                ])
                .map_err(|e| {
                    ChatIndexError::Storage(format!(
                        "Failed to insert session {}: {}",
                        session.session_id, e
                    ))
                })?;
            }
        }

        tx.commit()
            .map_err(|e| ChatIndexError::Storage(format!("Failed to commit transaction: {}", e)))?;

        log::info!("Inserted {} sessions", sessions.len());
        Ok(())
    }

    /// Insert all topic rows in one transaction
    pub fn insert_topics(&mut self, topics: &[TopicRecord]) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| ChatIndexError::Storage(format!("Failed to start transaction: {}", e)))?;

        {
            let mut stmt = tx
                .prepare("INSERT INTO topics (session_id, topic) VALUES (?, ?)")
                .map_err(|e| ChatIndexError::Storage(format!("Failed to prepare statement: {}", e)))?;

            for topic in topics {
                stmt.execute(params![topic.session_id, topic.topic]).map_err(|e| {
                    ChatIndexError::Storage(format!(
                        "Failed to insert topic '{}': {}",
                        topic.topic, e
                    ))
                })?;
            }
        }

        tx.commit()
            .map_err(|e| ChatIndexError::Storage(format!("Failed to commit transaction: {}", e)))?;

        log::info!("Inserted {} topics", topics.len());
        Ok(())
    }

    /// Insert all keyword rows in one transaction
    pub fn insert_keywords(&mut self, keywords: &[KeywordRecord]) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| ChatIndexError::Storage(format!("Failed to start transaction: {}", e)))?;

        {
            let mut stmt = tx
                .prepare("INSERT INTO keywords (session_id, keyword) VALUES (?, ?)")
                .map_err(|e| ChatIndexError::Storage(format!("Failed to prepare statement: {}", e)))?;

            for keyword in keywords {
                stmt.execute(params![keyword.session_id, keyword.keyword]).map_err(|e| {
                    ChatIndexError::Storage(format!(
                        "Failed to insert keyword '{}': {}",
                        keyword.keyword, e
                    ))
                })?;
            }
        }

        tx.commit()
            .map_err(|e| ChatIndexError::Storage(format!("Failed to commit transaction: {}", e)))?;

        log::info!("Inserted {} keywords", keywords.len());
        Ok(())
    }

    /// Build the secondary lookup indexes
    pub fn create_indexes(&self) -> Result<()> {
        self.conn
            .execute_batch(CREATE_INDEXES)
            .map_err(|e| ChatIndexError::Storage(format!("Failed to create indexes: {}", e)))?;

        log::info!("Created {} indexes", INDEX_NAMES.len());
        Ok(())
    }

    /// Get total session count
    pub fn session_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))
            .map_err(|e| ChatIndexError::Storage(format!("Failed to count sessions: {}", e)))?;

        Ok(count as usize)
    }

    /// Get total topic count
    pub fn topic_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM topics", [], |row| row.get(0))
            .map_err(|e| ChatIndexError::Storage(format!("Failed to count topics: {}", e)))?;

        Ok(count as usize)
    }

    /// Get total keyword count
    pub fn keyword_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM keywords", [], |row| row.get(0))
            .map_err(|e| ChatIndexError::Storage(format!("Failed to count keywords: {}", e)))?;

        Ok(count as usize)
    }

    /// Session ids carrying the given topic - O(log n) indexed lookup
    pub fn sessions_for_topic(&self, topic: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT session_id FROM topics WHERE topic = ? ORDER BY session_id")
            .map_err(|e| ChatIndexError::Storage(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params![topic], |row| row.get::<_, String>(0))
            .map_err(|e| ChatIndexError::Storage(format!("Failed to query topics: {}", e)))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| {
                ChatIndexError::Storage(format!("Failed to read topic row: {}", e))
            })?);
        }

        Ok(result)
    }

    /// Session ids with the given priority - O(log n) indexed lookup
    pub fn sessions_with_priority(&self, priority: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT session_id FROM sessions WHERE priority = ? ORDER BY session_id")
            .map_err(|e| ChatIndexError::Storage(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params![priority], |row| row.get::<_, String>(0))
            .map_err(|e| ChatIndexError::Storage(format!("Failed to query sessions: {}", e)))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| {
                ChatIndexError::Storage(format!("Failed to read session row: {}", e))
            })?);
        }

        Ok(result)
    }

    /// Number of full-text matches for a query (zero right after a build,
    /// since no content rows are seeded)
    pub fn fts_match_count(&self, query: &str) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM search_fts WHERE search_fts MATCH ?",
                params![query],
                |row| row.get(0),
            )
            .map_err(|e| ChatIndexError::Storage(format!("Failed to run FTS query: {}", e)))?;

        Ok(count as usize)
    }

    /// Names of tables present in the schema catalog
    pub fn catalog_tables(&self) -> Result<Vec<String>> {
        self.catalog_names("table")
    }

    /// Names of indexes present in the schema catalog (SQLite's own
    /// autoindexes excluded)
    pub fn catalog_indexes(&self) -> Result<Vec<String>> {
        Ok(self
            .catalog_names("index")?
            .into_iter()
            .filter(|name| !name.starts_with("sqlite_autoindex"))
            .collect())
    }

    fn catalog_names(&self, kind: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM sqlite_master WHERE type = ? ORDER BY name")
            .map_err(|e| ChatIndexError::Storage(format!("Failed to prepare query: {}", e)))?;

        let rows = stmt
            .query_map(params![kind], |row| row.get::<_, String>(0))
            .map_err(|e| ChatIndexError::Storage(format!("Failed to query catalog: {}", e)))?;

        let mut result = Vec::new();
        for row in rows {
            result.push(row.map_err(|e| {
                ChatIndexError::Storage(format!("Failed to read catalog row: {}", e))
            })?);
        }

        Ok(result)
    }

    /// Flush and release the connection. Dropping the handle would close it
    /// too; this surfaces any close-time error instead of swallowing it.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| ChatIndexError::Storage(format!("Failed to close database: {}", e)))
    }
}

/// Summary of a completed build, rendered by the CLI confirmation
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Where the database file was written
    pub db_path: PathBuf,

    /// Number of session rows inserted
    pub session_count: usize,

    /// Number of topic rows inserted
    pub topic_count: usize,

    /// Number of keyword rows inserted
    pub keyword_count: usize,

    /// Tables created, in creation order
    pub tables: Vec<String>,

    /// Indexes created, in creation order
    pub indexes: Vec<String>,
}

/// Build the search database from scratch: delete any stale file at the
/// configured path, create the schema, load the seed rows, build the lookup
/// indexes, and close the connection. Any failure aborts the run; a rerun
/// starts clean because the stale file is always removed first.
pub fn build_database(config: &Config, seed: &SeedData) -> Result<BuildReport> {
    seed.validate()?;

    if config.db_path.exists() {
        log::info!("Removing stale database at {}", config.db_path.display());
        std::fs::remove_file(&config.db_path)?;
    }

    let mut db = Database::open(&config.db_path)?;
    db.create_schema()?;
    db.insert_sessions(&seed.sessions)?;
    db.insert_topics(&seed.topics)?;
    db.insert_keywords(&seed.keywords)?;
    db.create_indexes()?;
    db.close()?;

    log::info!("Build complete at {}", config.db_path.display());

    Ok(BuildReport {
        db_path: config.db_path.clone(),
        session_count: seed.sessions.len(),
        topic_count: seed.topics.len(),
        keyword_count: seed.keywords.len(),
        tables: TABLE_NAMES.iter().map(|s| s.to_string()).collect(),
        indexes: INDEX_NAMES.iter().map(|s| s.to_string()).collect(),
    })
}
