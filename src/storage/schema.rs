//! Database schema definitions

/// Database schema version
pub const SCHEMA_VERSION: u32 = 1;

/// SQL for creating the sessions table
pub const CREATE_SESSIONS_TABLE: &str = r#"
CREATE TABLE sessions (
    id INTEGER PRIMARY KEY,
    session_id TEXT UNIQUE NOT NULL,
    filename TEXT NOT NULL,
    date TEXT NOT NULL,
    time_period TEXT,
    size_kb INTEGER,
    lines INTEGER,
    status TEXT,
    priority TEXT,
    quick_summary TEXT
);
"#;

/// SQL for creating the topics table
pub const CREATE_TOPICS_TABLE: &str = r#"
CREATE TABLE topics (
    id INTEGER PRIMARY KEY,
    session_id TEXT NOT NULL,
    topic TEXT NOT NULL,
    FOREIGN KEY (session_id) REFERENCES sessions(session_id)
);
"#;

/// SQL for creating the keywords table
pub const CREATE_KEYWORDS_TABLE: &str = r#"
CREATE TABLE keywords (
    id INTEGER PRIMARY KEY,
    session_id TEXT NOT NULL,
    keyword TEXT NOT NULL,
    FOREIGN KEY (session_id) REFERENCES sessions(session_id)
);
"#;

/// SQL for creating the versions table (schema only, no rows seeded)
pub const CREATE_VERSIONS_TABLE: &str = r#"
CREATE TABLE versions (
    id INTEGER PRIMARY KEY,
    session_id TEXT NOT NULL,
    version TEXT NOT NULL,
    FOREIGN KEY (session_id) REFERENCES sessions(session_id)
);
"#;

/// SQL for creating the key_changes table (schema only, no rows seeded)
pub const CREATE_KEY_CHANGES_TABLE: &str = r#"
CREATE TABLE key_changes (
    id INTEGER PRIMARY KEY,
    session_id TEXT NOT NULL,
    change_description TEXT NOT NULL,
    FOREIGN KEY (session_id) REFERENCES sessions(session_id)
);
"#;

/// SQL for creating the full-text search virtual table. The porter tokenizer
/// stems terms so a query for "testing" also matches "test"; ascii folding
/// keeps tokenization byte-oriented.
pub const CREATE_SEARCH_FTS_TABLE: &str = r#"
CREATE VIRTUAL TABLE search_fts USING fts5(
    session_id,
    filename,
    content,
    tokenize = 'porter ascii'
);
"#;

/// SQL for creating the secondary lookup indexes
pub const CREATE_INDEXES: &str = r#"
CREATE INDEX idx_topics ON topics(topic);
CREATE INDEX idx_keywords ON keywords(keyword);
CREATE INDEX idx_versions ON versions(version);
CREATE INDEX idx_session_priority ON sessions(priority);
CREATE INDEX idx_session_date ON sessions(date);
"#;

/// Table names created by the build, in creation order
pub const TABLE_NAMES: &[&str] = &[
    "sessions",
    "topics",
    "keywords",
    "versions",
    "key_changes",
    "search_fts",
];

/// Index names created by the build, in creation order
pub const INDEX_NAMES: &[&str] = &[
    "idx_topics",
    "idx_keywords",
    "idx_versions",
    "idx_session_priority",
    "idx_session_date",
];
