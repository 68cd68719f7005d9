//! Seed data for the chat-session search index
//!
//! The rows loaded into the database live here as data, not as inline SQL:
//! a built-in reference set covering five recorded sessions, plus a JSON
//! loader so an external file can supply the rows instead.

use crate::error::{ChatIndexError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Metadata for one recorded chat session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique session identifier, e.g. "session-001"
    pub session_id: String,

    /// Transcript filename the session was recorded from
    pub filename: String,

    /// Session date, YYYY-MM-DD
    pub date: String,

    /// Time-of-day label, e.g. "morning-afternoon"
    pub time_period: String,

    /// Transcript size in kilobytes
    pub size_kb: u32,

    /// Transcript line count
    pub lines: u32,

    /// Status label, e.g. "active"
    pub status: String,

    /// Priority label, e.g. "critical"
    pub priority: String,

    /// One-paragraph summary of the session
    pub quick_summary: String,
}

/// One topic label attached to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub session_id: String,
    pub topic: String,
}

/// One keyword attached to a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    pub session_id: String,
    pub keyword: String,
}

/// The full row set for one database build
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    pub sessions: Vec<SessionRecord>,
    pub topics: Vec<TopicRecord>,
    pub keywords: Vec<KeywordRecord>,
}

impl SeedData {
    /// Load seed data from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let seed: SeedData = serde_json::from_str(&content)?;
        Ok(seed)
    }

    /// Check the row set before it touches the database: session ids must be
    /// unique, dates must parse as YYYY-MM-DD, and every topic/keyword must
    /// reference a session in the set. The sessions table enforces id
    /// uniqueness too, but topic/keyword references are plain foreign keys
    /// without cascade rules, so they are checked here.
    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for session in &self.sessions {
            if !ids.insert(session.session_id.as_str()) {
                return Err(ChatIndexError::Seed(format!(
                    "duplicate session id: {}",
                    session.session_id
                )));
            }
            NaiveDate::parse_from_str(&session.date, "%Y-%m-%d").map_err(|e| {
                ChatIndexError::Seed(format!(
                    "session {} has invalid date '{}': {}",
                    session.session_id, session.date, e
                ))
            })?;
        }

        for topic in &self.topics {
            if !ids.contains(topic.session_id.as_str()) {
                return Err(ChatIndexError::Seed(format!(
                    "topic '{}' references unknown session: {}",
                    topic.topic, topic.session_id
                )));
            }
        }

        for keyword in &self.keywords {
            if !ids.contains(keyword.session_id.as_str()) {
                return Err(ChatIndexError::Seed(format!(
                    "keyword '{}' references unknown session: {}",
                    keyword.keyword, keyword.session_id
                )));
            }
        }

        Ok(())
    }

    /// The built-in reference data set: five sessions recorded on 2025-10-05
    pub fn builtin() -> Self {
        let sessions = vec![
            SessionRecord {
                session_id: "session-001".to_string(),
                filename: "session-2025-10-05-v2.3.13-to-v2.3.15.md".to_string(),
                date: "2025-10-05".to_string(),
                time_period: "morning-afternoon".to_string(),
                size_kb: 23,
                lines: 812,
                status: "active".to_string(),
                priority: "high".to_string(),
                quick_summary: "Three version releases fixing card display on tablets and \
                                phones, adding rotation support, and creating initial \
                                automated testing system v1.0"
                    .to_string(),
            },
            SessionRecord {
                session_id: "session-002".to_string(),
                filename: "session-2025-10-05-emulator-testing-v2.0.0.md".to_string(),
                date: "2025-10-05".to_string(),
                time_period: "evening-extended".to_string(),
                size_kb: 22,
                lines: 502,
                status: "active".to_string(),
                priority: "critical".to_string(),
                quick_summary: "Major release v2.0.0 expanding package manager support from 5 \
                                to 10, achieving 95% Linux coverage, adding CI/CD automation, \
                                and integrating website showcase"
                    .to_string(),
            },
            SessionRecord {
                session_id: "session-003".to_string(),
                filename: "session-2025-10-05-website-updates.md".to_string(),
                date: "2025-10-05".to_string(),
                time_period: "evening-part1".to_string(),
                size_kb: 16,
                lines: 540,
                status: "active".to_string(),
                priority: "medium".to_string(),
                quick_summary: "Redesigned website testing page to match main site design, \
                                improved layout and responsiveness, added professional styling"
                    .to_string(),
            },
            SessionRecord {
                session_id: "session-004".to_string(),
                filename: "session-2025-10-05-final-cleanup.md".to_string(),
                date: "2025-10-05".to_string(),
                time_period: "evening-part2".to_string(),
                size_kb: 17,
                lines: 602,
                status: "active".to_string(),
                priority: "medium".to_string(),
                quick_summary: "Complete repository cleanup organizing 82 documentation files \
                                into docs/ structure with comprehensive navigation"
                    .to_string(),
            },
            SessionRecord {
                session_id: "session-005".to_string(),
                filename: "session-2025-10-05-complete.md".to_string(),
                date: "2025-10-05".to_string(),
                time_period: "all-day".to_string(),
                size_kb: 16,
                lines: 527,
                status: "active".to_string(),
                priority: "highest".to_string(),
                quick_summary: "Master summary document covering entire day's work across all \
                                sessions with complete statistics and future roadmap"
                    .to_string(),
            },
        ];

        let topics = [
            ("session-001", "app_versions"),
            ("session-001", "card_layout_fixes"),
            ("session-001", "tablet_optimization"),
            ("session-001", "testing_system_v1.0"),
            ("session-002", "package_managers"),
            ("session-002", "linux_support"),
            ("session-002", "ci_cd_automation"),
            ("session-002", "version_v2.0.0"),
            ("session-002", "website_integration"),
            ("session-003", "website_design"),
            ("session-003", "testing_page_redesign"),
            ("session-004", "repository_cleanup"),
            ("session-004", "documentation_organization"),
            ("session-005", "master_summary"),
            ("session-005", "complete_overview"),
        ]
        .into_iter()
        .map(|(session_id, topic)| TopicRecord {
            session_id: session_id.to_string(),
            topic: topic.to_string(),
        })
        .collect();

        let keywords = [
            ("session-001", "card_display"),
            ("session-001", "tablet_width"),
            ("session-001", "rotation"),
            ("session-001", "v2.3.13"),
            ("session-001", "v2.3.14"),
            ("session-001", "v2.3.15"),
            ("session-002", "apt"),
            ("session-002", "dnf"),
            ("session-002", "yum"),
            ("session-002", "pacman"),
            ("session-002", "zypper"),
            ("session-002", "apk"),
            ("session-002", "emerge"),
            ("session-002", "xbps"),
            ("session-002", "nix"),
            ("session-002", "brew"),
            ("session-002", "v2.0.0"),
            ("session-002", "95_percent_coverage"),
            ("session-002", "github_actions"),
            ("session-003", "testing_html"),
            ("session-003", "responsive_design"),
            ("session-004", "docs_structure"),
            ("session-004", "82_files"),
            ("session-005", "future_roadmap"),
            ("session-005", "statistics"),
        ]
        .into_iter()
        .map(|(session_id, keyword)| KeywordRecord {
            session_id: session_id.to_string(),
            keyword: keyword.to_string(),
        })
        .collect();

        Self {
            sessions,
            topics,
            keywords,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_shape() {
        let seed = SeedData::builtin();
        assert_eq!(seed.sessions.len(), 5);
        assert_eq!(seed.topics.len(), 15);
        assert_eq!(seed.keywords.len(), 25);
    }

    #[test]
    fn test_builtin_validates() {
        SeedData::builtin().validate().unwrap();
    }

    #[test]
    fn test_duplicate_session_id_rejected() {
        let mut seed = SeedData::builtin();
        let mut dup = seed.sessions[0].clone();
        dup.filename = "another-file.md".to_string();
        seed.sessions.push(dup);

        let err = seed.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate session id"));
    }

    #[test]
    fn test_dangling_topic_rejected() {
        let mut seed = SeedData::builtin();
        seed.topics.push(TopicRecord {
            session_id: "session-999".to_string(),
            topic: "orphaned".to_string(),
        });

        let err = seed.validate().unwrap_err();
        assert!(err.to_string().contains("session-999"));
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut seed = SeedData::builtin();
        seed.sessions[0].date = "05/10/2025".to_string();

        let err = seed.validate().unwrap_err();
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_json_round_trip() {
        let seed = SeedData::builtin();
        let json = serde_json::to_string(&seed).unwrap();
        let parsed: SeedData = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, seed);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(&path, serde_json::to_string(&SeedData::builtin()).unwrap()).unwrap();

        let loaded = SeedData::from_json_file(&path).unwrap();
        assert_eq!(loaded, SeedData::builtin());
    }

    #[test]
    fn test_missing_seed_file() {
        let result = SeedData::from_json_file("does-not-exist.json");
        assert!(matches!(result, Err(ChatIndexError::Io(_))));
    }
}
