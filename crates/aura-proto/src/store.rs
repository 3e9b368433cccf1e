//! Tolerant reads of the agent's shared JSON files.
//!
//! The agent overwrites each file wholesale on its own schedule, so the
//! shell may poll mid-write and see a truncated or half-written document.
//! That is an expected condition, not an error to surface: every failure
//! here maps to "no update this tick" and the caller keeps rendering the
//! previous value.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a poll of one source file produced no document this tick.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The file does not exist yet (agent not started, or never wrote it).
    #[error("document not present: {0}")]
    Missing(PathBuf),
    /// The file exists but is not valid JSON — typically a concurrent write.
    #[error("malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    /// Transient failures resolve themselves on a later tick once the
    /// writer finishes; they are never logged above debug level.
    pub fn is_transient(&self) -> bool {
        matches!(self, ReadError::Missing(_) | ReadError::Malformed { .. })
    }
}

/// Read and parse one JSON document. Blocking; used by tests and by the
/// first synchronous load at startup.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ReadError> {
    let bytes = match std::fs::read(path) {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReadError::Missing(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ReadError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    serde_json::from_slice(&bytes).map_err(|e| ReadError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Async variant used by the poll task.
pub async fn read_document_async<T: DeserializeOwned>(path: &Path) -> Result<T, ReadError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ReadError::Missing(path.to_path_buf()))
        }
        Err(e) => {
            return Err(ReadError::Io {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };
    serde_json::from_slice(&bytes).map_err(|e| ReadError::Malformed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// The three input files the agent owns, plus the outbound mailbox slot.
#[derive(Debug, Clone)]
pub struct AgentSources {
    pub live: PathBuf,
    pub mood: PathBuf,
    pub monologue: PathBuf,
    pub inbox: PathBuf,
}

impl AgentSources {
    pub fn new(state_dir: &Path) -> Self {
        Self {
            live: state_dir.join("live.json"),
            mood: state_dir.join("mood.json"),
            monologue: state_dir.join("internal_monologue.json"),
            inbox: state_dir.join("inbox.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LiveState, MoodState};

    #[test]
    fn test_missing_file_is_transient() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document::<LiveState>(&dir.path().join("live.json")).unwrap_err();
        assert!(matches!(err, ReadError::Missing(_)));
        assert!(err.is_transient());
    }

    #[test]
    fn test_malformed_json_is_transient() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("live.json");
        // Truncated mid-write, as seen when polling during an agent update.
        std::fs::write(&path, r#"{"status": "listen"#).unwrap();
        let err = read_document::<LiveState>(&path).unwrap_err();
        assert!(matches!(err, ReadError::Malformed { .. }));
        assert!(err.is_transient());
    }

    #[test]
    fn test_empty_file_is_transient() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mood.json");
        std::fs::write(&path, "").unwrap();
        let err = read_document::<MoodState>(&path).unwrap_err();
        assert!(err.is_transient());
    }

    #[test]
    fn test_valid_document_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("live.json");
        std::fs::write(&path, r#"{"status": "speaking", "chat": "hello"}"#).unwrap();
        let live: LiveState = read_document(&path).unwrap();
        assert_eq!(live.status, "speaking");
        assert_eq!(live.chat.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_async_read_matches_sync() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mood.json");
        std::fs::write(&path, r#"{"energy_level": 55.0, "momentum": 0.1}"#).unwrap();
        let mood: MoodState = read_document_async(&path).await.unwrap();
        assert_eq!(mood.energy_level, 55.0);
    }

    #[test]
    fn test_sources_layout() {
        let sources = AgentSources::new(Path::new("/tmp/agent"));
        assert!(sources.live.ends_with("live.json"));
        assert!(sources.monologue.ends_with("internal_monologue.json"));
        assert!(sources.inbox.ends_with("inbox.json"));
    }
}
