//! Outbound mailbox — the one file this shell writes.
//!
//! A single slot with overwrite-on-write semantics, kept deliberately: the
//! agent polls the inbox on its wake loop far faster than a human performs
//! drop gestures, and it implements no consumption acknowledgment a queue
//! could hang off. No read-back, no retry — a failed publish is logged by
//! the caller and the UI carries on.

use std::path::{Path, PathBuf};

use crate::model::OutboxMessage;

#[derive(Debug, Clone)]
pub struct Mailbox {
    path: PathBuf,
}

impl Mailbox {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the slot with a new message stamped with the current time.
    pub fn publish(&self, kind: &str, content: &str) -> anyhow::Result<()> {
        self.publish_at(kind, content, chrono::Utc::now().timestamp_millis())
    }

    fn publish_at(&self, kind: &str, content: &str, timestamp: i64) -> anyhow::Result<()> {
        let msg = OutboxMessage {
            kind: kind.to_string(),
            content: content.to_string(),
            timestamp,
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&msg)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::read_document;

    #[test]
    fn test_publish_writes_slot() {
        let dir = tempfile::tempdir().unwrap();
        let mailbox = Mailbox::new(dir.path().join("inbox.json"));
        mailbox.publish_at("file_drop", "/tmp/a.txt", 42).unwrap();

        let msg: OutboxMessage = read_document(mailbox.path()).unwrap();
        assert_eq!(msg.kind, "file_drop");
        assert_eq!(msg.content, "/tmp/a.txt");
        assert_eq!(msg.timestamp, 42);
    }

    #[test]
    fn test_new_message_overwrites_unconsumed() {
        let dir = tempfile::tempdir().unwrap();
        let mailbox = Mailbox::new(dir.path().join("inbox.json"));
        mailbox.publish_at("file_drop", "/tmp/first.txt", 1).unwrap();
        mailbox.publish_at("file_drop", "/tmp/second.txt", 2).unwrap();

        let msg: OutboxMessage = read_document(mailbox.path()).unwrap();
        assert_eq!(msg.content, "/tmp/second.txt");
        assert_eq!(msg.timestamp, 2);
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mailbox = Mailbox::new(dir.path().join("nested").join("inbox.json"));
        mailbox.publish("note", "hi").unwrap();
        assert!(mailbox.path().exists());
    }
}
