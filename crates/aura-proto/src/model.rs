//! Document shapes shared with the agent process, and the merged view-model.
//!
//! Each input file is overwritten wholesale by the agent on every update, so
//! every struct here is a plain snapshot — no append semantics, no history.

use serde::{Deserialize, Serialize};

/// `live.json` — what the agent is doing right now.
///
/// `status` is a free-text label in an open vocabulary ("listening",
/// "thinking", "speaking", ...). `user`/`chat` hold the most recent
/// utterance and reply, not a transcript.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct LiveState {
    pub status: String,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub chat: Option<String>,
}

/// `mood.json` — slowly-changing biometric-like signal.
///
/// Older agent builds wrote `energy` in a 0–1 range before the schema moved
/// to `energy_level` 0–100; both are accepted on read, with small values
/// scaled up. Consumers clamp before display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(from = "MoodDoc")]
pub struct MoodState {
    pub energy_level: f64,
    pub momentum: f64,
}

impl Default for MoodState {
    fn default() -> Self {
        Self {
            energy_level: 100.0,
            momentum: 0.0,
        }
    }
}

impl MoodState {
    /// Energy clamped to the displayable 0–100 range.
    pub fn energy_clamped(&self) -> f64 {
        self.energy_level.clamp(0.0, 100.0)
    }

    /// Momentum clamped to -1..1.
    pub fn momentum_clamped(&self) -> f64 {
        self.momentum.clamp(-1.0, 1.0)
    }

    /// Human label for the momentum band.
    pub fn mood_label(&self) -> &'static str {
        let m = self.momentum_clamped();
        if m > 0.5 {
            "happy"
        } else if m > 0.2 {
            "content"
        } else if m > -0.2 {
            "neutral"
        } else if m > -0.6 {
            "annoyed"
        } else {
            "low"
        }
    }
}

/// Intermediate shape tolerating both mood schemas on disk.
#[derive(Debug, Deserialize)]
struct MoodDoc {
    #[serde(default)]
    energy_level: Option<f64>,
    #[serde(default)]
    energy: Option<f64>,
    #[serde(default)]
    momentum: Option<f64>,
}

impl From<MoodDoc> for MoodState {
    fn from(doc: MoodDoc) -> Self {
        let energy_level = match (doc.energy_level, doc.energy) {
            (Some(v), _) => v,
            // Legacy `energy` was 0–1; anything larger is already a percentage.
            (None, Some(v)) if v <= 1.0 => v * 100.0,
            (None, Some(v)) => v,
            (None, None) => 100.0,
        };
        Self {
            energy_level,
            momentum: doc.momentum.unwrap_or(0.0),
        }
    }
}

/// `internal_monologue.json` — rolling window of the agent's thoughts.
/// Only the final entry is displayed.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MonologueState {
    #[serde(default)]
    pub last_thoughts: Vec<String>,
    #[serde(default)]
    pub current_context: String,
}

/// `inbox.json` — single-slot outbound mailbox, shell → agent.
/// Writing a new message overwrites any unconsumed prior one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboxMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    /// Unix epoch milliseconds at publish time.
    pub timestamp: i64,
}

/// Mutually exclusive visual modes derived from the free-text status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Listening,
    Thinking,
    Speaking,
}

impl AnimationState {
    /// Short label for the status line.
    pub fn label(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Listening => "listening",
            AnimationState::Thinking => "thinking",
            AnimationState::Speaking => "speaking",
        }
    }
}

/// The merged, immutable view-model for one render tick.
///
/// Rebuilt from scratch by [`crate::merge::merge`] every tick; the shell
/// never mutates a snapshot in place. `seq` is monotone — the renderer
/// discards snapshots that arrive out of order.
#[derive(Debug, Clone, PartialEq)]
pub struct UiSnapshot {
    pub seq: u64,
    pub live: LiveState,
    pub mood: MoodState,
    /// Post-processed display text of the latest thought (tag stripped,
    /// trimmed, truncated, `💭 ` prefix). None until a thought arrives.
    pub thought: Option<String>,
    /// `current_context` from the monologue document, may be empty.
    pub context: String,
    pub animation: AnimationState,
}

impl Default for UiSnapshot {
    fn default() -> Self {
        Self {
            seq: 0,
            live: LiveState::default(),
            mood: MoodState::default(),
            thought: None,
            context: String::new(),
            animation: AnimationState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_state_optional_fields() {
        let live: LiveState = serde_json::from_str(r#"{"status":"listening"}"#).unwrap();
        assert_eq!(live.status, "listening");
        assert_eq!(live.user, None);
        assert_eq!(live.chat, None);
    }

    #[test]
    fn test_mood_modern_schema() {
        let mood: MoodState =
            serde_json::from_str(r#"{"energy_level": 62.5, "momentum": -0.4}"#).unwrap();
        assert_eq!(mood.energy_level, 62.5);
        assert_eq!(mood.momentum, -0.4);
    }

    #[test]
    fn test_mood_legacy_energy_scaled() {
        let mood: MoodState = serde_json::from_str(r#"{"energy": 0.8}"#).unwrap();
        assert!((mood.energy_level - 80.0).abs() < 1e-9);
        assert_eq!(mood.momentum, 0.0);
    }

    #[test]
    fn test_mood_empty_document_defaults() {
        let mood: MoodState = serde_json::from_str("{}").unwrap();
        assert_eq!(mood.energy_level, 100.0);
        assert_eq!(mood.momentum, 0.0);
    }

    #[test]
    fn test_mood_labels() {
        let m = |momentum| MoodState {
            energy_level: 100.0,
            momentum,
        };
        assert_eq!(m(0.9).mood_label(), "happy");
        assert_eq!(m(0.3).mood_label(), "content");
        assert_eq!(m(0.0).mood_label(), "neutral");
        assert_eq!(m(-0.4).mood_label(), "annoyed");
        assert_eq!(m(-0.9).mood_label(), "low");
    }

    #[test]
    fn test_outbox_type_field_name() {
        let msg = OutboxMessage {
            kind: "file_drop".to_string(),
            content: "/tmp/report.pdf".to_string(),
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "file_drop");
        assert_eq!(json["content"], "/tmp/report.pdf");
    }
}
