//! Snapshot merging — the heart of the sync layer.
//!
//! Each poll tick produces at most one fresh document per source; a failed
//! read arrives here as `None`. The merge is a pure function: every field
//! falls back to the previous snapshot when its source had no update this
//! tick, so a mid-write parse failure never blanks the screen.

use crate::classify::classify;
use crate::model::{AnimationState, LiveState, MonologueState, MoodState, UiSnapshot};

/// Prefix applied to the displayed thought line.
pub const THOUGHT_PREFIX: &str = "💭 ";

/// Default display length for a thought, in characters (before the `…`).
pub const DEFAULT_THOUGHT_MAX_CHARS: usize = 80;

#[derive(Debug, Clone)]
pub struct MergeOptions {
    pub thought_max_chars: usize,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            thought_max_chars: DEFAULT_THOUGHT_MAX_CHARS,
        }
    }
}

/// Combine the latest reads into a new snapshot.
///
/// Mood defaults (energy 100, momentum 0) apply only when there is no prior
/// snapshot at all; afterwards the last successfully merged value is the
/// fallback. The caller stamps `seq` — merge leaves it at the previous
/// value so that identical inputs produce identical outputs.
pub fn merge(
    prev: Option<&UiSnapshot>,
    live: Option<LiveState>,
    mood: Option<MoodState>,
    monologue: Option<MonologueState>,
    opts: &MergeOptions,
) -> UiSnapshot {
    let prev_animation = prev.map(|p| p.animation).unwrap_or(AnimationState::Idle);

    let live = match (live, prev) {
        (Some(fresh), _) => fresh,
        (None, Some(p)) => p.live.clone(),
        (None, None) => LiveState::default(),
    };

    let mood = match (mood, prev) {
        (Some(fresh), _) => fresh,
        (None, Some(p)) => p.mood.clone(),
        (None, None) => MoodState::default(),
    };

    let (thought, context) = match monologue {
        Some(m) => {
            let fresh = m
                .last_thoughts
                .last()
                .and_then(|raw| format_thought(raw, opts.thought_max_chars));
            // An empty thought list is not an erasure — keep the last one shown.
            let thought = fresh.or_else(|| prev.and_then(|p| p.thought.clone()));
            (thought, m.current_context)
        }
        None => (
            prev.and_then(|p| p.thought.clone()),
            prev.map(|p| p.context.clone()).unwrap_or_default(),
        ),
    };

    let animation = classify(&live.status, prev_animation);

    UiSnapshot {
        seq: prev.map(|p| p.seq).unwrap_or(0),
        live,
        mood,
        thought,
        context,
        animation,
    }
}

/// Post-process one raw thought for display: strip a leading bracketed tag
/// (the agent prefixes `[HH:MM]`), trim, truncate to `max_chars` with an
/// ellipsis, and prepend the thought marker. Returns None when nothing
/// displayable remains.
pub fn format_thought(raw: &str, max_chars: usize) -> Option<String> {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix('[') {
        if let Some(close) = rest.find(']') {
            text = rest[close + 1..].trim_start();
        }
    }
    let text = text.trim_end();
    if text.is_empty() {
        return None;
    }
    let truncated: String = if text.chars().count() > max_chars {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}…", head)
    } else {
        text.to_string()
    };
    Some(format!("{}{}", THOUGHT_PREFIX, truncated))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(status: &str) -> LiveState {
        LiveState {
            status: status.to_string(),
            user: None,
            chat: None,
        }
    }

    #[test]
    fn test_first_tick_defaults() {
        let snap = merge(None, None, None, None, &MergeOptions::default());
        assert_eq!(snap.mood.energy_level, 100.0);
        assert_eq!(snap.mood.momentum, 0.0);
        assert_eq!(snap.animation, AnimationState::Idle);
        assert_eq!(snap.thought, None);
    }

    #[test]
    fn test_fallback_retains_previous_values() {
        let opts = MergeOptions::default();
        let first = merge(
            None,
            Some(live("speaking")),
            Some(MoodState {
                energy_level: 30.0,
                momentum: -0.5,
            }),
            Some(MonologueState {
                last_thoughts: vec!["[09:15] pondering lunch".to_string()],
                current_context: "morning".to_string(),
            }),
            &opts,
        );
        // Every source fails on the next tick: nothing may change.
        let second = merge(Some(&first), None, None, None, &opts);
        assert_eq!(second, first);
    }

    #[test]
    fn test_newer_data_wins_over_fallback() {
        let opts = MergeOptions::default();
        let first = merge(None, Some(live("idle")), None, None, &opts);
        let second = merge(
            Some(&first),
            Some(live("listening")),
            Some(MoodState {
                energy_level: 10.0,
                momentum: 0.9,
            }),
            None,
            &opts,
        );
        assert_eq!(second.live.status, "listening");
        assert_eq!(second.animation, AnimationState::Listening);
        assert_eq!(second.mood.energy_level, 10.0);
    }

    #[test]
    fn test_idempotent_under_identical_inputs() {
        let opts = MergeOptions::default();
        let prev = merge(None, Some(live("thinking")), None, None, &opts);
        let a = merge(Some(&prev), Some(live("thinking")), None, None, &opts);
        let b = merge(Some(&prev), Some(live("thinking")), None, None, &opts);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_status_retains_animation_across_merges() {
        let opts = MergeOptions::default();
        let prev = merge(None, Some(live("speaking")), None, None, &opts);
        assert_eq!(prev.animation, AnimationState::Speaking);
        let next = merge(Some(&prev), Some(live("recalibrating")), None, None, &opts);
        assert_eq!(next.animation, AnimationState::Speaking);
    }

    #[test]
    fn test_thought_tag_stripped_and_prefixed() {
        assert_eq!(
            format_thought("[debug] hello world", 80).as_deref(),
            Some("💭 hello world")
        );
    }

    #[test]
    fn test_thought_truncation() {
        let long = "x".repeat(100);
        let out = format_thought(&long, 80).unwrap();
        let body = out.strip_prefix(THOUGHT_PREFIX).unwrap();
        assert_eq!(body.chars().count(), 81); // 80 chars + ellipsis
        assert!(body.ends_with('…'));
    }

    #[test]
    fn test_short_thought_not_truncated() {
        let out = format_thought("[10:42] brief", 80).unwrap();
        assert_eq!(out, "💭 brief");
    }

    #[test]
    fn test_empty_thought_list_keeps_last_shown() {
        let opts = MergeOptions::default();
        let prev = merge(
            None,
            None,
            None,
            Some(MonologueState {
                last_thoughts: vec!["[1] old thought".to_string()],
                current_context: String::new(),
            }),
            &opts,
        );
        assert!(prev.thought.is_some());
        let next = merge(
            Some(&prev),
            None,
            None,
            Some(MonologueState::default()),
            &opts,
        );
        assert_eq!(next.thought, prev.thought);
    }

    #[test]
    fn test_context_updates_with_monologue() {
        let opts = MergeOptions::default();
        let snap = merge(
            None,
            None,
            None,
            Some(MonologueState {
                last_thoughts: vec![],
                current_context: "deep focus".to_string(),
            }),
            &opts,
        );
        assert_eq!(snap.context, "deep focus");
    }
}
