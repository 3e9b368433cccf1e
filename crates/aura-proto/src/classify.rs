//! Status-label classification.
//!
//! The agent writes a free-text `status` with an open vocabulary; the shell
//! needs one of four animation states. Matching is an ordered rule table of
//! (pattern set → state) over the lowercased label — first rule whose
//! pattern set matches wins. Adding a synonym means adding a string here,
//! not touching control flow.

use crate::model::AnimationState;

/// One classification rule: any of `patterns` as a substring maps the label
/// to `state`.
pub struct Rule {
    pub patterns: &'static [&'static str],
    pub state: AnimationState,
}

/// Ordered rule table. Earlier rules take priority — "processing input"
/// should classify as thinking before any later rule gets a chance.
pub const RULES: &[Rule] = &[
    Rule {
        patterns: &["listen", "hearing", "ready"],
        state: AnimationState::Listening,
    },
    Rule {
        patterns: &["think", "dream", "process", "working", "optimiz"],
        state: AnimationState::Thinking,
    },
    Rule {
        patterns: &["speak", "talk", "saying", "reading"],
        state: AnimationState::Speaking,
    },
    Rule {
        patterns: &["idle", "wait", "sleep", "muted", "ignor"],
        state: AnimationState::Idle,
    },
];

/// Map a status label to an animation state.
///
/// Unknown or empty labels retain `prev` rather than resetting to idle, so
/// a transient label the table doesn't know never makes the orb flicker.
/// The very first tick passes `AnimationState::Idle` as `prev`.
pub fn classify(status: &str, prev: AnimationState) -> AnimationState {
    let label = status.trim().to_lowercase();
    if label.is_empty() {
        return prev;
    }
    for rule in RULES {
        if rule.patterns.iter().any(|p| label.contains(p)) {
            return rule.state;
        }
    }
    prev
}
