//! PollLoop — the task that mirrors the agent's files into snapshots.
//!
//! Two cadences: a fast one for `live.json` (drives the orb) and a slower
//! one for the mood/monologue panels. Each tick reads its sources, merges
//! against the previous snapshot, stamps a monotone sequence number, and
//! sends the result to the App. The task is single-flight by construction —
//! one read sequence at a time, so snapshots always leave here in `seq`
//! order. The App still guards with [`should_render`] so that nothing stale
//! can overwrite a newer render.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, warn};

use aura_proto::config::PollingConfig;
use aura_proto::merge::{merge, MergeOptions};
use aura_proto::model::{LiveState, MonologueState, MoodState, UiSnapshot};
use aura_proto::store::{read_document_async, AgentSources};

use crate::app::AppMessage;

/// True when `incoming` should replace the last rendered snapshot.
/// Anything not strictly newer is a stale in-flight result and is dropped.
pub fn should_render(last_rendered_seq: u64, incoming_seq: u64) -> bool {
    incoming_seq > last_rendered_seq
}

pub struct PollLoop {
    sources: AgentSources,
    opts: MergeOptions,
    polling: PollingConfig,
    gate: watch::Receiver<bool>,
    tx: mpsc::Sender<AppMessage>,
    prev: Option<UiSnapshot>,
    seq: u64,
}

impl PollLoop {
    pub fn new(
        sources: AgentSources,
        opts: MergeOptions,
        polling: PollingConfig,
        gate: watch::Receiver<bool>,
        tx: mpsc::Sender<AppMessage>,
    ) -> Self {
        Self {
            sources,
            opts,
            polling,
            gate,
            tx,
            prev: None,
            seq: 0,
        }
    }

    /// Run until the App drops its receiver. No snapshot is delivered after
    /// that point — `send` failing is the teardown signal.
    pub async fn run(mut self) {
        let mut live_tick =
            tokio::time::interval(Duration::from_millis(self.polling.live_interval_ms.max(10)));
        live_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut panel_tick =
            tokio::time::interval(Duration::from_millis(self.polling.panel_interval_ms.max(10)));
        panel_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        loop {
            let snapshot = tokio::select! {
                _ = live_tick.tick() => self.poll_once(true, false).await,
                _ = panel_tick.tick() => self.poll_once(false, true).await,
            };
            if let Some(snap) = snapshot {
                if self.tx.send(AppMessage::Snapshot(snap)).await.is_err() {
                    debug!("app receiver closed, poll loop stopping");
                    return;
                }
            }
        }
    }

    /// One tick: skip entirely while the suppression gate is raised,
    /// otherwise read the selected sources and merge.
    async fn poll_once(&mut self, read_live: bool, read_panels: bool) -> Option<UiSnapshot> {
        if *self.gate.borrow() {
            return None;
        }

        let live = if read_live {
            read_source::<LiveState>(&self.sources.live).await
        } else {
            None
        };
        let (mood, monologue) = if read_panels {
            (
                read_source::<MoodState>(&self.sources.mood).await,
                read_source::<MonologueState>(&self.sources.monologue).await,
            )
        } else {
            (None, None)
        };

        let mut snap = merge(self.prev.as_ref(), live, mood, monologue, &self.opts);
        self.seq += 1;
        snap.seq = self.seq;
        self.prev = Some(snap.clone());
        Some(snap)
    }
}

async fn read_source<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Option<T> {
    match read_document_async::<T>(path).await {
        Ok(doc) => Some(doc),
        Err(e) if e.is_transient() => {
            // Expected mid-write or agent-not-started condition; retry next
            // tick with the previous value retained.
            debug!("transient read failure: {}", e);
            None
        }
        Err(e) => {
            warn!("read failure: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_proto::model::AnimationState;

    fn poll_loop(dir: &std::path::Path, gate: watch::Receiver<bool>) -> (PollLoop, mpsc::Receiver<AppMessage>) {
        let (tx, rx) = mpsc::channel(16);
        let pl = PollLoop::new(
            AgentSources::new(dir),
            MergeOptions::default(),
            PollingConfig::default(),
            gate,
            tx,
        );
        (pl, rx)
    }

    #[test]
    fn test_should_render_discards_stale() {
        assert!(should_render(0, 1));
        assert!(should_render(5, 6));
        assert!(!should_render(6, 6));
        assert!(!should_render(7, 3));
    }

    #[tokio::test]
    async fn test_gate_suppresses_tick() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("live.json"), r#"{"status":"listening"}"#).unwrap();
        let (_gate_tx, gate_rx) = watch::channel(true);
        let (mut pl, _rx) = poll_loop(dir.path(), gate_rx);
        assert!(pl.poll_once(true, true).await.is_none());
    }

    #[tokio::test]
    async fn test_poll_reads_and_classifies() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("live.json"), r#"{"status":"speaking"}"#).unwrap();
        let (_gate_tx, gate_rx) = watch::channel(false);
        let (mut pl, _rx) = poll_loop(dir.path(), gate_rx);

        let snap = pl.poll_once(true, false).await.unwrap();
        assert_eq!(snap.seq, 1);
        assert_eq!(snap.animation, AnimationState::Speaking);
    }

    #[tokio::test]
    async fn test_malformed_live_retains_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let live_path = dir.path().join("live.json");
        std::fs::write(&live_path, r#"{"status":"thinking"}"#).unwrap();
        let (_gate_tx, gate_rx) = watch::channel(false);
        let (mut pl, _rx) = poll_loop(dir.path(), gate_rx);

        let first = pl.poll_once(true, false).await.unwrap();
        assert_eq!(first.live.status, "thinking");

        // Agent caught mid-write: the tick still emits a snapshot, with the
        // previous values carried forward and a newer seq.
        std::fs::write(&live_path, r#"{"status":"thi"#).unwrap();
        let second = pl.poll_once(true, false).await.unwrap();
        assert_eq!(second.live.status, "thinking");
        assert_eq!(second.animation, AnimationState::Thinking);
        assert_eq!(second.seq, 2);
    }

    #[tokio::test]
    async fn test_gate_lowered_resumes_on_next_tick() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("live.json"), r#"{"status":"ready"}"#).unwrap();
        let (gate_tx, gate_rx) = watch::channel(true);
        let (mut pl, _rx) = poll_loop(dir.path(), gate_rx);

        assert!(pl.poll_once(true, false).await.is_none());
        gate_tx.send(false).unwrap();
        let snap = pl.poll_once(true, false).await.unwrap();
        assert_eq!(snap.animation, AnimationState::Listening);
    }
}
