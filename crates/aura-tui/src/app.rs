//! App — component-based event loop.
//!
//! - `App` owns all components and `AppState` (shared read-only data).
//! - A `tokio::mpsc` channel carries `AppMessage` events in from the
//!   keyboard reader and the poll task.
//! - The loop draws a frame when something changed, then awaits the next
//!   message; components return `Vec<Action>` which the App dispatches.
//! - Snapshots are applied only when strictly newer than the last rendered
//!   one, so a stale in-flight poll can never paint over fresh state.

use std::io;

use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tokio::sync::{mpsc, watch};
use tracing::{trace, warn};

use aura_proto::config::UiConfig;
use aura_proto::mailbox::Mailbox;
use aura_proto::model::UiSnapshot;

use crate::{
    action::Action,
    app_state::AppState,
    component::Component,
    components::{
        conversation::Conversation,
        drop_overlay::{first_path, DropOverlay},
        log_panel::LogPanel,
        monologue::Monologue,
        mood::Mood,
        presence::Presence,
    },
    sync::should_render,
};

const MAX_LOG_LINES: usize = 200;

// ── Internal event bus ────────────────────────────────────────────────────────

pub enum AppMessage {
    /// Terminal input (keyboard).
    Event(Event),
    /// A merged snapshot from the poll task, stamped with its sequence.
    Snapshot(UiSnapshot),
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    pub state: AppState,

    presence: Presence,
    conversation: Conversation,
    mood: Mood,
    monologue: Monologue,
    log_panel: LogPanel,
    drop_overlay: DropOverlay,

    mailbox: Mailbox,
    /// Raising this suspends the poll task (drop-in-progress).
    gate_tx: watch::Sender<bool>,

    last_rendered_seq: u64,
    should_quit: bool,
}

impl App {
    pub fn new(ui: UiConfig, mailbox: Mailbox, gate_tx: watch::Sender<bool>) -> Self {
        Self {
            state: AppState::new(ui),
            presence: Presence::new(),
            conversation: Conversation::new(),
            mood: Mood::new(),
            monologue: Monologue::new(),
            log_panel: LogPanel::new(),
            drop_overlay: DropOverlay::new(),
            mailbox,
            gate_tx,
            last_rendered_seq: 0,
            should_quit: false,
        }
    }

    fn push_log(&mut self, msg: String) {
        let line = format!("{} {}", chrono::Local::now().format("%H:%M:%S"), msg);
        self.state.logs.push(line);
        if self.state.logs.len() > MAX_LOG_LINES {
            let excess = self.state.logs.len() - MAX_LOG_LINES;
            self.state.logs.drain(..excess);
        }
    }

    // ── Main run loop ─────────────────────────────────────────────────────────

    pub async fn run(
        mut self,
        tx: mpsc::Sender<AppMessage>,
        mut rx: mpsc::Receiver<AppMessage>,
    ) -> anyhow::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.push_log("aura started".to_string());

        // ── Background task: keyboard events ─────────────────────────────────
        let event_tx = tx.clone();
        tokio::task::spawn_blocking(move || loop {
            match event::read() {
                Ok(ev) => {
                    if event_tx.blocking_send(AppMessage::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        });

        // UI tick: advances the orb animation frame.
        let mut ui_tick = tokio::time::interval(std::time::Duration::from_millis(100));
        ui_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        // ── Main loop ─────────────────────────────────────────────────────────
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
            }
            needs_redraw = false;

            if self.should_quit {
                break;
            }

            tokio::select! {
                Some(msg) = rx.recv() => {
                    needs_redraw = self.handle_message(msg);
                    // Drain whatever queued up behind it before redrawing.
                    while let Ok(next) = rx.try_recv() {
                        needs_redraw |= self.handle_message(next);
                    }
                }
                _ = ui_tick.tick() => {
                    self.state.anim_frame = self.state.anim_frame.wrapping_add(1);
                    needs_redraw = true;
                }
            }
        }

        // ── Teardown ──────────────────────────────────────────────────────────
        // Dropping `rx` here closes the channel; the poll task observes the
        // failed send and stops. No snapshot can arrive after this point.
        drop(rx);
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    // ── Message handler ───────────────────────────────────────────────────────

    /// Returns `true` if the message requires a redraw.
    fn handle_message(&mut self, msg: AppMessage) -> bool {
        match msg {
            AppMessage::Event(Event::Key(key)) => {
                if key.kind == KeyEventKind::Release {
                    return false;
                }
                let actions = self.handle_key(key);
                for a in actions {
                    self.dispatch(a);
                }
                true
            }
            AppMessage::Event(Event::Resize(..)) => true,
            AppMessage::Event(_) => false,

            AppMessage::Snapshot(snap) => {
                if !should_render(self.last_rendered_seq, snap.seq) {
                    trace!("discarding stale snapshot seq={}", snap.seq);
                    return false;
                }
                self.last_rendered_seq = snap.seq;
                self.state.snapshot = snap;
                true
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Action> {
        // The receive prompt consumes everything while open.
        if self.drop_overlay.visible {
            return self.drop_overlay.handle_key(key, &self.state);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
            KeyCode::Char('l') => vec![Action::ToggleLogs],
            KeyCode::Char('a') => vec![Action::OpenReceive],
            _ => self.log_panel.handle_key(key, &self.state),
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ToggleLogs => {
                self.log_panel.on_action(&Action::ToggleLogs, &self.state);
            }
            Action::OpenReceive => {
                self.drop_overlay.open();
                self.set_gate(true);
                self.push_log("receiving — polling suspended".to_string());
            }
            Action::CancelReceive => {
                self.set_gate(false);
            }
            Action::PublishDrop(text) => {
                match first_path(&text) {
                    Some(path) => match self.mailbox.publish("file_drop", path) {
                        Ok(()) => self.push_log(format!("sent to agent: {}", path)),
                        Err(e) => {
                            // Non-fatal: the user sees no error state, just a log line.
                            warn!("mailbox publish failed: {}", e);
                            self.push_log("mailbox write failed".to_string());
                        }
                    },
                    None => self.push_log("nothing to send".to_string()),
                }
                self.set_gate(false);
            }
        }
    }

    fn set_gate(&mut self, raised: bool) {
        self.state.receiving = raised;
        // send_replace never fails; the poll task holds the receiver for its
        // whole life.
        self.gate_tx.send_replace(raised);
    }

    // ── Layout / draw ─────────────────────────────────────────────────────────

    fn draw(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),                      // presence orb
                Constraint::Min(4),                         // conversation
                Constraint::Length(4),                      // mood meters
                Constraint::Length(3),                      // monologue
                Constraint::Length(self.log_panel.height()), // log strip
            ])
            .split(frame.area());

        self.presence.draw(frame, rows[0], &self.state);
        self.conversation.draw(frame, rows[1], &self.state);
        self.mood.draw(frame, rows[2], &self.state);
        self.monologue.draw(frame, rows[3], &self.state);
        self.log_panel.draw(frame, rows[4], &self.state);

        // Overlay last, on top of everything.
        self.drop_overlay.draw(frame, frame.area(), &self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_proto::model::OutboxMessage;
    use aura_proto::store::read_document;

    fn test_app(dir: &std::path::Path) -> (App, watch::Receiver<bool>) {
        let (gate_tx, gate_rx) = watch::channel(false);
        let app = App::new(
            UiConfig::default(),
            Mailbox::new(dir.join("inbox.json")),
            gate_tx,
        );
        (app, gate_rx)
    }

    #[test]
    fn test_multi_file_drop_publishes_first_only() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, gate_rx) = test_app(dir.path());

        app.dispatch(Action::OpenReceive);
        assert!(*gate_rx.borrow());

        app.dispatch(Action::PublishDrop(
            "/tmp/a.txt /tmp/b.txt".to_string(),
        ));
        let msg: OutboxMessage = read_document(&dir.path().join("inbox.json")).unwrap();
        assert_eq!(msg.kind, "file_drop");
        assert_eq!(msg.content, "/tmp/a.txt");

        // Polling resumes as soon as the drop completes.
        assert!(!*gate_rx.borrow());
        assert!(!app.state.receiving);
    }

    #[test]
    fn test_cancel_receive_lowers_gate() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, gate_rx) = test_app(dir.path());

        app.dispatch(Action::OpenReceive);
        app.dispatch(Action::CancelReceive);
        assert!(!*gate_rx.borrow());
        assert!(!dir.path().join("inbox.json").exists());
    }

    #[test]
    fn test_stale_snapshot_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _gate_rx) = test_app(dir.path());

        let mut newer = UiSnapshot::default();
        newer.seq = 5;
        newer.live.status = "speaking".to_string();
        assert!(app.handle_message(AppMessage::Snapshot(newer)));

        let mut stale = UiSnapshot::default();
        stale.seq = 3;
        stale.live.status = "idle".to_string();
        assert!(!app.handle_message(AppMessage::Snapshot(stale)));
        assert_eq!(app.state.snapshot.live.status, "speaking");
        assert_eq!(app.last_rendered_seq, 5);
    }

    #[test]
    fn test_quit_action_sets_flag() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _gate_rx) = test_app(dir.path());
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
