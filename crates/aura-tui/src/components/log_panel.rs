//! LogPanel component — collapsible view of the shell's own log buffer.
//!
//! Shows the most recent line when collapsed; `l` expands to a scrollable
//! panel. Purely in-app messages (poll failures, mailbox publishes) — the
//! full tracing output goes to the log file.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{style_muted, style_secondary},
    widgets::pane::pane,
};

pub struct LogPanel {
    pub expanded: bool,
    scroll: usize,
}

impl LogPanel {
    pub fn new() -> Self {
        Self {
            expanded: false,
            scroll: usize::MAX, // stick to bottom
        }
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
        if self.expanded {
            self.scroll = usize::MAX;
        }
    }

    /// Rows this panel wants in the current mode.
    pub fn height(&self) -> u16 {
        if self.expanded {
            8
        } else {
            1
        }
    }
}

impl Component for LogPanel {
    fn id(&self) -> ComponentId {
        ComponentId::LogPanel
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release || !self.expanded {
            return vec![];
        }
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll = usize::MAX;
            }
            _ => {}
        }
        vec![]
    }

    fn on_action(&mut self, action: &Action, _state: &AppState) -> Vec<Action> {
        if matches!(action, Action::ToggleLogs) {
            self.toggle();
        }
        vec![]
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if area.height == 0 {
            return;
        }

        if !self.expanded || area.height <= 1 {
            let last = state
                .logs
                .last()
                .cloned()
                .unwrap_or_else(|| "(no log)".to_string());
            frame.render_widget(
                Paragraph::new(Line::from(vec![
                    Span::styled(" log ", style_muted()),
                    Span::styled(last, style_secondary()),
                ])),
                area,
            );
            return;
        }

        let block = pane("log");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let height = inner.height as usize;
        let max_scroll = state.logs.len().saturating_sub(height);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        let lines: Vec<Line> = state
            .logs
            .iter()
            .skip(self.scroll)
            .take(height)
            .map(|msg| Line::from(Span::styled(msg.clone(), style_muted())))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
