//! DropOverlay — the "receiving" prompt for handing files to the agent.
//!
//! Opened with `a`; while open the shell is in receiving mode and the poll
//! gate is raised, so nothing repaints underneath an in-progress drop.
//! Terminals deliver a file drag as pasted text, which lands in the input
//! like typed characters. Enter publishes, Esc cancels. A multi-file drop
//! pastes several paths — only the first is forwarded.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tui_input::{backend::crossterm::EventHandler, Input};

use crate::{
    action::{Action, ComponentId},
    app_state::AppState,
    component::Component,
    theme::{style_muted, C_RECEIVE_BORDER, C_RECEIVE_FG},
};

pub struct DropOverlay {
    pub visible: bool,
    input: Input,
}

/// First path of a possibly multi-path drop. Drags arrive as
/// whitespace-separated paths; everything after the first is discarded.
pub fn first_path(text: &str) -> Option<&str> {
    text.split_whitespace().next()
}

impl DropOverlay {
    pub fn new() -> Self {
        Self {
            visible: false,
            input: Input::default(),
        }
    }

    pub fn open(&mut self) {
        self.visible = true;
        self.input = Input::default();
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.input = Input::default();
    }
}

impl Component for DropOverlay {
    fn id(&self) -> ComponentId {
        ComponentId::DropOverlay
    }

    fn handle_key(&mut self, key: KeyEvent, _state: &AppState) -> Vec<Action> {
        if key.kind == KeyEventKind::Release || !self.visible {
            return vec![];
        }
        match key.code {
            KeyCode::Esc => {
                self.close();
                vec![Action::CancelReceive]
            }
            KeyCode::Enter => {
                let text = self.input.value().trim().to_string();
                self.close();
                if text.is_empty() {
                    vec![Action::CancelReceive]
                } else {
                    vec![Action::PublishDrop(text)]
                }
            }
            _ => {
                self.input
                    .handle_event(&ratatui::crossterm::event::Event::Key(key));
                vec![]
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, _state: &AppState) {
        if !self.visible {
            return;
        }
        let popup = centered_rect(60, 5, area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(C_RECEIVE_BORDER))
            .title(Line::from(Span::styled(
                " receiving ",
                Style::default()
                    .fg(C_RECEIVE_BORDER)
                    .add_modifier(Modifier::BOLD),
            )));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let value = self.input.value();
        let content = if value.is_empty() {
            Line::from(Span::styled(
                "drop a file here (or type a path), Enter to send, Esc to cancel",
                style_muted(),
            ))
        } else {
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(C_RECEIVE_FG),
            ))
        };
        frame.render_widget(Paragraph::new(content), inner);

        if !value.is_empty() {
            let cursor_x = inner.x + self.input.visual_cursor() as u16;
            frame.set_cursor_position((cursor_x.min(inner.x + inner.width.saturating_sub(1)), inner.y));
        }
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let w = r.width * percent_x / 100;
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, w, height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_path_single() {
        assert_eq!(first_path("/tmp/report.pdf"), Some("/tmp/report.pdf"));
    }

    #[test]
    fn test_first_path_multi_drop_uses_first_only() {
        assert_eq!(
            first_path("/tmp/a.txt /tmp/b.txt\n/tmp/c.txt"),
            Some("/tmp/a.txt")
        );
    }

    #[test]
    fn test_first_path_empty() {
        assert_eq!(first_path("   "), None);
    }
}
