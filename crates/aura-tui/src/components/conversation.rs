//! Conversation component — last user utterance and agent reply.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::{
    action::ComponentId,
    app_state::AppState,
    component::Component,
    theme::{style_default, style_muted, style_secondary, C_ACCENT},
    widgets::pane::pane,
};

pub struct Conversation;

impl Conversation {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Conversation {
    fn id(&self) -> ComponentId {
        ComponentId::Conversation
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if area.height < 3 {
            return;
        }
        let block = pane("conversation");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let snap = &state.snapshot;
        let mut lines = Vec::new();

        // User line is quoted; dimmed when there is no recent utterance.
        match snap.live.user.as_deref().filter(|u| !u.is_empty()) {
            Some(user) => lines.push(Line::from(vec![
                Span::styled("you  ", Style::default().fg(C_ACCENT)),
                Span::styled(format!("\"{}\"", user), style_default()),
            ])),
            None => lines.push(Line::from(Span::styled("you  —", style_muted()))),
        }

        if let Some(chat) = snap.live.chat.as_deref().filter(|c| !c.is_empty()) {
            lines.push(Line::from(vec![
                Span::styled("aura ", style_secondary()),
                Span::styled(chat.to_string(), style_default()),
            ]));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
