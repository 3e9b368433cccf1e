//! Monologue component — the agent's latest inner thought.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    action::ComponentId,
    app_state::AppState,
    component::Component,
    theme::{style_muted, C_THOUGHT},
    widgets::pane::pane,
};

pub struct Monologue;

impl Monologue {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Monologue {
    fn id(&self) -> ComponentId {
        ComponentId::Monologue
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if area.height < 3 {
            return;
        }
        let snap = &state.snapshot;

        // The agent's current context doubles as the panel title when set.
        let title = if snap.context.is_empty() {
            "monologue".to_string()
        } else {
            format!("monologue · {}", snap.context)
        };
        let block = pane(&title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let line = match snap.thought.as_deref() {
            Some(thought) => Line::from(Span::styled(
                thought.to_string(),
                Style::default().fg(C_THOUGHT),
            )),
            None => Line::from(Span::styled("(quiet)", style_muted())),
        };
        frame.render_widget(Paragraph::new(line), inner);
    }
}
