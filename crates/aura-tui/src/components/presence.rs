//! Presence component — the animated orb and status label.
//!
//! Pure projection of the snapshot's animation state: the orb's frame set
//! is chosen by `AnimationState`, the frame index by the shared animation
//! counter the App advances on its UI tick. No per-component timers.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use aura_proto::model::AnimationState;

use crate::{
    action::ComponentId,
    app_state::AppState,
    component::Component,
    theme::{C_IDLE, C_LISTENING, C_SPEAKING, C_THINKING, style_secondary},
    widgets::pane::pane_with_badge,
};

const FRAMES_IDLE: &[&str] = &["·", "∘", "○", "∘"];
const FRAMES_LISTENING: &[&str] = &["( ◉ )", "(( ◉ ))", "((( ◉ )))", "(( ◉ ))"];
const FRAMES_THINKING: &[&str] = &["⠋ ◌ ⠋", "⠙ ◌ ⠙", "⠸ ◌ ⠸", "⠴ ◌ ⠴", "⠦ ◌ ⠦", "⠇ ◌ ⠇"];
const FRAMES_SPEAKING: &[&str] = &["◉", "◉ )", "◉ ))", "◉ )))", "◉ ))", "◉ )"];

fn frames_for(anim: AnimationState) -> &'static [&'static str] {
    match anim {
        AnimationState::Idle => FRAMES_IDLE,
        AnimationState::Listening => FRAMES_LISTENING,
        AnimationState::Thinking => FRAMES_THINKING,
        AnimationState::Speaking => FRAMES_SPEAKING,
    }
}

pub fn state_color(anim: AnimationState) -> ratatui::style::Color {
    match anim {
        AnimationState::Idle => C_IDLE,
        AnimationState::Listening => C_LISTENING,
        AnimationState::Thinking => C_THINKING,
        AnimationState::Speaking => C_SPEAKING,
    }
}

pub struct Presence;

impl Presence {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Presence {
    fn id(&self) -> ComponentId {
        ComponentId::Presence
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if area.height < 3 {
            return;
        }
        let snap = &state.snapshot;
        let color = state_color(snap.animation);

        let block = pane_with_badge("presence", snap.animation.label(), color);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let frames = frames_for(snap.animation);
        let orb = frames[state.anim_frame % frames.len()];

        let mut lines = vec![centered(
            inner.width,
            orb,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];
        if inner.height >= 2 {
            let status = if snap.live.status.is_empty() {
                "waiting for agent"
            } else {
                snap.live.status.as_str()
            };
            lines.push(centered(inner.width, status, style_secondary()));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn centered(width: u16, text: &str, style: Style) -> Line<'static> {
    let pad = (width as usize).saturating_sub(text.width()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text.to_string(), style),
    ])
}
