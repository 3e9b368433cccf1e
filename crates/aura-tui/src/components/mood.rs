//! Mood component — energy and momentum meters with alert thresholds.

use ratatui::{layout::Rect, Frame};

use crate::{
    action::ComponentId,
    app_state::AppState,
    component::Component,
    widgets::{
        meter_bar::{draw_meter, energy_color, momentum_color, momentum_width},
        pane::pane_with_badge,
    },
};

pub struct Mood;

impl Mood {
    pub fn new() -> Self {
        Self
    }
}

impl Component for Mood {
    fn id(&self) -> ComponentId {
        ComponentId::Mood
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        if area.height < 3 {
            return;
        }
        let snap = &state.snapshot;
        let mood = &snap.mood;

        let label_color = momentum_color(mood.momentum_clamped(), state.ui.momentum_alert_threshold);
        let block = pane_with_badge("mood", mood.mood_label(), label_color);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let energy = mood.energy_clamped();
        if inner.height >= 1 {
            draw_meter(
                frame,
                Rect::new(inner.x, inner.y, inner.width, 1),
                "energy  ",
                energy,
                energy_color(energy, state.ui.energy_alert_threshold),
                &format!("{:>3.0}", energy),
            );
        }
        if inner.height >= 2 {
            let momentum = mood.momentum_clamped();
            draw_meter(
                frame,
                Rect::new(inner.x, inner.y + 1, inner.width, 1),
                "momentum",
                momentum_width(momentum) as f64,
                momentum_color(momentum, state.ui.momentum_alert_threshold),
                &format!("{:>+.2}", momentum),
            );
        }
    }
}
