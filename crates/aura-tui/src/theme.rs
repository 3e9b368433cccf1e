//! Color palette and style constants for the aura shell.

use ratatui::style::{Color, Modifier, Style};

// ── Color palette ─────────────────────────────────────────────────────────────

pub const C_PRIMARY: Color = Color::Rgb(210, 210, 225);
pub const C_SECONDARY: Color = Color::Rgb(115, 115, 138);
pub const C_MUTED: Color = Color::Rgb(72, 72, 88);
pub const C_PANEL_BORDER: Color = Color::Rgb(40, 40, 52);
pub const C_ACCENT: Color = Color::Rgb(120, 100, 200);

// Animation-state colors for the orb and status badge.
pub const C_LISTENING: Color = Color::Rgb(80, 200, 120);
pub const C_THINKING: Color = Color::Rgb(255, 184, 80);
pub const C_SPEAKING: Color = Color::Rgb(255, 95, 95);
pub const C_IDLE: Color = Color::Rgb(90, 90, 115);

// Meters.
pub const C_METER_OK: Color = Color::Rgb(80, 200, 120);
pub const C_METER_ALERT: Color = Color::Rgb(255, 80, 80);

// Receiving overlay.
pub const C_RECEIVE_BORDER: Color = Color::Rgb(80, 160, 220);
pub const C_RECEIVE_FG: Color = Color::Rgb(255, 200, 80);

// Thought line.
pub const C_THOUGHT: Color = Color::Rgb(80, 140, 200);

// ── Predefined styles ─────────────────────────────────────────────────────────

pub fn style_default() -> Style {
    Style::default().fg(C_PRIMARY)
}

pub fn style_secondary() -> Style {
    Style::default().fg(C_SECONDARY)
}

pub fn style_muted() -> Style {
    Style::default().fg(C_MUTED)
}

pub fn style_border() -> Style {
    Style::default().fg(C_PANEL_BORDER)
}

pub fn style_title() -> Style {
    Style::default().fg(C_SECONDARY).add_modifier(Modifier::BOLD)
}
