//! Smooth Unicode meter bar plus the mood → display mappings.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{C_METER_ALERT, C_METER_OK, C_SECONDARY};

/// Minimum visible momentum width — a fully depressed agent still shows a
/// sliver rather than an empty bar.
pub const MOMENTUM_MIN_WIDTH: u8 = 5;

/// Linear remap of momentum (-1..1) to a 0–100 bar width with the floor:
/// -1 → 5, 0 → 50, +1 → 100.
pub fn momentum_width(momentum: f64) -> u8 {
    let pct = ((momentum.clamp(-1.0, 1.0) + 1.0) / 2.0 * 100.0).round() as u8;
    pct.max(MOMENTUM_MIN_WIDTH)
}

/// Alert when energy is at or below the threshold (boundary: 41 normal,
/// 40 alert with the default threshold of 40).
pub fn energy_color(energy: f64, alert_threshold: f64) -> Color {
    if energy <= alert_threshold {
        C_METER_ALERT
    } else {
        C_METER_OK
    }
}

/// Momentum flips to the alert color below the (negative) threshold.
pub fn momentum_color(momentum: f64, alert_threshold: f64) -> Color {
    if momentum < alert_threshold {
        C_METER_ALERT
    } else {
        C_METER_OK
    }
}

/// Render `label  ████▌   value` with an eighth-block smooth fill.
/// `percent` is 0–100.
pub fn draw_meter(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    percent: f64,
    color: Color,
    value_label: &str,
) {
    if area.width < 12 || area.height == 0 {
        return;
    }

    let fixed = (label.len() + value_label.len() + 3) as u16;
    let bar_w = area.width.saturating_sub(fixed).max(4) as usize;

    let eighths = (percent.clamp(0.0, 100.0) / 100.0 * bar_w as f64 * 8.0) as usize;
    let full_blocks = eighths / 8;
    let partial = eighths % 8;

    const BLOCKS: [char; 9] = [' ', '▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

    let mut bar = String::with_capacity(bar_w + 4);
    for _ in 0..full_blocks {
        bar.push('█');
    }
    if full_blocks < bar_w {
        bar.push(BLOCKS[partial]);
        for _ in (full_blocks + 1)..bar_w {
            bar.push(' ');
        }
    }

    let line = Line::from(vec![
        Span::styled(format!("{} ", label), Style::default().fg(C_SECONDARY)),
        Span::styled(bar, Style::default().fg(color)),
        Span::styled(format!(" {}", value_label), Style::default().fg(C_SECONDARY)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_momentum_width_endpoints() {
        assert_eq!(momentum_width(-1.0), 5);
        assert_eq!(momentum_width(0.0), 50);
        assert_eq!(momentum_width(1.0), 100);
    }

    #[test]
    fn test_momentum_width_clamps_out_of_range() {
        assert_eq!(momentum_width(-3.0), 5);
        assert_eq!(momentum_width(2.5), 100);
    }

    #[test]
    fn test_energy_color_boundary_at_40() {
        assert_eq!(energy_color(41.0, 40.0), C_METER_OK);
        assert_eq!(energy_color(40.0, 40.0), C_METER_ALERT);
        assert_eq!(energy_color(0.0, 40.0), C_METER_ALERT);
    }

    #[test]
    fn test_momentum_color_flips_below_threshold() {
        assert_eq!(momentum_color(0.0, -0.2), C_METER_OK);
        assert_eq!(momentum_color(-0.2, -0.2), C_METER_OK);
        assert_eq!(momentum_color(-0.21, -0.2), C_METER_ALERT);
    }
}
