//! Bordered pane with the shell's standard title styling.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{style_border, style_title};

/// Standard pane block: dim border, bold dim title.
pub fn pane(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(style_border())
        .title(Line::from(Span::styled(title.to_string(), style_title())))
}

/// Pane with a colored badge in the top-right corner (e.g. the current
/// animation state).
pub fn pane_with_badge<'a>(title: &'a str, badge: &'a str, color: Color) -> Block<'a> {
    pane(title).title_top(
        Line::from(Span::styled(
            format!(" {} ", badge),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .right_aligned(),
    )
}
