//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `message` carries either a neutral status or an expansion error;
/// `is_error` picks the badge color.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    segment_count: usize,
    expansion_len: usize,
    is_error: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let badge = format!(" {} segs | {} syms ", segment_count, expansion_len);
    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            message,
            Style::default().fg(if is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let right_spans = vec![Span::styled(
        "+/- fractal | 0-9 level | \u{2191}\u{2193} level | \u{2190}\u{2192} fractal | q quit ",
        Style::default().fg(DEFAULT_THEME.secondary),
    )];

    frame.render_widget(Paragraph::new(Line::from(left_spans)), layout[0]);
    frame.render_widget(
        Paragraph::new(Line::from(right_spans)).alignment(Alignment::Right),
        layout[1],
    );
}
