//! Canvas pane: draws the walked fractal path plus the name/level overlay.

use crate::grammar::Fractal;
use crate::turtle::Segment;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols,
    text::Span,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders,
    },
    Frame,
};

/// World-coordinate bounds of the drawing plane. Chosen to frame the
/// catalog's initial ray (anchor (-0.5, 0.5), step 1.4) the way the
/// original 640x480 viewport did.
pub const X_BOUNDS: [f64; 2] = [-2.8, 2.8];
pub const Y_BOUNDS: [f64; 2] = [-2.1, 2.1];

/// Render the fractal canvas.
///
/// `segments` is the already-walked path for the current fractal and level;
/// this function only draws, it never expands.
pub fn render_fractal_pane(
    frame: &mut Frame,
    area: Rect,
    segments: &[Segment],
    fractal: Fractal,
    level: usize,
) {
    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border))
                .title(" fractty "),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds(X_BOUNDS)
        .y_bounds(Y_BOUNDS)
        .paint(|ctx| {
            for seg in segments {
                ctx.draw(&CanvasLine {
                    x1: seg.start.x,
                    y1: seg.start.y,
                    x2: seg.end.x,
                    y2: seg.end.y,
                    color: DEFAULT_THEME.curve,
                });
            }

            // Overlay text at the original's positions: name near the
            // bottom, level near the top.
            ctx.print(
                0.0,
                -2.0,
                Span::styled(fractal.name(), Style::default().fg(DEFAULT_THEME.overlay)),
            );
            ctx.print(
                0.0,
                1.9,
                Span::styled(
                    format!("Level {}", level),
                    Style::default().fg(DEFAULT_THEME.overlay),
                ),
            );
        });

    frame.render_widget(canvas, area);
}
