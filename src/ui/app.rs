//! Main TUI application state and logic

use crate::grammar::{Catalog, Fractal};
use crate::turtle::{walk_segments, Point2, Ray2, Segment, Vec2};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Highest selectable level; matches the digit keys and the practical
/// memory ceiling of the catalog grammars.
pub const MAX_LEVEL: usize = 9;

/// The initial oriented ray before per-level shrink is applied: anchor at
/// (-0.5, 0.5), heading east with step length 1.4.
fn start_ray() -> Ray2 {
    Ray2::new(Vec2::new(1.4, 0.0), Point2::new(-0.5, 0.5))
}

/// The main application state
///
/// The current fractal and level live here, owned by the shell; the core
/// stays stateless apart from each grammar's own level cache.
pub struct App {
    /// All thirteen grammars with their level caches
    catalog: Catalog,

    /// Currently displayed fractal
    pub fractal: Fractal,

    /// Currently displayed expansion level (0..=9)
    pub level: usize,

    /// Walked path for the current (fractal, level); kept across a failed
    /// expansion so the screen never shows truncated output
    segments: Vec<Segment>,

    /// Length in symbols of the current expansion
    expansion_len: usize,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    status_is_error: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create the app showing `fractal` at `level`.
    pub fn new(catalog: Catalog, fractal: Fractal, level: usize) -> Self {
        let mut app = App {
            catalog,
            fractal,
            level: level.min(MAX_LEVEL),
            segments: Vec::new(),
            expansion_len: 0,
            status_message: String::from("Ready!"),
            status_is_error: false,
            should_quit: false,
        };
        app.refresh();
        app
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI: canvas on top, one-line status bar below.
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        super::panes::render_fractal_pane(
            frame,
            chunks[0],
            &self.segments,
            self.fractal,
            self.level,
        );

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            self.segments.len(),
            self.expansion_len,
            self.status_is_error,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(c @ '0'..='9') => {
                self.level = c.to_digit(10).unwrap() as usize;
                self.refresh();
            }
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                self.fractal = self.fractal.next();
                self.refresh();
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                self.fractal = self.fractal.prev();
                self.refresh();
            }
            KeyCode::Up => {
                if self.level < MAX_LEVEL {
                    self.level += 1;
                    self.refresh();
                }
            }
            KeyCode::Down => {
                if self.level > 0 {
                    self.level -= 1;
                    self.refresh();
                }
            }
            _ => {}
        }
    }

    /// Re-run the expand/walk pipeline for the current fractal and level.
    ///
    /// The initial step length is scaled by K^level so the drawn extent
    /// stays visually stable across levels. On expansion failure the last
    /// walked path is kept and the error goes to the status bar.
    fn refresh(&mut self) {
        let system = match self.catalog.get_mut(self.fractal) {
            Ok(system) => system,
            Err(e) => {
                self.status_message = e.to_string();
                self.status_is_error = true;
                return;
            }
        };

        let minus_angle = system.minus_angle();
        let plus_angle = system.plus_angle();
        let shrink = system.shrink();

        match system.expand(self.level) {
            Ok(symbols) => {
                let start = start_ray().scale(shrink.powi(self.level as i32));
                self.segments = walk_segments(symbols, start, minus_angle, plus_angle);
                self.expansion_len = symbols.len();
                self.status_message =
                    format!("{} at level {}", self.fractal.name(), self.level);
                self.status_is_error = false;
            }
            Err(e) => {
                self.status_message = e.to_string();
                self.status_is_error = true;
            }
        }
    }
}
