//! TUI pane rendering modules
//!
//! Stateless render functions for the two visible regions:
//!
//! - [`fractal`]: the canvas that draws the walked curve and the name/level
//!   overlay
//! - [`status`]: the bottom bar with counts, messages, and keybindings

pub mod fractal;
pub mod status;

pub use fractal::render_fractal_pane;
pub use status::render_status_bar;
