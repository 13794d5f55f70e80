//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state (current fractal, current level) and the
//!   keyboard event loop
//! - **[`panes`]** — stateless render functions for the canvas and status bar
//! - **[`theme`]** — centralized color palette
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Catalog`] and call [`App::run`] to start the event loop.
//!
//! [`Catalog`]: crate::grammar::Catalog
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
