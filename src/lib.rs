//! # Introduction
//!
//! FracTTY generates plane fractal curves defined as Lindenmayer systems and
//! draws them interactively in the terminal, built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Fractal id → Grammar expansion (cached per level) → Turtle walk → Segments → Canvas
//! ```
//!
//! 1. [`grammar`] — the rewrite engine ([`grammar::LSystem`]), its error
//!    taxonomy, and the fixed catalog of thirteen named fractal definitions
//!    ([`grammar::Fractal`], [`grammar::Catalog`]).
//! 2. [`turtle`] — 2D value types ([`turtle::Ray2`], [`turtle::Segment`]) and
//!    the walk that interprets an expanded string as draw/turn instructions.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Catalog
//!
//! Box Outline, Dragon Curve, Exterior Snowflake, Hilbert I/II Curve,
//! Koch Antisnowflake/Curve/Island/Snowflake, Peano Curve,
//! Sierpinski Arrowhead/Curve/Triangle.

pub mod grammar;
pub mod turtle;
pub mod ui;
