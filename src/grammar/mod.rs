//! L-system grammars: the rewrite engine, the error taxonomy, and the fixed
//! catalog of thirteen named fractal definitions.

pub mod catalog;
pub mod engine;
pub mod errors;

pub use catalog::{Catalog, Fractal};
pub use engine::LSystem;
pub use errors::GrammarError;
