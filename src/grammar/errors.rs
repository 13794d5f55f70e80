//! Error types for the grammar engine and catalog
//!
//! Expansion and walking are total functions over well-formed inputs, so the
//! only error conditions are a resource ceiling on expansion length and a
//! failed catalog lookup. Neither is transient; nothing is retried.

use std::fmt;

/// Errors reported by [`LSystem::expand`] and [`Catalog`] lookups.
///
/// [`LSystem::expand`]: crate::grammar::engine::LSystem::expand
/// [`Catalog`]: crate::grammar::catalog::Catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// A requested expansion level would exceed the configured length ceiling.
    ///
    /// The cache is left at the last fully computed level; no partial entry
    /// is stored. Output is never truncated.
    ExpansionTooLarge { required: usize, limit: usize },

    /// A fractal identifier did not resolve to a catalog entry.
    UnknownFractal { name: String },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::ExpansionTooLarge { required, limit } => {
                write!(
                    f,
                    "Expansion too large: next level needs {} symbols, limit is {}",
                    required, limit
                )
            }
            GrammarError::UnknownFractal { name } => {
                write!(f, "Unknown fractal '{}'", name)
            }
        }
    }
}

impl std::error::Error for GrammarError {}
