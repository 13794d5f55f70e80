//! The L-system rewrite engine
//!
//! An [`LSystem`] owns a base string, a symbol rewrite table, a pair of turn
//! angles, and a per-iteration shrink factor. [`LSystem::expand`] returns the
//! string after `depth` rewrite passes, caching every level it computes so no
//! level is ever generated twice.
//!
//! In any representation string, `'+'` means turn clockwise and `'-'` means
//! turn counter-clockwise during walking; `'F'` means move forward. All other
//! symbols are ignored by the walk and exist only to seed future rewrites.
//! The rewrite step itself treats every symbol uniformly: a symbol with no
//! rule is a terminal and rewrites to itself.

use rustc_hash::FxHashMap;

use crate::grammar::errors::GrammarError;

/// Default per-level length ceiling, in symbols.
///
/// Expansion length grows combinatorially with depth; for the catalog
/// grammars the practical ceiling is around level 9-10. The limit exists so a
/// runaway request fails loudly instead of exhausting memory.
pub const DEFAULT_MAX_LEVEL_LEN: usize = 64 * 1024 * 1024;

/// A Lindenmayer system with a lazily grown, append-only level cache.
///
/// Level 0 is the base string; level *i* is exactly one rewrite pass over
/// level *i-1*. The cache is the only mutable state; everything else is fixed
/// at construction. `expand` takes `&mut self`, so sharing one `LSystem`
/// across threads requires an external `Mutex` (or one instance per thread).
pub struct LSystem {
    /// Rewrite table. A symbol absent from the table is a terminal.
    rules: FxHashMap<char, String>,

    /// Cached expansions, index = level. Invariant: never shrinks, entries
    /// are never recomputed.
    levels: Vec<String>,

    /// Angle in radians turned counter-clockwise on `'-'`.
    minus_turn: f64,

    /// Angle in radians turned clockwise on `'+'`.
    plus_turn: f64,

    /// Per-iteration step shrink factor K, in (0, 1].
    shrink: f64,

    /// Ceiling on the length of any single cached level.
    max_level_len: usize,

    /// Number of rewrite passes performed so far (one per computed level).
    rewrite_passes: u64,
}

impl LSystem {
    /// Create an L-system with the default shrink factor K = 1/3.
    pub fn new(
        base: impl Into<String>,
        rules: FxHashMap<char, String>,
        minus_turn: f64,
        plus_turn: f64,
    ) -> Self {
        Self::with_shrink(base, rules, minus_turn, plus_turn, 1.0 / 3.0)
    }

    /// Create an L-system with an explicit shrink factor.
    pub fn with_shrink(
        base: impl Into<String>,
        rules: FxHashMap<char, String>,
        minus_turn: f64,
        plus_turn: f64,
        shrink: f64,
    ) -> Self {
        LSystem {
            rules,
            levels: vec![base.into()],
            minus_turn,
            plus_turn,
            shrink,
            max_level_len: DEFAULT_MAX_LEVEL_LEN,
            rewrite_passes: 0,
        }
    }

    /// Override the per-level length ceiling.
    pub fn with_max_level_len(mut self, max_level_len: usize) -> Self {
        self.max_level_len = max_level_len;
        self
    }

    /// Return the representation after `depth` rewrite passes.
    ///
    /// Already cached levels are returned directly with no recomputation;
    /// missing levels are computed in order and appended to the cache. Depth
    /// is unbounded by contract (`usize` makes negative depth
    /// unrepresentable); what bounds it in practice is the length ceiling —
    /// if the next level would exceed it, this returns
    /// [`GrammarError::ExpansionTooLarge`] and the cache keeps only fully
    /// computed levels.
    pub fn expand(&mut self, depth: usize) -> Result<&str, GrammarError> {
        while self.levels.len() <= depth {
            let next = self.rewrite_once(&self.levels[self.levels.len() - 1])?;
            self.levels.push(next);
            self.rewrite_passes += 1;
        }
        Ok(&self.levels[depth])
    }

    /// One rewrite pass: scan `tape` symbol-by-symbol, substituting each
    /// symbol's rule (or the symbol itself if it has none).
    fn rewrite_once(&self, tape: &str) -> Result<String, GrammarError> {
        // Size the output up front; also the overflow check, so a too-large
        // level is rejected before any allocation.
        let required: usize = tape
            .chars()
            .map(|sym| match self.rules.get(&sym) {
                Some(replacement) => replacement.len(),
                None => sym.len_utf8(),
            })
            .sum();

        if required > self.max_level_len {
            return Err(GrammarError::ExpansionTooLarge {
                required,
                limit: self.max_level_len,
            });
        }

        let mut next = String::with_capacity(required);
        for sym in tape.chars() {
            match self.rules.get(&sym) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(sym),
            }
        }
        Ok(next)
    }

    /// The angle turned counter-clockwise on `'-'`, in radians.
    pub fn minus_angle(&self) -> f64 {
        self.minus_turn
    }

    /// The angle turned clockwise on `'+'`, in radians.
    pub fn plus_angle(&self) -> f64 {
        self.plus_turn
    }

    /// The per-iteration shrink factor K.
    ///
    /// Step length at level `n` is `K.powi(n)` times the base step, keeping
    /// the rendered extent roughly constant across levels. Sierpinski
    /// triangle = 0.5, snowflakes = 1/3, etc.
    pub fn shrink(&self) -> f64 {
        self.shrink
    }

    /// The rewrite table.
    pub fn rules(&self) -> &FxHashMap<char, String> {
        &self.rules
    }

    /// Number of levels currently cached (always at least 1, the base).
    pub fn cached_levels(&self) -> usize {
        self.levels.len()
    }

    /// Total rewrite passes performed. Observable proof that repeated
    /// `expand` calls at a cached depth do no work.
    pub fn rewrite_passes(&self) -> u64 {
        self.rewrite_passes
    }
}
