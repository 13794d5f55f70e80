//! The fixed catalog of thirteen named fractal grammars
//!
//! Pure data: each [`Fractal`] variant maps to a literal L-system definition
//! (base string, rewrite rules, turn angles, shrink factor). The catalog is
//! built once at startup and read-only thereafter; only each grammar's own
//! level cache mutates.

use std::f64::consts::PI;

use rustc_hash::FxHashMap;

use crate::grammar::engine::LSystem;
use crate::grammar::errors::GrammarError;

/// Identifier for one of the thirteen catalog fractals.
///
/// A closed enumeration rather than string keys, so the catalog is
/// exhaustive and cycling through it is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fractal {
    BoxOutline,
    DragonCurve,
    ExteriorSnowflake,
    HilbertICurve,
    HilbertIICurve,
    KochAntisnowflake,
    KochCurve,
    KochIsland,
    KochSnowflake,
    PeanoCurve,
    SierpinskiArrowhead,
    SierpinskiCurve,
    SierpinskiTriangle,
}

impl Fractal {
    /// All fractals, in display and cycling order.
    pub const ALL: [Fractal; 13] = [
        Fractal::BoxOutline,
        Fractal::DragonCurve,
        Fractal::ExteriorSnowflake,
        Fractal::HilbertICurve,
        Fractal::HilbertIICurve,
        Fractal::KochAntisnowflake,
        Fractal::KochCurve,
        Fractal::KochIsland,
        Fractal::KochSnowflake,
        Fractal::PeanoCurve,
        Fractal::SierpinskiArrowhead,
        Fractal::SierpinskiCurve,
        Fractal::SierpinskiTriangle,
    ];

    /// Human-readable name shown in the overlay and status bar.
    pub fn name(self) -> &'static str {
        match self {
            Fractal::BoxOutline => "Box Outline",
            Fractal::DragonCurve => "Dragon Curve",
            Fractal::ExteriorSnowflake => "Exterior Snowflake",
            Fractal::HilbertICurve => "Hilbert I Curve",
            Fractal::HilbertIICurve => "Hilbert II Curve",
            Fractal::KochAntisnowflake => "Koch Antisnowflake",
            Fractal::KochCurve => "Koch Curve",
            Fractal::KochIsland => "Koch Island",
            Fractal::KochSnowflake => "Koch Snowflake",
            Fractal::PeanoCurve => "Peano Curve",
            Fractal::SierpinskiArrowhead => "Sierpinski Arrowhead",
            Fractal::SierpinskiCurve => "Sierpinski Curve",
            Fractal::SierpinskiTriangle => "Sierpinski Triangle",
        }
    }

    /// The next fractal in catalog order, wrapping at the end.
    pub fn next(self) -> Self {
        let i = Fractal::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Fractal::ALL[(i + 1) % Fractal::ALL.len()]
    }

    /// The previous fractal in catalog order, wrapping at the start.
    pub fn prev(self) -> Self {
        let i = Fractal::ALL.iter().position(|&f| f == self).unwrap_or(0);
        Fractal::ALL[(i + Fractal::ALL.len() - 1) % Fractal::ALL.len()]
    }

    /// Resolve a command-line name, ignoring case and separators, so
    /// `koch-snowflake`, `KochSnowflake`, and `"koch snowflake"` all match.
    pub fn from_arg(arg: &str) -> Option<Fractal> {
        let wanted = normalize(arg);
        Fractal::ALL
            .iter()
            .copied()
            .find(|f| normalize(f.name()) == wanted)
    }

    /// Build this fractal's L-system definition.
    pub fn grammar(self) -> LSystem {
        match self {
            Fractal::BoxOutline => {
                let rules = rules(&[('F', "F+F-F-F+F")]);
                LSystem::new("F+F+F+F", rules, PI / 2.0, PI / 2.0)
            }
            Fractal::DragonCurve => {
                let rules = rules(&[('X', "X+YF+"), ('Y', "-FX-Y")]);
                LSystem::with_shrink("YF", rules, PI / 2.0, PI / 2.0, 0.7)
            }
            Fractal::ExteriorSnowflake => {
                let rules = rules(&[('F', "F+F-F+F")]);
                LSystem::new("F+F+F+F+F+F", rules, 2.0 * PI / 3.0, PI / 3.0)
            }
            Fractal::HilbertICurve => {
                let rules = rules(&[('L', "+RF-LFL-FR+"), ('R', "-LF+RFR+FL-")]);
                LSystem::with_shrink("L", rules, PI / 2.0, PI / 2.0, 0.5)
            }
            Fractal::HilbertIICurve => {
                let rules = rules(&[
                    ('X', "XFYFX+F+YFXFY-F-XFYFX"),
                    ('Y', "YFXFY-F-XFYFX+F+YFXFY"),
                ]);
                LSystem::new("X", rules, PI / 2.0, PI / 2.0)
            }
            Fractal::KochAntisnowflake => {
                let rules = rules(&[('F', "F+F-F+F")]);
                LSystem::new("F++F++F++F", rules, 2.0 * PI / 3.0, PI / 3.0)
            }
            Fractal::KochCurve => {
                let rules = rules(&[('F', "F+F-F-F+F")]);
                LSystem::new("F", rules, PI / 2.0, PI / 2.0)
            }
            Fractal::KochIsland => {
                let rules = rules(&[('F', "F+F-F-FF+F+F-F")]);
                LSystem::with_shrink("F+F+F+F", rules, PI / 2.0, PI / 2.0, 0.25)
            }
            Fractal::KochSnowflake => {
                let rules = rules(&[('F', "F-F++F-F")]);
                LSystem::new("F++F++F", rules, PI / 3.0, PI / 3.0)
            }
            Fractal::PeanoCurve => {
                let rules = rules(&[('F', "F-F+F+FF+F+F+FF")]);
                LSystem::new("F", rules, PI / 2.0, PI / 2.0)
            }
            Fractal::SierpinskiArrowhead => {
                let rules = rules(&[('X', "YF+XF+Y"), ('Y', "XF-YF-X")]);
                LSystem::with_shrink("YF", rules, PI / 3.0, PI / 3.0, 0.5)
            }
            Fractal::SierpinskiCurve => {
                let rules = rules(&[('F', "F+F-F+F-F")]);
                LSystem::with_shrink("F+F+F+F", rules, PI / 2.0, PI / 2.0, 0.25)
            }
            Fractal::SierpinskiTriangle => {
                let rules = rules(&[('F', "FF"), ('X', "++FXF--FXF--FXF++")]);
                LSystem::with_shrink("FXF++FF++FF", rules, PI / 3.0, PI / 3.0, 0.5)
            }
        }
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn rules(pairs: &[(char, &str)]) -> FxHashMap<char, String> {
    pairs
        .iter()
        .map(|&(sym, replacement)| (sym, replacement.to_string()))
        .collect()
}

/// The full catalog: one [`LSystem`] per [`Fractal`], each owning its own
/// level cache.
pub struct Catalog {
    systems: FxHashMap<Fractal, LSystem>,
}

impl Catalog {
    /// Build all thirteen grammars.
    pub fn new() -> Self {
        let systems = Fractal::ALL.iter().map(|&f| (f, f.grammar())).collect();
        Catalog { systems }
    }

    /// Look up a grammar. A miss is reported as [`GrammarError::UnknownFractal`],
    /// never silently defaulted.
    pub fn get_mut(&mut self, fractal: Fractal) -> Result<&mut LSystem, GrammarError> {
        self.systems
            .get_mut(&fractal)
            .ok_or_else(|| GrammarError::UnknownFractal {
                name: fractal.name().to_string(),
            })
    }

    /// Expand `fractal` to `depth`, growing its cache as needed.
    pub fn expand(&mut self, fractal: Fractal, depth: usize) -> Result<&str, GrammarError> {
        self.get_mut(fractal)?.expand(depth)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}
