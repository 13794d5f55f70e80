//! The turtle interpreter: a single left-to-right pass over an expanded
//! symbol string, emitting one [`Segment`] per `'F'`.

use crate::turtle::geometry::{Ray2, Segment};

/// Walk `symbols` starting from `start`, emitting each drawn segment to
/// `emit` in order.
///
/// - `'-'` rotates the turtle counter-clockwise by `minus_angle`.
/// - `'+'` rotates it clockwise by `plus_angle`.
/// - `'F'` emits a segment from the anchor to anchor + direction, then
///   advances the anchor to the segment's end.
/// - Every other symbol has no geometric effect. Grammar-internal
///   non-terminals (`X`, `Y`, `L`, `R`) exist only to seed rewriting and
///   must pass through silently.
///
/// The minus/ccw and plus/cw pairing is asymmetric on purpose: several
/// catalog grammars use distinct minus and plus angles. Output is
/// deterministic in the inputs; the walk is linear in `symbols` and never
/// recurses.
pub fn walk(
    symbols: &str,
    start: Ray2,
    minus_angle: f64,
    plus_angle: f64,
    mut emit: impl FnMut(Segment),
) {
    let mut current = start;
    for sym in symbols.chars() {
        match sym {
            '-' => current = current.rotate_ccw(minus_angle),
            '+' => current = current.rotate_cw(plus_angle),
            'F' => {
                emit(Segment::new(current.anchor, current.dest()));
                current = current.advance();
            }
            _ => {}
        }
    }
}

/// [`walk`], collecting the emitted segments into a `Vec`.
pub fn walk_segments(symbols: &str, start: Ray2, minus_angle: f64, plus_angle: f64) -> Vec<Segment> {
    let mut segments = Vec::new();
    walk(symbols, start, minus_angle, plus_angle, |s| segments.push(s));
    segments
}
