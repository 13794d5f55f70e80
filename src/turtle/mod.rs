//! Turtle graphics: geometry value types and the symbol-string walk that
//! turns an expanded L-system into line segments.

pub mod geometry;
pub mod walk;

pub use geometry::{Point2, Ray2, Segment, Vec2};
pub use walk::{walk, walk_segments};
