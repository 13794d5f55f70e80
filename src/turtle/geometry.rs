//! 2D value types for the turtle walk
//!
//! Everything here is a `Copy` value: rotating, scaling, or advancing a ray
//! returns a new ray rather than mutating in place.
//!
//! Rotation sign convention: clockwise by θ maps (x, y) to
//! (x·cosθ + y·sinθ, −x·sinθ + y·cosθ); counter-clockwise is the same
//! rotation with −θ.

/// A point in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Point2 { x, y }
    }

    /// Translate by a vector.
    pub fn offset(self, v: Vec2) -> Self {
        Point2::new(self.x + v.x, self.y + v.y)
    }
}

/// A direction vector; its magnitude is the turtle's current step length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Rotate clockwise by `radians`.
    pub fn rotate_cw(self, radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(cos * self.x + sin * self.y, -sin * self.x + cos * self.y)
    }

    /// Rotate counter-clockwise by `radians`.
    pub fn rotate_ccw(self, radians: f64) -> Self {
        self.rotate_cw(-radians)
    }

    /// Scale the magnitude by `k`.
    pub fn scale(self, k: f64) -> Self {
        Vec2::new(self.x * k, self.y * k)
    }

    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// The turtle: an anchor point plus a direction vector whose magnitude is
/// the current step length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    pub dir: Vec2,
    pub anchor: Point2,
}

impl Ray2 {
    pub fn new(dir: Vec2, anchor: Point2) -> Self {
        Ray2 { dir, anchor }
    }

    /// Rotate the direction clockwise; the anchor is unchanged.
    pub fn rotate_cw(self, radians: f64) -> Self {
        Ray2::new(self.dir.rotate_cw(radians), self.anchor)
    }

    /// Rotate the direction counter-clockwise; the anchor is unchanged.
    pub fn rotate_ccw(self, radians: f64) -> Self {
        Ray2::new(self.dir.rotate_ccw(radians), self.anchor)
    }

    /// Scale the step length; the anchor is unchanged.
    pub fn scale(self, k: f64) -> Self {
        Ray2::new(self.dir.scale(k), self.anchor)
    }

    /// Where a forward step from the anchor lands.
    pub fn dest(self) -> Point2 {
        self.anchor.offset(self.dir)
    }

    /// Move the anchor one step forward. The direction is unchanged.
    pub fn advance(self) -> Self {
        Ray2::new(self.dir, self.dest())
    }
}

/// One drawn line, the sole output unit of a walk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub fn new(start: Point2, end: Point2) -> Self {
        Segment { start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn cw_quarter_turn_of_unit_x() {
        let v = Vec2::new(1.0, 0.0).rotate_cw(PI / 2.0);
        assert!(close(v.x, 0.0) && close(v.y, -1.0));
    }

    #[test]
    fn ccw_is_cw_with_negated_angle() {
        let v = Vec2::new(0.3, 0.7);
        let a = v.rotate_ccw(1.1);
        let b = v.rotate_cw(-1.1);
        assert!(close(a.x, b.x) && close(a.y, b.y));
    }

    #[test]
    fn rotation_preserves_magnitude() {
        let v = Vec2::new(1.4, 0.0);
        assert!(close(v.rotate_cw(0.37).magnitude(), v.magnitude()));
    }

    #[test]
    fn advance_moves_anchor_keeps_direction() {
        let ray = Ray2::new(Vec2::new(2.0, 1.0), Point2::new(-0.5, 0.5));
        let moved = ray.advance();
        assert_eq!(moved.dir, ray.dir);
        assert!(close(moved.anchor.x, 1.5) && close(moved.anchor.y, 1.5));
    }
}
