use crate::math::{angle_deg, lerp, Point3, Vector3};
use crate::operations::query::{BezierLength, ClosestPointOnCurve, ClosestPointResult};

use super::Curve;

/// A cubic Bézier curve in 3D space.
///
/// `a` and `d` are the endpoints; `b` and `c` are the tangent handles.
///
/// ```text
/// B(t) = (1-t)³a + 3(1-t)²t b + 3(1-t)t² c + t³d
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Start point.
    pub a: Point3,
    /// Start handle.
    pub b: Point3,
    /// End handle.
    pub c: Point3,
    /// End point.
    pub d: Point3,
}

impl CubicBezier {
    /// Creates a new cubic Bézier curve.
    #[must_use]
    pub const fn new(a: Point3, b: Point3, c: Point3, d: Point3) -> Self {
        Self { a, b, c, d }
    }

    /// A straight Bézier from `start` to `end`, handles at the chord's thirds.
    #[must_use]
    pub fn from_straight(start: Point3, end: Point3) -> Self {
        Self::new(
            start,
            lerp(&start, &end, 1.0 / 3.0),
            lerp(&start, &end, 2.0 / 3.0),
            end,
        )
    }

    /// Splits at `t` with de Casteljau's algorithm, giving exact halves.
    #[must_use]
    pub fn split_at(&self, t: f64) -> (Self, Self) {
        let ab = lerp(&self.a, &self.b, t);
        let bc = lerp(&self.b, &self.c, t);
        let cd = lerp(&self.c, &self.d, t);
        let abc = lerp(&ab, &bc, t);
        let bcd = lerp(&bc, &cd, t);
        let mid = lerp(&abc, &bcd, t);

        (
            Self::new(self.a, ab, abc, mid),
            Self::new(mid, bcd, cd, self.d),
        )
    }

    /// Straight-line distance between the endpoints.
    #[must_use]
    pub fn chord_length(&self) -> f64 {
        (self.d - self.a).norm()
    }

    /// How far the curve still is from straight, in degrees.
    ///
    /// `0` when the two handles point exactly away from each other.
    #[must_use]
    pub fn delta_angle(&self) -> f64 {
        180.0 - angle_deg(&(self.b - self.a), &(self.c - self.d))
    }

    /// Closest point on the curve to `point`.
    #[must_use]
    pub fn closest_position(&self, point: &Point3) -> Point3 {
        self.closest(point).position
    }

    /// Horizontal direction of the curve at the point closest to `point`.
    #[must_use]
    pub fn closest_direction(&self, point: &Point3) -> Vector3 {
        self.closest(point).direction
    }

    fn closest(&self, point: &Point3) -> ClosestPointResult {
        ClosestPointOnCurve::new(self, *point).execute()
    }
}

impl Curve for CubicBezier {
    fn position(&self, t: f64) -> Point3 {
        let s = 1.0 - t;
        Point3::from(
            self.a.coords * (s * s * s)
                + self.b.coords * (3.0 * s * s * t)
                + self.c.coords * (3.0 * s * t * t)
                + self.d.coords * (t * t * t),
        )
    }

    fn tangent(&self, t: f64) -> Vector3 {
        let s = 1.0 - t;
        (self.b - self.a) * (3.0 * s * s)
            + (self.c - self.b) * (6.0 * s * t)
            + (self.d - self.c) * (3.0 * t * t)
    }

    fn cut(&self, t0: f64, t1: f64) -> Self {
        debug_assert!(t0 <= t1, "cut range reversed: {t0} > {t1}");
        let a = self.position(t0);
        let d = self.position(t1);
        let scale = (t1 - t0) / 3.0;
        Self::new(
            a,
            a + self.tangent(t0) * scale,
            d - self.tangent(t1) * scale,
            d,
        )
    }

    fn divide(&self) -> (Self, Self) {
        self.split_at(0.5)
    }

    /// Sum of the chords of both halves.
    fn magnitude(&self) -> f64 {
        let (first, second) = self.divide();
        first.chord_length() + second.chord_length()
    }

    fn length(&self) -> f64 {
        BezierLength::new(self).execute()
    }

    fn invert(&self) -> Self {
        Self::new(self.d, self.c, self.b, self.a)
    }

    fn split(&self, t: f64) -> (Self, Self) {
        self.split_at(t)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn arch() -> CubicBezier {
        CubicBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 4.0),
            Point3::new(6.0, 0.0, 4.0),
            Point3::new(6.0, 0.0, 0.0),
        )
    }

    #[test]
    fn endpoints_and_midpoint() {
        let curve = arch();
        assert_eq!(curve.position(0.0), curve.a);
        assert_eq!(curve.position(1.0), curve.d);
        assert_abs_diff_eq!(curve.position(0.5), Point3::new(3.0, 0.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn tangent_matches_handles_at_ends() {
        let curve = arch();
        assert_abs_diff_eq!(curve.tangent(0.0), (curve.b - curve.a) * 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.tangent(1.0), (curve.d - curve.c) * 3.0, epsilon = 1e-12);
    }

    #[test]
    fn divide_halves_trace_the_curve() {
        let curve = arch();
        let (first, second) = curve.divide();
        assert_eq!(first.a, curve.a);
        assert_eq!(second.d, curve.d);
        assert_eq!(first.d, second.a);
        assert_abs_diff_eq!(first.d, curve.position(0.5), epsilon = 1e-12);
        assert_abs_diff_eq!(first.position(0.5), curve.position(0.25), epsilon = 1e-12);
        assert_abs_diff_eq!(second.position(0.5), curve.position(0.75), epsilon = 1e-12);
    }

    #[test]
    fn cut_matches_split() {
        let curve = arch();
        let (head, _) = curve.split_at(0.3);
        let cut = curve.cut(0.0, 0.3);
        assert_abs_diff_eq!(cut.b, head.b, epsilon = 1e-12);
        assert_abs_diff_eq!(cut.c, head.c, epsilon = 1e-12);
    }

    #[test]
    fn magnitude_is_two_chords() {
        let curve = arch();
        let mid = curve.position(0.5);
        let expected = (mid - curve.a).norm() + (curve.d - mid).norm();
        assert_abs_diff_eq!(curve.magnitude(), expected, epsilon = 1e-12);
    }

    #[test]
    fn straight_bezier_has_no_bend() {
        let curve = CubicBezier::from_straight(Point3::new(1.0, 0.0, 1.0), Point3::new(4.0, 0.0, 5.0));
        assert_abs_diff_eq!(curve.delta_angle(), 0.0, epsilon = 1e-4);
        assert_abs_diff_eq!(curve.length(), 5.0, epsilon = 1e-9);
        assert_abs_diff_eq!(curve.position(0.5), Point3::new(2.5, 0.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn arch_bends_a_half_turn() {
        // Handles point the same way: fully folded back.
        assert_abs_diff_eq!(arch().delta_angle(), 180.0, epsilon = 1e-9);
    }

    #[test]
    fn closest_helpers_on_apex() {
        let curve = arch();
        let query = Point3::new(3.0, 0.0, 10.0);
        assert_abs_diff_eq!(curve.closest_position(&query), Point3::new(3.0, 0.0, 3.0), epsilon = 1e-3);
        let dir = curve.closest_direction(&query);
        assert_abs_diff_eq!(dir, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-3);
    }
}
