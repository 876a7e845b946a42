use crate::math::{lerp, Point3, Vector3, TOLERANCE};

use super::Curve;

/// A straight path between two points.
///
/// Each end may be limited (a hard bound at `t = 0` / `t = 1`) or open, in
/// which case the straight extends to infinity past that end. A straight
/// with both ends open is a full line; with one end open, a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StraightTrajectory {
    start: Point3,
    end: Point3,
    start_limited: bool,
    end_limited: bool,
}

impl StraightTrajectory {
    /// Creates a segment bounded on both ends.
    #[must_use]
    pub fn new(start: Point3, end: Point3) -> Self {
        Self::with_limits(start, end, true, true)
    }

    /// Creates a straight with explicit end bounds.
    #[must_use]
    pub fn with_limits(start: Point3, end: Point3, start_limited: bool, end_limited: bool) -> Self {
        Self {
            start,
            end,
            start_limited,
            end_limited,
        }
    }

    /// Whether `t = 0` is a hard bound.
    #[must_use]
    pub fn start_limited(&self) -> bool {
        self.start_limited
    }

    /// Whether `t = 1` is a hard bound.
    #[must_use]
    pub fn end_limited(&self) -> bool {
        self.end_limited
    }

    /// Unit direction from start to end, or zero for a collapsed segment.
    #[must_use]
    pub fn direction(&self) -> Vector3 {
        (self.end - self.start)
            .try_normalize(TOLERANCE)
            .unwrap_or_else(Vector3::zeros)
    }

    /// Whether parameter `t` lies on this straight, respecting open ends.
    #[must_use]
    pub fn contains_param(&self, t: f64) -> bool {
        let min = if self.start_limited { 0.0 } else { f64::MIN };
        let max = if self.end_limited { 1.0 } else { f64::MAX };
        (min..=max).contains(&t)
    }
}

impl Curve for StraightTrajectory {
    fn position(&self, t: f64) -> Point3 {
        lerp(&self.start, &self.end, t)
    }

    fn tangent(&self, _t: f64) -> Vector3 {
        self.end - self.start
    }

    /// The restriction is always a bounded segment.
    fn cut(&self, t0: f64, t1: f64) -> Self {
        debug_assert!(t0 <= t1, "cut range reversed: {t0} > {t1}");
        Self::new(self.position(t0), self.position(t1))
    }

    fn divide(&self) -> (Self, Self) {
        (self.cut(0.0, 0.5), self.cut(0.5, 1.0))
    }

    fn magnitude(&self) -> f64 {
        self.length()
    }

    fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    fn invert(&self) -> Self {
        Self::with_limits(self.end, self.start, self.end_limited, self.start_limited)
    }

    fn start_position(&self) -> Point3 {
        self.start
    }

    fn end_position(&self) -> Point3 {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn segment_rejects_parameters_outside_unit_range() {
        let s = StraightTrajectory::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert!(s.contains_param(0.0));
        assert!(s.contains_param(1.0));
        assert!(!s.contains_param(-0.1));
        assert!(!s.contains_param(1.1));
    }

    #[test]
    fn ray_extends_past_open_end() {
        let ray = StraightTrajectory::with_limits(
            Point3::origin(),
            Point3::new(1.0, 0.0, 0.0),
            true,
            false,
        );
        assert!(ray.contains_param(250.0));
        assert!(!ray.contains_param(-0.5));
        assert_abs_diff_eq!(ray.position(3.0), Point3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn invert_swaps_limits() {
        let ray = StraightTrajectory::with_limits(
            Point3::origin(),
            Point3::new(0.0, 0.0, 2.0),
            true,
            false,
        );
        let inverted = ray.invert();
        assert!(!inverted.start_limited());
        assert!(inverted.end_limited());
        assert_eq!(inverted.start_position(), ray.end_position());
    }

    #[test]
    fn cut_is_bounded() {
        let line = StraightTrajectory::with_limits(
            Point3::origin(),
            Point3::new(4.0, 0.0, 0.0),
            false,
            false,
        );
        let cut = line.cut(0.25, 0.5);
        assert!(cut.start_limited() && cut.end_limited());
        assert_abs_diff_eq!(cut.length(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(cut.direction(), Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-12);
    }
}
