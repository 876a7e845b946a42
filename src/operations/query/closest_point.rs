use crate::geometry::curve::Curve;
use crate::math::distance::point_to_segment_dist_sqr;
use crate::math::{HorizontalExt, Point3, Vector3};

/// Number of equal parameter steps in the coarse scan.
const COARSE_STEPS: u32 = 16;

/// Local refinement rounds after the coarse scan.
const REFINE_ROUNDS: u32 = 4;

/// Result of a closest point query.
#[derive(Debug, Clone, Copy)]
pub struct ClosestPointResult {
    /// The closest point on the curve.
    pub position: Point3,
    /// Unit horizontal tangent at the closest point.
    pub direction: Vector3,
    /// The parameter value at the closest point.
    pub parameter: f64,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the point on a curve closest to a given point.
///
/// A coarse chord scan picks the best interval, then a few rounds of local
/// bisection refine the parameter. This is a local search: on curves that
/// fold back sharply within one coarse interval it can settle on a local
/// minimum.
pub struct ClosestPointOnCurve<'a, C: Curve> {
    curve: &'a C,
    point: Point3,
}

impl<'a, C: Curve> ClosestPointOnCurve<'a, C> {
    /// Creates a new `ClosestPointOnCurve` query.
    #[must_use]
    pub fn new(curve: &'a C, point: Point3) -> Self {
        Self { curve, point }
    }

    /// Executes the query, returning the closest point result.
    #[must_use]
    pub fn execute(&self) -> ClosestPointResult {
        let t = self.refine(self.coarse_scan());
        let position = self.curve.position(t);

        ClosestPointResult {
            position,
            direction: self.curve.tangent(t).normalize_xz(),
            parameter: t,
            distance: (self.point - position).norm(),
        }
    }

    fn coarse_scan(&self) -> f64 {
        let steps = f64::from(COARSE_STEPS);
        let mut best = 1e11;
        let mut t = 0.0;
        let mut prev = self.curve.start_position();

        for i in 1..=COARSE_STEPS {
            let current = self.curve.position(f64::from(i) / steps);
            let (dist, u) = point_to_segment_dist_sqr(&prev, &current, &self.point);
            if dist < best {
                best = dist;
                t = (f64::from(i - 1) + u) / steps;
            }
            prev = current;
        }
        t
    }

    fn refine(&self, mut t: f64) -> f64 {
        let mut delta = 1.0 / f64::from(2 * COARSE_STEPS);

        for _ in 0..REFINE_ROUNDS {
            let min = self.curve.position((t - delta).max(0.0));
            let current = self.curve.position(t);
            let max = self.curve.position((t + delta).min(1.0));

            let (min_dist, min_u) = point_to_segment_dist_sqr(&min, &current, &self.point);
            let (max_dist, max_u) = point_to_segment_dist_sqr(&current, &max, &self.point);

            t = if min_dist >= max_dist {
                (t + delta * max_u).min(1.0)
            } else {
                (t - delta * (1.0 - min_u)).max(0.0)
            };
            delta *= 0.5;
        }
        t
    }
}
