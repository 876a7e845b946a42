use crate::geometry::curve::{Curve, StraightTrajectory};
use crate::math::intersect_2d::line_line_intersect_xz;

use super::Intersection;

/// Crossing of two straights, honouring their open ends.
pub(super) fn crossing(first: &StraightTrajectory, second: &StraightTrajectory) -> Option<(f64, f64)> {
    line_line_intersect_xz(
        &first.start_position(),
        &first.end_position(),
        &second.start_position(),
        &second.end_position(),
    )
    .filter(|&(p, q)| first.contains_param(p) && second.contains_param(q))
}

pub(super) fn intersect(
    results: &mut Vec<Intersection>,
    first: &StraightTrajectory,
    second: &StraightTrajectory,
) {
    if let Some((p, q)) = crossing(first, second) {
        results.push(Intersection::new(p, q));
    }
}

/// Crossing of two straights as a single value, without trajectory
/// references.
///
/// Returns [`Intersection::not_intersect`] when they do not cross.
#[must_use]
pub fn intersect_straights(first: &StraightTrajectory, second: &StraightTrajectory) -> Intersection {
    crossing(first, second).map_or_else(Intersection::not_intersect, |(p, q)| {
        Intersection::new(p, q)
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Point3;

    #[test]
    fn diagonals_cross_in_the_middle() {
        let a = StraightTrajectory::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 10.0));
        let b = StraightTrajectory::new(Point3::new(0.0, 0.0, 10.0), Point3::new(10.0, 0.0, 0.0));
        let hit = intersect_straights(&a, &b);
        assert!(hit.is_intersect());
        assert_abs_diff_eq!(hit.first_t(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.second_t(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn short_segment_misses_but_ray_reaches() {
        let a = StraightTrajectory::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0));
        let b = StraightTrajectory::new(Point3::new(4.0, 0.0, -1.0), Point3::new(4.0, 0.0, 1.0));
        assert!(!intersect_straights(&a, &b).is_intersect());

        let ray = StraightTrajectory::with_limits(a.start_position(), a.end_position(), true, false);
        let hit = intersect_straights(&ray, &b);
        assert!(hit.is_intersect());
        assert_abs_diff_eq!(hit.first_t(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hit.second_t(), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn ray_does_not_reach_backwards() {
        let ray = StraightTrajectory::with_limits(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            true,
            false,
        );
        let b = StraightTrajectory::new(Point3::new(-3.0, 0.0, -1.0), Point3::new(-3.0, 0.0, 1.0));
        assert!(!intersect_straights(&ray, &b).is_intersect());
    }

    #[test]
    fn parallel_segments_never_cross() {
        let a = StraightTrajectory::new(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0));
        let b = StraightTrajectory::new(Point3::new(0.0, 0.0, 2.0), Point3::new(10.0, 0.0, 2.0));
        let mut results = Vec::new();
        intersect(&mut results, &a, &b);
        assert!(results.is_empty());
    }
}
