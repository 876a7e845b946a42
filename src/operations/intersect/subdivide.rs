use tracing::trace;

use crate::geometry::curve::{Curve, Trajectory};
use crate::math::intersect_2d::segment_segment_intersect_xz;

use super::sampling::{DomainMap, Sampling};
use super::{Intersection, IntersectParams};

/// Intersects two trajectories by refining both around chord hits.
///
/// Stops at the first crossing found: curves crossing more than once
/// report a single intersection.
pub(super) fn intersect(
    results: &mut Vec<Intersection>,
    first: &Trajectory,
    second: &Trajectory,
    params: &IntersectParams,
) -> bool {
    refine(
        results,
        first,
        second,
        DomainMap::root(),
        DomainMap::root(),
        params,
    )
}

fn refine(
    results: &mut Vec<Intersection>,
    first: &Trajectory,
    second: &Trajectory,
    first_map: DomainMap,
    second_map: DomainMap,
    params: &IntersectParams,
) -> bool {
    let first_sampling = Sampling::of(first, params);
    let second_sampling = Sampling::of(second, params);
    let first_parts = first_sampling.parts();
    let second_parts = second_sampling.parts();

    if first_parts == 1 && second_parts == 1 {
        let hit = segment_segment_intersect_xz(
            &first.start_position(),
            &first.end_position(),
            &second.start_position(),
            &second.end_position(),
        );
        return match hit {
            Some((p, q)) => {
                let first_t = first_map.to_global(p);
                let second_t = second_map.to_global(q);
                trace!(first_t, second_t, depth = first_map.depth(), "curve crossing");
                results.push(Intersection::new(first_t, second_t));
                true
            }
            None => false,
        };
    }

    for i in 0..first_parts {
        for j in 0..second_parts {
            let (a, b) = first_sampling.chord(i);
            let (c, d) = second_sampling.chord(j);
            let Some((p, q)) = segment_segment_intersect_xz(a, b, c, d) else {
                continue;
            };

            for &ii in &retry_candidates(i, first_parts, p, params) {
                for &jj in &retry_candidates(j, second_parts, q, params) {
                    let (f0, f1) = first_sampling.range(ii);
                    let (s0, s1) = second_sampling.range(jj);
                    let first_cut = first.cut(f0, f1);
                    let second_cut = second.cut(s0, s1);

                    if refine(
                        results,
                        &first_cut,
                        &second_cut,
                        first_map.refine(ii, first_parts),
                        second_map.refine(jj, second_parts),
                        params,
                    ) {
                        return true;
                    }
                }
            }
        }
    }

    false
}

/// Chord `i` of `count`, plus its neighbour when the hit at fraction `t`
/// lies close to the shared end.
fn retry_candidates(i: usize, count: usize, t: f64, params: &IntersectParams) -> Vec<usize> {
    if t < params.retry_low() && i != 0 {
        vec![i, i - 1]
    } else if t > params.retry_high() && i + 1 < count {
        vec![i, i + 1]
    } else {
        vec![i]
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::curve::{CombinedTrajectory, CubicBezier, StraightTrajectory};
    use crate::math::Point3;

    fn assert_meets(first: &Trajectory, second: &Trajectory, hit: &Intersection) {
        let a = first.position(hit.first_t());
        let b = second.position(hit.second_t());
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-2);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-2);
    }

    #[test]
    fn retry_near_chord_ends() {
        let params = IntersectParams::default();
        assert_eq!(retry_candidates(3, 10, 0.05, &params), vec![3, 2]);
        assert_eq!(retry_candidates(3, 10, 0.95, &params), vec![3, 4]);
        assert_eq!(retry_candidates(3, 10, 0.5, &params), vec![3]);
        assert_eq!(retry_candidates(0, 10, 0.05, &params), vec![0]);
        assert_eq!(retry_candidates(9, 10, 0.95, &params), vec![9]);
    }

    #[test]
    fn crossing_beziers_meet() {
        let first: Trajectory = CubicBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 6.0),
            Point3::new(6.0, 0.0, 9.0),
            Point3::new(10.0, 0.0, 10.0),
        )
        .into();
        let second: Trajectory = CubicBezier::new(
            Point3::new(0.0, 0.0, 9.0),
            Point3::new(4.0, 0.0, 8.0),
            Point3::new(9.0, 0.0, 6.0),
            Point3::new(11.0, 0.0, 1.0),
        )
        .into();

        let mut results = Vec::new();
        assert!(intersect(&mut results, &first, &second, &IntersectParams::default()));
        assert_eq!(results.len(), 1);
        assert!((0.0..=1.0).contains(&results[0].first_t()));
        assert!((0.0..=1.0).contains(&results[0].second_t()));
        assert_meets(&first, &second, &results[0]);
    }

    #[test]
    fn double_crossing_reports_first_hit_only() {
        // The flat curve cuts the hump on both flanks.
        let hump: Trajectory = CubicBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 6.0),
            Point3::new(7.0, 0.0, 6.0),
            Point3::new(10.0, 0.0, 0.0),
        )
        .into();
        let flat: Trajectory = CubicBezier::new(
            Point3::new(-1.0, 0.0, 2.0),
            Point3::new(3.0, 0.0, 2.5),
            Point3::new(7.0, 0.0, 2.5),
            Point3::new(11.0, 0.0, 2.0),
        )
        .into();

        let mut results = Vec::new();
        assert!(intersect(&mut results, &hump, &flat, &IntersectParams::default()));
        assert_eq!(results.len(), 1);
        assert!(results[0].first_t() < 0.5, "left flank is reached first");
        assert_meets(&hump, &flat, &results[0]);
    }

    #[test]
    fn separate_beziers_do_not_meet() {
        let first: Trajectory = CubicBezier::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(3.0, 0.0, 2.0),
            Point3::new(7.0, 0.0, 2.0),
            Point3::new(10.0, 0.0, 0.0),
        )
        .into();
        let second: Trajectory = CubicBezier::new(
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(3.0, 0.0, 7.0),
            Point3::new(7.0, 0.0, 7.0),
            Point3::new(10.0, 0.0, 5.0),
        )
        .into();

        let mut results = Vec::new();
        assert!(!intersect(&mut results, &first, &second, &IntersectParams::default()));
        assert!(results.is_empty());
    }

    #[test]
    fn combined_path_parameter_is_global() {
        // Chain along X at z = 0, crossed by a bezier over its second part.
        let chain: Trajectory = CombinedTrajectory::new(vec![
            StraightTrajectory::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 0.0, 0.0)).into(),
            StraightTrajectory::new(Point3::new(4.0, 0.0, 0.0), Point3::new(8.0, 0.0, 0.0)).into(),
        ])
        .unwrap_or_else(|e| panic!("{e}"))
        .into();
        let cross: Trajectory = CubicBezier::new(
            Point3::new(6.3, 0.0, -3.0),
            Point3::new(6.1, 0.0, -1.0),
            Point3::new(6.5, 0.0, 1.0),
            Point3::new(6.2, 0.0, 3.0),
        )
        .into();

        let mut results = Vec::new();
        assert!(intersect(&mut results, &chain, &cross, &IntersectParams::default()));
        let hit = &results[0];
        assert!(hit.first_t() > 0.5, "crossing lies on the second part");
        assert_meets(&chain, &cross, hit);
    }
}
