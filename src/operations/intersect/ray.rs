use tracing::trace;

use crate::geometry::curve::{Curve, StraightTrajectory, Trajectory};
use crate::math::intersect_2d::{is_unit_param, line_line_intersect_xz};
use crate::math::Point3;

use super::sampling::{DomainMap, Sampling};
use super::{Intersection, IntersectParams};

/// Intersects a curved trajectory with a straight.
///
/// Only the curve is subdivided; the straight is tested whole against each
/// chord, open ends included. Every chord that hits is refined, so several
/// crossings can be reported. With `invert` the curve is the query's first
/// operand and its parameter goes into `first_t`.
pub(super) fn intersect(
    results: &mut Vec<Intersection>,
    line: &StraightTrajectory,
    curve: &Trajectory,
    invert: bool,
    params: &IntersectParams,
) {
    refine(results, line, curve, invert, DomainMap::root(), params);
}

fn refine(
    results: &mut Vec<Intersection>,
    line: &StraightTrajectory,
    curve: &Trajectory,
    invert: bool,
    map: DomainMap,
    params: &IntersectParams,
) {
    let sampling = Sampling::of(curve, params);
    let parts = sampling.parts();

    if parts > 1 {
        for i in 0..parts {
            let (start, end) = sampling.chord(i);
            if chord_crossing(line, start, end).is_some() {
                let (t0, t1) = sampling.range(i);
                let cut = curve.cut(t0, t1);
                refine(results, line, &cut, invert, map.refine(i, parts), params);
            }
        }
    } else if let Some((p, q)) =
        chord_crossing(line, &curve.start_position(), &curve.end_position())
    {
        let q = map.to_global(q);
        trace!(line_t = p, curve_t = q, depth = map.depth(), "straight crossing");
        results.push(if invert {
            Intersection::new(q, p)
        } else {
            Intersection::new(p, q)
        });
    }
}

/// `(line_t, chord_t)` where the chord `start`→`end` meets the straight.
fn chord_crossing(line: &StraightTrajectory, start: &Point3, end: &Point3) -> Option<(f64, f64)> {
    line_line_intersect_xz(&line.start_position(), &line.end_position(), start, end)
        .filter(|&(p, q)| line.contains_param(p) && is_unit_param(q))
}
