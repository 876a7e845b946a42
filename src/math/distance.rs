use super::{lerp, Point3, TOLERANCE};

/// Squared distance from `point` to the segment `a`→`b`, with the fraction
/// `u ∈ [0, 1]` of the closest point along the segment.
#[must_use]
pub fn point_to_segment_dist_sqr(a: &Point3, b: &Point3, point: &Point3) -> (f64, f64) {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return ((point - a).norm_squared(), 0.0);
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let u = ((point - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    let closest = lerp(a, b, u);
    ((point - closest).norm_squared(), u)
}

/// Point on the segment `a`→`b` whose elevation equals `height`, and its
/// fraction `t` along the segment.
///
/// The fraction is not clamped, so heights outside the segment extrapolate
/// along its line. A horizontal segment yields `t = 0`.
#[must_use]
pub fn ray_position_at_height(a: &Point3, b: &Point3, height: f64) -> (Point3, f64) {
    let dy = b.y - a.y;
    let t = if dy.abs() < TOLERANCE {
        0.0
    } else {
        (height - a.y) / dy
    };
    (lerp(a, b, t), t)
}
