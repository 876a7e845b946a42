//! Line intersection on the horizontal plane.
//!
//! All routines project onto `(x, z)` and ignore elevation.

use super::{Point3, TOLERANCE};

/// Parametric line-line intersection on the XZ plane.
///
/// Given lines `a + p * (b - a)` and `c + q * (d - c)`, returns `(p, q)` if
/// they are not parallel. The parameters are unbounded.
#[must_use]
pub fn line_line_intersect_xz(a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> Option<(f64, f64)> {
    let d1x = b.x - a.x;
    let d1z = b.z - a.z;
    let d2x = d.x - c.x;
    let d2z = d.z - c.z;

    let cross = d1x * d2z - d1z * d2x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let dx = c.x - a.x;
    let dz = c.z - a.z;
    let p = (dx * d2z - dz * d2x) / cross;
    let q = (dx * d1z - dz * d1x) / cross;
    Some((p, q))
}

/// Bounded segment-segment intersection on the XZ plane.
///
/// Returns `(p, q)` only when both parameters lie in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_xz(
    a: &Point3,
    b: &Point3,
    c: &Point3,
    d: &Point3,
) -> Option<(f64, f64)> {
    line_line_intersect_xz(a, b, c, d).filter(|&(p, q)| is_unit_param(p) && is_unit_param(q))
}

/// Whether `t` lies in the closed unit interval.
#[must_use]
pub fn is_unit_param(t: f64) -> bool {
    (0.0..=1.0).contains(&t)
}
