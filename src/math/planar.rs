//! Helpers for vectors living on the horizontal plane.
//!
//! The world is Y-up; "planar" operations act on the X and Z components and
//! leave elevation untouched.

use super::{Vector2, Vector3, TOLERANCE};

/// Rotations within the horizontal plane.
pub trait PlanarVector: Sized {
    /// Rotates by a right angle.
    #[must_use]
    fn turn_90(&self, clockwise: bool) -> Self;

    /// Rotates by `angle` radians.
    #[must_use]
    fn turn_rad(&self, angle: f64, clockwise: bool) -> Self;

    /// Rotates by `angle` degrees.
    #[must_use]
    fn turn_deg(&self, angle: f64, clockwise: bool) -> Self {
        self.turn_rad(angle.to_radians(), clockwise)
    }
}

impl PlanarVector for Vector2 {
    fn turn_90(&self, clockwise: bool) -> Self {
        if clockwise {
            Vector2::new(self.y, -self.x)
        } else {
            Vector2::new(-self.y, self.x)
        }
    }

    fn turn_rad(&self, angle: f64, clockwise: bool) -> Self {
        let angle = if clockwise { -angle } else { angle };
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl PlanarVector for Vector3 {
    fn turn_90(&self, clockwise: bool) -> Self {
        if clockwise {
            Vector3::new(self.z, self.y, -self.x)
        } else {
            Vector3::new(-self.z, self.y, self.x)
        }
    }

    fn turn_rad(&self, angle: f64, clockwise: bool) -> Self {
        let angle = if clockwise { -angle } else { angle };
        let (sin, cos) = angle.sin_cos();
        Vector3::new(
            self.x * cos - self.z * sin,
            self.y,
            self.x * sin + self.z * cos,
        )
    }
}

/// Planar projections of a 3D vector.
pub trait HorizontalExt {
    /// Drops elevation, returning `(x, z)`.
    fn xz(&self) -> Vector2;

    /// Heading angle in radians, `atan2(z, x)`.
    fn absolute_angle(&self) -> f64;

    /// Drops elevation and normalizes. A vertical or zero vector maps to zero.
    #[must_use]
    fn normalize_xz(&self) -> Vector3;
}

impl HorizontalExt for Vector3 {
    fn xz(&self) -> Vector2 {
        Vector2::new(self.x, self.z)
    }

    fn absolute_angle(&self) -> f64 {
        self.z.atan2(self.x)
    }

    fn normalize_xz(&self) -> Vector3 {
        let flat = Vector3::new(self.x, 0.0, self.z);
        let len = flat.norm();
        if len < TOLERANCE {
            Vector3::zeros()
        } else {
            flat / len
        }
    }
}

/// Unit horizontal direction for a heading angle in radians.
#[must_use]
pub fn direction_from_angle(angle: f64) -> Vector3 {
    Vector3::x().turn_rad(angle, false).normalize()
}

/// Unsigned angle between two vectors in degrees, within `[0, 180]`.
///
/// Returns `0` when either vector is (near) zero.
#[must_use]
pub fn angle_deg(a: &Vector3, b: &Vector3) -> f64 {
    let denom = a.norm() * b.norm();
    if denom < TOLERANCE {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos().to_degrees()
}

/// Cyclic successor of index `i` in a ring of `count` items.
///
/// An empty ring returns `i` unchanged.
#[must_use]
pub fn next_index(i: usize, count: usize, shift: usize) -> usize {
    if count == 0 {
        return i;
    }
    (i % count + shift % count) % count
}

/// Cyclic predecessor of index `i` in a ring of `count` items.
///
/// An empty ring returns `i` unchanged.
#[must_use]
pub fn prev_index(i: usize, count: usize, shift: usize) -> usize {
    if count == 0 {
        return i;
    }
    (i % count + count - shift % count) % count
}
