pub mod distance;
pub mod intersect_2d;
pub mod planar;

pub use planar::{angle_deg, direction_from_angle, next_index, prev_index, HorizontalExt, PlanarVector};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Below this magnitude a handle vector counts as collapsed.
pub const VECTOR_EPSILON: f64 = 1e-5;

/// Linear interpolation between two points.
///
/// Written in the `a * (1 - t) + b * t` form so that `t = 0` and `t = 1`
/// reproduce the endpoints exactly.
#[must_use]
pub fn lerp(a: &Point3, b: &Point3, t: f64) -> Point3 {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}
