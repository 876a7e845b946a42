mod closest_point;
mod length;

pub use closest_point::{ClosestPointOnCurve, ClosestPointResult};
pub use length::BezierLength;
