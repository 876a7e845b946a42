pub mod curve;

pub use curve::{CombinedTrajectory, CubicBezier, Curve, StraightTrajectory, Trajectory};
