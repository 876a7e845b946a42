pub(crate) mod flatten_bezier;

pub use flatten_bezier::FlattenBezier;

use std::cmp::Ordering;
use std::fmt;

use crate::error::{ConfigError, Result};

/// Deepest subdivision a [`FlattenParams`] may request.
pub const MAX_FLATTEN_DEPTH: u32 = 16;

/// Parameters controlling adaptive Bézier subdivision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlattenParams {
    min_angle_delta: f64,
    max_depth: u32,
}

impl FlattenParams {
    /// Creates a validated parameter set.
    ///
    /// * `min_angle_delta` - bend in degrees below which a piece is taken as straight
    /// * `max_depth` - hard cap on subdivision depth, at most [`MAX_FLATTEN_DEPTH`]
    ///
    /// # Errors
    ///
    /// Returns an error if `min_angle_delta` is negative or not finite, or
    /// if `max_depth` exceeds [`MAX_FLATTEN_DEPTH`].
    pub fn new(min_angle_delta: f64, max_depth: u32) -> Result<Self> {
        if !min_angle_delta.is_finite() || min_angle_delta < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "min_angle_delta",
                value: min_angle_delta,
            }
            .into());
        }
        if max_depth > MAX_FLATTEN_DEPTH {
            return Err(ConfigError::InvalidParameter {
                name: "max_depth",
                value: f64::from(max_depth),
            }
            .into());
        }
        Ok(Self {
            min_angle_delta,
            max_depth,
        })
    }

    /// Bend threshold in degrees.
    #[must_use]
    pub fn min_angle_delta(&self) -> f64 {
        self.min_angle_delta
    }

    /// Maximum recursion depth.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl Default for FlattenParams {
    fn default() -> Self {
        Self {
            min_angle_delta: 10.0,
            max_depth: 5,
        }
    }
}

/// One sample of a flattening table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BezierPoint {
    /// Normalized position along the curve.
    pub t: f64,
    /// Arc length from the start of the curve up to this sample.
    pub length: f64,
}

impl BezierPoint {
    #[must_use]
    pub fn new(t: f64, length: f64) -> Self {
        Self { t, length }
    }

    /// Orders samples by cumulative length.
    #[must_use]
    pub fn cmp_length(&self, other: &Self) -> Ordering {
        self.length.total_cmp(&other.length)
    }
}

impl fmt::Display for BezierPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.t, self.length)
    }
}

/// Polyline approximation of a curve as `(t, cumulative length)` samples,
/// sorted by length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatteningTable {
    points: Vec<BezierPoint>,
}

impl FlatteningTable {
    pub(crate) fn from_points(points: Vec<BezierPoint>) -> Self {
        Self { points }
    }

    /// The samples, in order.
    #[must_use]
    pub fn points(&self) -> &[BezierPoint] {
        &self.points
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Cumulative length at the last sample; `0` for an empty table.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.length)
    }

    /// Maps an arc-length offset back to a parameter.
    ///
    /// Interpolates linearly between the two samples around `length`.
    /// Offsets outside the table clamp to its ends; an empty table yields `0`.
    #[must_use]
    pub fn parameter_at_length(&self, length: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 0.0;
        };
        if length <= first.length {
            return first.t;
        }
        if length >= last.length {
            return last.t;
        }

        let index = self.points.partition_point(|p| p.length < length);
        let lo = self.points[index - 1];
        let hi = self.points[index];
        let span = hi.length - lo.length;
        if span <= 0.0 {
            return hi.t;
        }
        lo.t + (hi.t - lo.t) * (length - lo.length) / span
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn table() -> FlatteningTable {
        FlatteningTable::from_points(vec![
            BezierPoint::new(0.0, 0.0),
            BezierPoint::new(0.4, 2.0),
            BezierPoint::new(1.0, 5.0),
        ])
    }

    #[test]
    fn default_params() {
        let params = FlattenParams::default();
        assert_abs_diff_eq!(params.min_angle_delta(), 10.0);
        assert_eq!(params.max_depth(), 5);
    }

    #[test]
    fn negative_angle_is_rejected() {
        assert!(FlattenParams::new(-1.0, 5).is_err());
        assert!(FlattenParams::new(f64::NAN, 5).is_err());
        assert!(FlattenParams::new(0.0, 0).is_ok());
    }

    #[test]
    fn depth_is_capped() {
        assert!(FlattenParams::new(0.0, MAX_FLATTEN_DEPTH).is_ok());
        assert!(FlattenParams::new(0.0, MAX_FLATTEN_DEPTH + 1).is_err());
        assert!(FlattenParams::new(10.0, u32::MAX).is_err());
    }

    #[test]
    fn lookup_interpolates_between_samples() {
        let table = table();
        assert_abs_diff_eq!(table.parameter_at_length(1.0), 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(table.parameter_at_length(3.5), 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(table.parameter_at_length(2.0), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn lookup_clamps_to_ends() {
        let table = table();
        assert_abs_diff_eq!(table.parameter_at_length(-3.0), 0.0);
        assert_abs_diff_eq!(table.parameter_at_length(99.0), 1.0);
        assert_abs_diff_eq!(table.total_length(), 5.0);
    }

    #[test]
    fn empty_table_maps_to_start() {
        let table = FlatteningTable::default();
        assert!(table.is_empty());
        assert_abs_diff_eq!(table.parameter_at_length(1.0), 0.0);
        assert_abs_diff_eq!(table.total_length(), 0.0);
    }

    #[test]
    fn samples_order_by_length() {
        let mut points = vec![BezierPoint::new(1.0, 5.0), BezierPoint::new(0.0, 0.0)];
        points.sort_by(BezierPoint::cmp_length);
        assert_abs_diff_eq!(points[0].length, 0.0);
        assert_eq!(format!("{}", points[1]), "1 - 5");
    }
}
