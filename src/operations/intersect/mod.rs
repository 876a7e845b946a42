//! Crossing points between two trajectories on the horizontal plane.
//!
//! Every variant pair is reduced to chord tests between polyline
//! approximations that are refined around each hit. Straight × straight is
//! solved directly. When one side is straight, only the other side is
//! subdivided and the straight is tested as-is with its open ends. All other
//! pairs subdivide both sides and stop at the first crossing found.

mod intersection;
mod ray;
mod sampling;
mod straight;
mod subdivide;

pub use intersection::{Intersection, IntersectionPair};
pub use straight::intersect_straights;

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::geometry::curve::Trajectory;

/// Tolerances for the adaptive intersection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectParams {
    min_length: f64,
    max_parts: usize,
    retry_low: f64,
    retry_high: f64,
}

impl IntersectParams {
    /// Creates a validated parameter set.
    ///
    /// * `min_length` - target chord length; a piece shorter than this is one chord
    /// * `max_parts` - cap on chords per piece and recursion step
    /// * `retry_low` / `retry_high` - hit fractions near a chord end below/above
    ///   which the neighbouring chord is also searched
    ///
    /// # Errors
    ///
    /// Returns an error if `min_length` is not a positive finite number,
    /// `max_parts` is zero, or the retry thresholds are not ordered
    /// `0 <= retry_low < retry_high <= 1`.
    pub fn new(min_length: f64, max_parts: usize, retry_low: f64, retry_high: f64) -> Result<Self> {
        if !min_length.is_finite() || min_length <= 0.0 {
            return Err(invalid("min_length", min_length));
        }
        if max_parts == 0 {
            return Err(invalid("max_parts", 0.0));
        }
        if !(0.0..=1.0).contains(&retry_low) {
            return Err(invalid("retry_low", retry_low));
        }
        if !(0.0..=1.0).contains(&retry_high) || retry_high <= retry_low {
            return Err(invalid("retry_high", retry_high));
        }
        Ok(Self {
            min_length,
            max_parts,
            retry_low,
            retry_high,
        })
    }

    #[must_use]
    pub fn min_length(&self) -> f64 {
        self.min_length
    }

    #[must_use]
    pub fn max_parts(&self) -> usize {
        self.max_parts
    }

    #[must_use]
    pub fn retry_low(&self) -> f64 {
        self.retry_low
    }

    #[must_use]
    pub fn retry_high(&self) -> f64 {
        self.retry_high
    }
}

impl Default for IntersectParams {
    fn default() -> Self {
        Self {
            min_length: 0.5,
            max_parts: 10,
            retry_low: 0.1,
            retry_high: 0.9,
        }
    }
}

fn invalid(name: &'static str, value: f64) -> crate::error::RoadpathError {
    ConfigError::InvalidParameter { name, value }.into()
}

/// Computes crossings between two trajectories.
pub struct CurveCurveIntersect<'a> {
    first: &'a Trajectory,
    second: &'a Trajectory,
    params: IntersectParams,
}

impl<'a> CurveCurveIntersect<'a> {
    /// Creates a new `CurveCurveIntersect` query with default tolerances.
    #[must_use]
    pub fn new(first: &'a Trajectory, second: &'a Trajectory) -> Self {
        Self {
            first,
            second,
            params: IntersectParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: IntersectParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the query.
    ///
    /// Every returned intersection carries `first_t` on the first trajectory
    /// and `second_t` on the second, plus copies of both trajectories. An
    /// empty list means no crossing was found.
    #[must_use]
    pub fn execute(&self) -> Vec<Intersection> {
        let mut results = Vec::new();
        let params = &self.params;

        match (self.first, self.second) {
            (Trajectory::Straight(first), Trajectory::Straight(second)) => {
                straight::intersect(&mut results, first, second);
            }
            (Trajectory::Straight(line), other) => {
                ray::intersect(&mut results, line, other, false, params);
            }
            (other, Trajectory::Straight(line)) => {
                ray::intersect(&mut results, line, other, true, params);
            }
            (first, second) => {
                subdivide::intersect(&mut results, first, second, params);
            }
        }

        debug!(
            first = self.first.kind(),
            second = self.second.kind(),
            found = results.len(),
            "intersection query"
        );

        results
            .into_iter()
            .map(|i| i.with_trajectories(self.first.clone(), self.second.clone()))
            .collect()
    }
}
