use crate::geometry::curve::{Curve, Trajectory};
use crate::math::Point3;

use super::IntersectParams;

/// Maps a piece's local parameter back to the original trajectory.
///
/// A piece is segment `index` of `of` equal parameter slices of the
/// original, so local `u` sits at `(index + u) / of`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DomainMap {
    index: u64,
    of: u64,
    depth: u32,
}

impl DomainMap {
    /// The whole trajectory.
    pub(super) fn root() -> Self {
        Self {
            index: 0,
            of: 1,
            depth: 0,
        }
    }

    /// Map for chord `segment` of this piece split into `parts`.
    pub(super) fn refine(self, segment: usize, parts: usize) -> Self {
        let parts = parts as u64;
        Self {
            index: self.index.saturating_mul(parts).saturating_add(segment as u64),
            of: self.of.saturating_mul(parts),
            depth: self.depth + 1,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    pub(super) fn to_global(self, local: f64) -> f64 {
        (self.index as f64 + local) / self.of as f64
    }

    pub(super) fn depth(self) -> u32 {
        self.depth
    }
}

/// Polyline approximation of a trajectory piece over equal parameter steps.
pub(super) struct Sampling {
    params: Vec<f64>,
    positions: Vec<Point3>,
}

impl Sampling {
    /// Samples `parts + 1` points, with `parts` chosen from the cheap length
    /// estimate and capped by `max_parts`.
    pub(super) fn of(trajectory: &Trajectory, params: &IntersectParams) -> Self {
        let estimate = estimate(trajectory).max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let parts = ((estimate / params.min_length()).ceil() as usize).clamp(1, params.max_parts());

        let mut ts = Vec::with_capacity(parts + 1);
        let mut positions = Vec::with_capacity(parts + 1);
        ts.push(0.0);
        positions.push(trajectory.start_position());
        for i in 1..parts {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / parts as f64;
            ts.push(t);
            positions.push(trajectory.position(t));
        }
        ts.push(1.0);
        positions.push(trajectory.end_position());

        Self {
            params: ts,
            positions,
        }
    }

    /// Number of chords.
    pub(super) fn parts(&self) -> usize {
        self.params.len() - 1
    }

    /// Endpoints of chord `i`.
    pub(super) fn chord(&self, i: usize) -> (&Point3, &Point3) {
        (&self.positions[i], &self.positions[i + 1])
    }

    /// Parameter range of chord `i`.
    pub(super) fn range(&self, i: usize) -> (f64, f64) {
        (self.params[i], self.params[i + 1])
    }
}

/// A Bézier is measured by its own half-chords; other variants by the
/// magnitudes of their two halves.
fn estimate(trajectory: &Trajectory) -> f64 {
    match trajectory {
        Trajectory::Bezier(bezier) => bezier.magnitude(),
        Trajectory::Straight(_) | Trajectory::Combined(_) => {
            let (first, second) = trajectory.divide();
            first.magnitude() + second.magnitude()
        }
    }
}
