use tracing::trace;

use crate::geometry::curve::{CubicBezier, Curve};
use crate::math::{angle_deg, VECTOR_EPSILON};

use super::{BezierPoint, FlattenParams, FlatteningTable};

/// How a piece of a Bézier is handled during adaptive subdivision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece {
    /// A handle has collapsed; the piece has no length.
    Degenerate,
    /// Still bent and depth remains: divide and recurse.
    Split,
    /// Flat enough, or out of depth: take the chord.
    Chord,
}

/// Classifies a piece at recursion depth `depth`.
pub(crate) fn classify(bezier: &CubicBezier, params: &FlattenParams, depth: u32) -> Piece {
    let start = bezier.b - bezier.a;
    let end = bezier.c - bezier.d;
    if start.norm() < VECTOR_EPSILON || end.norm() < VECTOR_EPSILON {
        return Piece::Degenerate;
    }

    let angle = angle_deg(&start, &end);
    if depth < params.max_depth() && 180.0 - angle > params.min_angle_delta() {
        Piece::Split
    } else {
        Piece::Chord
    }
}

/// Flattens a Bézier into a `(t, cumulative length)` table.
pub struct FlattenBezier<'a> {
    bezier: &'a CubicBezier,
    params: FlattenParams,
}

impl<'a> FlattenBezier<'a> {
    /// Creates a new `FlattenBezier` operation with default parameters.
    #[must_use]
    pub fn new(bezier: &'a CubicBezier) -> Self {
        Self {
            bezier,
            params: FlattenParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: FlattenParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the flattening.
    ///
    /// The first sample is `(0, 0)` and the last is `(1, total length)`. A
    /// collapsed curve yields an empty table.
    #[must_use]
    pub fn execute(&self) -> FlatteningTable {
        let (_, points) = flatten(self.bezier, &self.params, 0);
        FlatteningTable::from_points(points)
    }
}

fn flatten(bezier: &CubicBezier, params: &FlattenParams, depth: u32) -> (f64, Vec<BezierPoint>) {
    match classify(bezier, params, depth) {
        Piece::Degenerate => (0.0, Vec::new()),
        Piece::Chord => {
            let length = bezier.chord_length();
            trace!(depth, length, "flatten leaf");
            (
                length,
                vec![BezierPoint::new(0.0, 0.0), BezierPoint::new(1.0, length)],
            )
        }
        Piece::Split => {
            let (first, second) = bezier.divide();
            let (first_length, first_points) = flatten(&first, params, depth + 1);
            let (second_length, second_points) = flatten(&second, params, depth + 1);
            let length = first_length + second_length;
            if length <= 0.0 {
                return (0.0, Vec::new());
            }

            let first_share = first_length / length;
            let second_share = second_length / length;

            let mut points = Vec::with_capacity(first_points.len() + second_points.len());
            points.extend(
                first_points
                    .iter()
                    .map(|p| BezierPoint::new(p.t * first_share, p.length)),
            );
            // The joint sample is shared; skip it unless the first half was empty.
            let skip = usize::from(!points.is_empty());
            points.extend(second_points.iter().skip(skip).map(|p| {
                BezierPoint::new(p.t * second_share + first_share, p.length + first_length)
            }));
            (length, points)
        }
    }
}
