use crate::geometry::curve::{CubicBezier, Curve};
use crate::tessellation::flatten_bezier::{classify, Piece};
use crate::tessellation::FlattenParams;

/// Estimates the arc length of a Bézier curve.
///
/// Pieces that are still bent by more than the angle threshold are halved
/// until the depth cap; every remaining piece counts as its chord.
pub struct BezierLength<'a> {
    bezier: &'a CubicBezier,
    params: FlattenParams,
}

impl<'a> BezierLength<'a> {
    /// Creates a new `BezierLength` query with default parameters.
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

    /// Executes the query, returning the length estimate.
    ///
    /// A curve with a collapsed handle has length `0`.
    #[must_use]
    pub fn execute(&self) -> f64 {
        length(self.bezier, &self.params, 0)
    }
}

fn length(bezier: &CubicBezier, params: &FlattenParams, depth: u32) -> f64 {
    match classify(bezier, params, depth) {
        Piece::Degenerate => 0.0,
        Piece::Chord => bezier.chord_length(),
        Piece::Split => {
            let (first, second) = bezier.divide();
            length(&first, params, depth + 1) + length(&second, params, depth + 1)
        }
    }
}
