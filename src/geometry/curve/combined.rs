use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, Trajectory};

/// An ordered chain of trajectories joined end to end.
///
/// The chain is parameterized over a single `[0, 1]` range. Part `i` spans
/// `[breaks[i], breaks[i + 1]]`, with each span proportional to the part's
/// length when built with [`CombinedTrajectory::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedTrajectory {
    parts: Vec<Trajectory>,
    breaks: Vec<f64>,
}

impl CombinedTrajectory {
    /// Builds a chain whose parameter spans follow the parts' lengths.
    ///
    /// A part with no measured length but distinct endpoints, such as a
    /// Bézier with a collapsed handle, is weighted by its magnitude. A chain
    /// of zero total length spreads its parts evenly.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyComposite`] if `parts` is empty.
    pub fn new(parts: Vec<Trajectory>) -> Result<Self> {
        if parts.is_empty() {
            return Err(GeometryError::EmptyComposite.into());
        }

        let weights: Vec<f64> = parts.iter().map(span_weight).collect();
        let total: f64 = weights.iter().sum();

        let mut breaks = Vec::with_capacity(parts.len() + 1);
        breaks.push(0.0);
        if total < TOLERANCE {
            #[allow(clippy::cast_precision_loss)]
            let even = (1..parts.len()).map(|i| i as f64 / parts.len() as f64);
            breaks.extend(even);
        } else {
            let mut acc = 0.0;
            for weight in &weights[..weights.len() - 1] {
                acc += weight;
                breaks.push(acc / total);
            }
        }
        breaks.push(1.0);

        Ok(Self { parts, breaks })
    }

    /// Builds a chain with explicit parameter breaks.
    ///
    /// `breaks` holds one more value than `parts`, starts at `0`, ends at `1`
    /// and never decreases.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyComposite`] if `parts` is empty, or
    /// [`GeometryError::Degenerate`] if `breaks` is malformed.
    pub fn with_breaks(parts: Vec<Trajectory>, breaks: Vec<f64>) -> Result<Self> {
        if parts.is_empty() {
            return Err(GeometryError::EmptyComposite.into());
        }
        if breaks.len() != parts.len() + 1 {
            return Err(GeometryError::Degenerate(format!(
                "{} parts need {} breaks, got {}",
                parts.len(),
                parts.len() + 1,
                breaks.len()
            ))
            .into());
        }
        #[allow(clippy::float_cmp)]
        let anchored = breaks[0] == 0.0 && breaks[breaks.len() - 1] == 1.0;
        if !anchored
            || breaks.iter().any(|b| b.is_nan())
            || breaks.windows(2).any(|w| w[1] < w[0])
        {
            return Err(GeometryError::Degenerate(
                "breaks must rise from 0 to 1".into(),
            )
            .into());
        }
        Ok(Self { parts, breaks })
    }

    /// The parts of the chain, in order.
    #[must_use]
    pub fn parts(&self) -> &[Trajectory] {
        &self.parts
    }

    /// Parameter breaks, one per part boundary including both ends.
    #[must_use]
    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    /// Interior joints, `breaks[1..n]`.
    fn joints(&self) -> &[f64] {
        &self.breaks[1..self.parts.len()]
    }

    /// Local parameter of global `t` inside part `index`.
    fn local(&self, index: usize, t: f64) -> f64 {
        let span = self.breaks[index + 1] - self.breaks[index];
        if span < TOLERANCE {
            0.0
        } else {
            (t - self.breaks[index]) / span
        }
    }

    /// Part holding `t`; a joint belongs to the part after it.
    fn locate(&self, t: f64) -> (usize, f64) {
        let index = self.joints().partition_point(|&b| b <= t);
        (index, self.local(index, t))
    }

    /// Part holding `t`; a joint belongs to the part before it.
    fn locate_end(&self, t: f64) -> (usize, f64) {
        let index = self.joints().partition_point(|&b| b < t);
        (index, self.local(index, t))
    }

    /// Sub-chain made of `parts[range]` rescaled to `[0, 1]`.
    fn sub_chain(&self, from: usize, to: usize) -> Self {
        let lo = self.breaks[from];
        let hi = self.breaks[to];
        let span = hi - lo;
        let breaks = self.breaks[from..=to]
            .iter()
            .map(|b| (b - lo) / span)
            .collect::<Vec<_>>();
        Self::anchored(self.parts[from..to].to_vec(), breaks)
    }

    /// Pins the outer breaks to exactly `0` and `1`.
    fn anchored(parts: Vec<Trajectory>, mut breaks: Vec<f64>) -> Self {
        let last = breaks.len() - 1;
        breaks[0] = 0.0;
        breaks[last] = 1.0;
        Self { parts, breaks }
    }

    fn single(part: Trajectory) -> Self {
        Self {
            parts: vec![part],
            breaks: vec![0.0, 1.0],
        }
    }
}

/// Share of the chain's parameter range claimed by `part`.
fn span_weight(part: &Trajectory) -> f64 {
    let length = part.length();
    if length < TOLERANCE {
        part.magnitude()
    } else {
        length
    }
}

impl Curve for CombinedTrajectory {
    fn position(&self, t: f64) -> Point3 {
        let (index, local) = self.locate(t);
        self.parts[index].position(local)
    }

    fn tangent(&self, t: f64) -> Vector3 {
        let (index, local) = self.locate(t);
        let span = self.breaks[index + 1] - self.breaks[index];
        let tangent = self.parts[index].tangent(local);
        if span < TOLERANCE {
            tangent
        } else {
            tangent / span
        }
    }

    fn cut(&self, t0: f64, t1: f64) -> Self {
        debug_assert!(t0 <= t1, "cut range reversed: {t0} > {t1}");
        let (first, l0) = self.locate(t0);
        let (last, l1) = self.locate_end(t1);

        if last <= first {
            let l1 = self.local(first, t1);
            return Self::single(self.parts[first].cut(l0, l1));
        }

        let span = t1 - t0;
        let mut parts = Vec::with_capacity(last - first + 1);
        parts.push(self.parts[first].cut(l0, 1.0));
        parts.extend(self.parts[first + 1..last].iter().cloned());
        parts.push(self.parts[last].cut(0.0, l1));

        let mut breaks = Vec::with_capacity(parts.len() + 1);
        breaks.push(0.0);
        breaks.extend(self.breaks[first + 1..=last].iter().map(|b| (b - t0) / span));
        breaks.push(1.0);

        Self::anchored(parts, breaks)
    }

    /// Splits at the interior joint nearest the middle of the range, or
    /// divides the only part when there is no usable joint.
    fn divide(&self) -> (Self, Self) {
        let joint = (1..self.parts.len())
            .filter(|&i| self.breaks[i] > 0.0 && self.breaks[i] < 1.0)
            .min_by(|&i, &j| {
                (self.breaks[i] - 0.5)
                    .abs()
                    .total_cmp(&(self.breaks[j] - 0.5).abs())
            });

        match joint {
            Some(k) => (self.sub_chain(0, k), self.sub_chain(k, self.parts.len())),
            None if self.parts.len() == 1 => {
                let (first, second) = self.parts[0].divide();
                (Self::single(first), Self::single(second))
            }
            None => (self.cut(0.0, 0.5), self.cut(0.5, 1.0)),
        }
    }

    fn magnitude(&self) -> f64 {
        self.parts.iter().map(Curve::magnitude).sum()
    }

    fn length(&self) -> f64 {
        self.parts.iter().map(Curve::length).sum()
    }

    fn invert(&self) -> Self {
        let parts = self.parts.iter().rev().map(Curve::invert).collect();
        let breaks = self.breaks.iter().rev().map(|b| 1.0 - b).collect();
        Self::anchored(parts, breaks)
    }
}
