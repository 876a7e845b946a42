mod bezier;
mod combined;
mod straight;

pub use bezier::CubicBezier;
pub use combined::CombinedTrajectory;
pub use straight::StraightTrajectory;

use crate::math::{Point3, Vector3, TOLERANCE};

/// Capability set shared by every path variant.
///
/// Parameters run over `[0, 1]`. Straight variants with an open end also
/// accept parameters beyond that end.
pub trait Curve: Clone {
    /// Evaluates the curve at parameter `t`.
    fn position(&self, t: f64) -> Point3;

    /// Derivative of the position with respect to `t`.
    fn tangent(&self, t: f64) -> Vector3;

    /// Restriction to `[t0, t1]`, reparameterized to `[0, 1]`.
    ///
    /// Callers must pass `t0 <= t1`.
    #[must_use]
    fn cut(&self, t0: f64, t1: f64) -> Self;

    /// Splits the curve into two halves, each reparameterized to `[0, 1]`.
    fn divide(&self) -> (Self, Self);

    /// Cheap length estimate, suitable for choosing a subdivision budget.
    fn magnitude(&self) -> f64;

    /// Authoritative arc length.
    fn length(&self) -> f64;

    /// Same geometry traversed in the opposite direction.
    #[must_use]
    fn invert(&self) -> Self;

    fn start_position(&self) -> Point3 {
        self.position(0.0)
    }

    fn end_position(&self) -> Point3 {
        self.position(1.0)
    }

    /// Unit tangent at the start, or zero if the curve has none there.
    fn start_direction(&self) -> Vector3 {
        unit_or_zero(&self.tangent(0.0))
    }

    /// Unit tangent at the end, or zero if the curve has none there.
    fn end_direction(&self) -> Vector3 {
        unit_or_zero(&self.tangent(1.0))
    }

    /// Splits at parameter `t` into `[0, t]` and `[t, 1]`.
    fn split(&self, t: f64) -> (Self, Self) {
        (self.cut(0.0, t), self.cut(t, 1.0))
    }
}

fn unit_or_zero(v: &Vector3) -> Vector3 {
    v.try_normalize(TOLERANCE).unwrap_or_else(Vector3::zeros)
}

/// A path segment of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Trajectory {
    Bezier(CubicBezier),
    Straight(StraightTrajectory),
    Combined(CombinedTrajectory),
}

impl Trajectory {
    /// Short variant name for diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bezier(_) => "bezier",
            Self::Straight(_) => "straight",
            Self::Combined(_) => "combined",
        }
    }
}

impl From<CubicBezier> for Trajectory {
    fn from(bezier: CubicBezier) -> Self {
        Self::Bezier(bezier)
    }
}

impl From<StraightTrajectory> for Trajectory {
    fn from(straight: StraightTrajectory) -> Self {
        Self::Straight(straight)
    }
}

impl From<CombinedTrajectory> for Trajectory {
    fn from(combined: CombinedTrajectory) -> Self {
        Self::Combined(combined)
    }
}

impl Curve for Trajectory {
    fn position(&self, t: f64) -> Point3 {
        match self {
            Self::Bezier(b) => b.position(t),
            Self::Straight(s) => s.position(t),
            Self::Combined(c) => c.position(t),
        }
    }

    fn tangent(&self, t: f64) -> Vector3 {
        match self {
            Self::Bezier(b) => b.tangent(t),
            Self::Straight(s) => s.tangent(t),
            Self::Combined(c) => c.tangent(t),
        }
    }

    fn cut(&self, t0: f64, t1: f64) -> Self {
        match self {
            Self::Bezier(b) => Self::Bezier(b.cut(t0, t1)),
            Self::Straight(s) => Self::Straight(s.cut(t0, t1)),
            Self::Combined(c) => Self::Combined(c.cut(t0, t1)),
        }
    }

    fn divide(&self) -> (Self, Self) {
        match self {
            Self::Bezier(b) => {
                let (first, second) = b.divide();
                (first.into(), second.into())
            }
            Self::Straight(s) => {
                let (first, second) = s.divide();
                (first.into(), second.into())
            }
            Self::Combined(c) => {
                let (first, second) = c.divide();
                (first.into(), second.into())
            }
        }
    }

    fn magnitude(&self) -> f64 {
        match self {
            Self::Bezier(b) => b.magnitude(),
            Self::Straight(s) => s.magnitude(),
            Self::Combined(c) => c.magnitude(),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Bezier(b) => b.length(),
            Self::Straight(s) => s.length(),
            Self::Combined(c) => c.length(),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::Bezier(b) => Self::Bezier(b.invert()),
            Self::Straight(s) => Self::Straight(s.invert()),
            Self::Combined(c) => Self::Combined(c.invert()),
        }
    }
}
