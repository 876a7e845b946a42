use std::cmp::Ordering;
use std::fmt;

use crate::geometry::curve::Trajectory;

use super::CurveCurveIntersect;

/// A crossing between two trajectories.
///
/// `first_t` and `second_t` are parameters in each trajectory's original
/// domain; an open-ended straight may report values beyond `[0, 1]`.
/// Equality compares the two parameters only.
#[derive(Debug, Clone)]
pub struct Intersection {
    first_t: f64,
    second_t: f64,
    is_intersect: bool,
    inverted: bool,
    first: Option<Trajectory>,
    second: Option<Trajectory>,
}

impl Intersection {
    /// A crossing at the given parameters, without trajectory references.
    #[must_use]
    pub fn new(first_t: f64, second_t: f64) -> Self {
        Self {
            first_t,
            second_t,
            is_intersect: true,
            inverted: false,
            first: None,
            second: None,
        }
    }

    /// The "no crossing" sentinel.
    #[must_use]
    pub fn not_intersect() -> Self {
        Self {
            first_t: 0.0,
            second_t: 0.0,
            is_intersect: false,
            inverted: false,
            first: None,
            second: None,
        }
    }

    pub(crate) fn with_trajectories(mut self, first: Trajectory, second: Trajectory) -> Self {
        self.first = Some(first);
        self.second = Some(second);
        self
    }

    #[must_use]
    pub fn first_t(&self) -> f64 {
        self.first_t
    }

    #[must_use]
    pub fn second_t(&self) -> f64 {
        self.second_t
    }

    #[must_use]
    pub fn is_intersect(&self) -> bool {
        self.is_intersect
    }

    /// Whether the operands are stored swapped relative to the query.
    #[must_use]
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    #[must_use]
    pub fn first(&self) -> Option<&Trajectory> {
        self.first.as_ref()
    }

    #[must_use]
    pub fn second(&self) -> Option<&Trajectory> {
        self.second.as_ref()
    }

    /// The same crossing seen from the other trajectory.
    ///
    /// The sentinel reverses to itself.
    #[must_use]
    pub fn reverse(&self) -> Self {
        if !self.is_intersect {
            return self.clone();
        }
        Self {
            first_t: self.second_t,
            second_t: self.first_t,
            is_intersect: true,
            inverted: !self.inverted,
            first: self.second.clone(),
            second: self.first.clone(),
        }
    }

    /// Orders by `first_t`.
    #[must_use]
    pub fn cmp_first(&self, other: &Self) -> Ordering {
        self.first_t.total_cmp(&other.first_t)
    }

    /// Orders by `second_t`.
    #[must_use]
    pub fn cmp_second(&self, other: &Self) -> Ordering {
        self.second_t.total_cmp(&other.second_t)
    }

    /// All crossings between two trajectories found with default tolerances.
    #[must_use]
    pub fn calculate(first: &Trajectory, second: &Trajectory) -> Vec<Self> {
        CurveCurveIntersect::new(first, second).execute()
    }

    /// Crossings of `trajectory` with each of `others`, concatenated.
    ///
    /// With `only_intersect`, sentinel values are filtered out.
    pub fn calculate_many<'a, I>(trajectory: &Trajectory, others: I, only_intersect: bool) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Trajectory>,
    {
        others
            .into_iter()
            .flat_map(|other| Self::calculate(trajectory, other))
            .filter(|i| !only_intersect || i.is_intersect)
            .collect()
    }

    /// The first crossing found, or [`Intersection::not_intersect`].
    #[must_use]
    pub fn calculate_single(first: &Trajectory, second: &Trajectory) -> Self {
        Self::calculate(first, second)
            .into_iter()
            .next()
            .unwrap_or_else(Self::not_intersect)
    }

    /// Parameters of the first crossing found, if any.
    #[must_use]
    pub fn calculate_single_params(first: &Trajectory, second: &Trajectory) -> Option<(f64, f64)> {
        Self::calculate(first, second)
            .first()
            .map(|i| (i.first_t, i.second_t))
    }

    /// Whether the two trajectories cross at all.
    #[must_use]
    pub fn intersect(first: &Trajectory, second: &Trajectory) -> bool {
        !Self::calculate(first, second).is_empty()
    }
}

impl PartialEq for Intersection {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.first_t == other.first_t && self.second_t == other.second_t
    }
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_intersect {
            write!(f, "{} ÷ {}", short(self.first_t), short(self.second_t))
        } else {
            f.write_str("Not intersect")
        }
    }
}

/// Up to three decimals, trailing zeros dropped.
fn short(value: f64) -> String {
    let text = format!("{value:.3}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_owned()
    } else {
        text.to_owned()
    }
}

/// Two crossings bounding a trimmed stretch of a trajectory.
#[derive(Debug, Clone)]
pub struct IntersectionPair {
    pub from: Intersection,
    pub to: Intersection,
    inverted: bool,
}

impl IntersectionPair {
    #[must_use]
    pub fn new(from: Intersection, to: Intersection) -> Self {
        Self {
            from,
            to,
            inverted: false,
        }
    }

    #[must_use]
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// The pair with its bounds swapped.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            inverted: !self.inverted,
        }
    }

    /// Whether `intersection` is one of the two bounds.
    #[must_use]
    pub fn contains(&self, intersection: &Intersection) -> bool {
        self.from == *intersection || self.to == *intersection
    }

    /// The bound opposite `intersection`, or the sentinel if it is neither.
    #[must_use]
    pub fn other(&self, intersection: &Intersection) -> Intersection {
        if *intersection == self.from {
            self.to.clone()
        } else if *intersection == self.to {
            self.from.clone()
        } else {
            Intersection::not_intersect()
        }
    }
}

impl fmt::Display for IntersectionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ÷ [{} ÷ {}] ÷ {}",
            short(self.from.second_t),
            short(self.from.first_t),
            short(self.to.first_t),
            short(self.to.second_t)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_twice_is_identity() {
        let hit = Intersection::new(0.25, 0.75);
        let reversed = hit.reverse();
        assert!(reversed.inverted());
        assert!((reversed.first_t() - 0.75).abs() < f64::EPSILON);

        let back = reversed.reverse();
        assert_eq!(back, hit);
        assert!(!back.inverted());
    }

    #[test]
    fn sentinel_reverses_to_itself() {
        let none = Intersection::not_intersect();
        assert!(!none.reverse().is_intersect());
        assert!(!none.reverse().inverted());
    }

    #[test]
    fn orderings_pick_their_parameter() {
        let a = Intersection::new(0.1, 0.9);
        let b = Intersection::new(0.5, 0.2);
        assert_eq!(a.cmp_first(&b), Ordering::Less);
        assert_eq!(a.cmp_second(&b), Ordering::Greater);
    }

    #[test]
    fn display_trims_zeros() {
        assert_eq!(Intersection::new(0.5, 0.25).to_string(), "0.5 ÷ 0.25");
        assert_eq!(Intersection::new(1.0, 0.12345).to_string(), "1 ÷ 0.123");
        assert_eq!(Intersection::not_intersect().to_string(), "Not intersect");
    }

    #[test]
    fn pair_lookup() {
        let from = Intersection::new(0.2, 0.6);
        let to = Intersection::new(0.8, 0.1);
        let pair = IntersectionPair::new(from.clone(), to.clone());

        assert!(pair.contains(&from));
        assert!(pair.contains(&to));
        assert!(!pair.contains(&Intersection::new(0.3, 0.3)));
        assert_eq!(pair.other(&from), to);
        assert_eq!(pair.other(&to), from);
        assert!(!pair.other(&Intersection::new(0.3, 0.3)).is_intersect());

        let reversed = pair.reverse();
        assert!(reversed.inverted());
        assert_eq!(reversed.from, to);
        assert_eq!(pair.to_string(), "0.6 ÷ [0.2 ÷ 0.8] ÷ 0.1");
    }
}
