//! Subsets of the real line

use crate::symbolic::Expr;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// An exact interval endpoint together with its numeric position
#[derive(Debug, Clone)]
pub struct Endpoint {
    pub value: Expr,
    pub approx: f64,
}

impl Endpoint {
    /// Endpoint for a constant expression; `None` if it has no finite value
    pub fn new(value: Expr) -> Option<Self> {
        let approx = value.approx()?;
        Some(Self { value, approx })
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Bound specification for intervals
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    /// Inclusive bound [value
    Inclusive(Endpoint),

    /// Exclusive bound (value
    Exclusive(Endpoint),

    /// Unbounded (-∞ or +∞)
    Unbounded,
}

impl Bound {
    pub fn endpoint(&self) -> Option<&Endpoint> {
        match self {
            Bound::Inclusive(e) | Bound::Exclusive(e) => Some(e),
            Bound::Unbounded => None,
        }
    }
}

/// A convex piece of the real line
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    pub min: Bound,
    pub max: Bound,
}

impl Interval {
    pub fn new(min: Bound, max: Bound) -> Self {
        Self { min, max }
    }

    /// The whole real line
    pub fn all() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// The degenerate interval `[p, p]`
    pub fn point(p: Endpoint) -> Self {
        Self::new(Bound::Inclusive(p.clone()), Bound::Inclusive(p))
    }

    pub fn is_all(&self) -> bool {
        matches!((&self.min, &self.max), (Bound::Unbounded, Bound::Unbounded))
    }

    pub fn contains(&self, x: f64) -> bool {
        let above_min = match &self.min {
            Bound::Unbounded => true,
            Bound::Inclusive(e) => x >= e.approx,
            Bound::Exclusive(e) => x > e.approx,
        };
        let below_max = match &self.max {
            Bound::Unbounded => true,
            Bound::Inclusive(e) => x <= e.approx,
            Bound::Exclusive(e) => x < e.approx,
        };
        above_min && below_max
    }
}

/// Points removed from the intervals of a [`RealSet`]
#[derive(Debug, Clone, PartialEq)]
pub enum Exclusion {
    /// A single point, typically depending on a parameter (`x ≠ a`)
    Point(Expr),

    /// The family `offset + k*period`, `k ∈ ℤ` (poles of tan and cot)
    Periodic { offset: Expr, period: Expr },
}

impl Exclusion {
    /// The excluded points as one expression in the integer parameter `k`
    pub fn as_expr(&self) -> Expr {
        match self {
            Exclusion::Point(p) => p.clone(),
            Exclusion::Periodic { offset, period } => Expr::add(vec![
                Expr::mul(vec![period.clone(), Expr::periodic_parameter()]),
                offset.clone(),
            ]),
        }
    }

    fn excludes(&self, x: f64) -> bool {
        const TOLERANCE: f64 = 1e-9;
        match self {
            Exclusion::Point(p) => p.approx().is_some_and(|v| (v - x).abs() < TOLERANCE),
            Exclusion::Periodic { offset, period } => match (offset.approx(), period.approx()) {
                (Some(o), Some(t)) if t != 0.0 => {
                    let k = (x - o) / t;
                    (k - k.round()).abs() < TOLERANCE
                }
                _ => false,
            },
        }
    }
}

/// A subset of ℝ: a union of disjoint intervals minus a list of exclusions
///
/// Intervals are kept sorted and merged; the empty set has no intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct RealSet {
    pub intervals: Vec<Interval>,
    pub exclusions: Vec<Exclusion>,
}

impl RealSet {
    pub fn reals() -> Self {
        Self {
            intervals: vec![Interval::all()],
            exclusions: Vec::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            intervals: Vec::new(),
            exclusions: Vec::new(),
        }
    }

    pub fn from_intervals(intervals: Vec<Interval>) -> Self {
        Self {
            intervals: super::set_ops::merge_intervals(intervals),
            exclusions: Vec::new(),
        }
    }

    /// ℝ without the given points
    pub fn excluding(exclusions: Vec<Exclusion>) -> Self {
        Self {
            intervals: vec![Interval::all()],
            exclusions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn is_reals(&self) -> bool {
        self.exclusions.is_empty() && self.intervals.len() == 1 && self.intervals[0].is_all()
    }

    pub fn contains(&self, x: f64) -> bool {
        self.intervals.iter().any(|i| i.contains(x))
            && !self.exclusions.iter().any(|e| e.excludes(x))
    }

    pub fn intersect(&self, other: &RealSet) -> RealSet {
        super::set_ops::intersect(self, other)
    }

    pub fn union(&self, other: &RealSet) -> RealSet {
        super::set_ops::union(self, other)
    }
}

impl Default for RealSet {
    fn default() -> Self {
        Self::reals()
    }
}

impl Serialize for RealSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RealSet", 2)?;
        state.serialize_field("text", &crate::format::format_interval(self))?;
        state.serialize_field("is_empty", &self.is_empty())?;
        state.end()
    }
}
