//! Univariate inequality solver
//!
//! Solves `f(x) > 0`, `f(x) >= 0` and `f(x) != 0` over ℝ. The critical points
//! are the real zeros of the numerator and of the denominator of `f`; the
//! sign of `f` is then constant on every open segment between them, so one
//! numeric sample per segment decides it.

use super::set::{Bound, Endpoint, Exclusion, Interval, RealSet};
use super::set_ops::endpoint_cmp;
use crate::error::MathemaError;
use crate::resource_limits::ResourceLimits;
use crate::solver::equation::find_roots;
use crate::solver::SolveContext;
use crate::symbolic::Expr;
use crate::MathemaResult;
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// `f > 0`
    Greater,
    /// `f >= 0`
    GreaterOrEqual,
    /// `f != 0`
    NotEqual,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::Greater => write!(f, ">"),
            Relation::GreaterOrEqual => write!(f, ">="),
            Relation::NotEqual => write!(f, "!="),
        }
    }
}

struct CriticalPoint {
    endpoint: Endpoint,
    is_pole: bool,
}

/// The set of real `var` for which `expr <relation> 0` holds
pub fn solve_univariate_inequality(
    expr: &Expr,
    relation: Relation,
    var: &str,
    limits: &ResourceLimits,
) -> MathemaResult<RealSet> {
    let ctx = SolveContext::new(limits);
    let (numer, denom) = expr.as_numer_denom();
    let zeros = if numer.has(var) {
        find_roots(&numer, var, &ctx)?
    } else {
        Vec::new()
    };
    let poles = if denom.has(var) {
        find_roots(&denom, var, &ctx)?
    } else {
        Vec::new()
    };

    let mut points: Vec<CriticalPoint> = Vec::new();
    let mut symbolic: Vec<Expr> = Vec::new();
    for (root, is_pole) in zeros
        .into_iter()
        .map(|r| (r, false))
        .chain(poles.into_iter().map(|r| (r, true)))
    {
        match Endpoint::new(root.clone()) {
            Some(endpoint) => add_point(&mut points, endpoint, is_pole),
            None => symbolic.push(root),
        }
    }

    if relation == Relation::NotEqual {
        let mut set = RealSet::from_intervals(open_segments(&points));
        set.exclusions = symbolic.into_iter().map(Exclusion::Point).collect();
        return Ok(set);
    }

    if let Some(point) = symbolic.first() {
        return Err(MathemaError::unsupported(format!(
            "cannot decide {} {} 0 around the symbolic point {} = {}",
            expr, relation, var, point
        )));
    }

    let holds_at = |x: f64| {
        let value = expr.eval_f64(&[(var, x)]);
        value.is_finite()
            && match relation {
                Relation::Greater => value > 0.0,
                _ => value >= 0.0,
            }
    };

    let mut pieces = Vec::new();
    for segment in open_segments(&points) {
        if holds_at(sample(&segment)) {
            pieces.push(segment);
        }
    }
    if relation == Relation::GreaterOrEqual {
        for point in points.iter().filter(|p| !p.is_pole) {
            // At an exact zero the sign test is replaced by definedness
            let value = expr.eval_f64(&[(var, point.endpoint.approx)]);
            if !value.is_nan() {
                pieces.push(Interval::point(point.endpoint.clone()));
            }
        }
    }

    Ok(RealSet::from_intervals(pieces))
}

fn add_point(points: &mut Vec<CriticalPoint>, endpoint: Endpoint, is_pole: bool) {
    match points
        .iter_mut()
        .find(|p| endpoint_cmp(&p.endpoint, &endpoint) == Ordering::Equal)
    {
        Some(existing) => existing.is_pole |= is_pole,
        None => points.push(CriticalPoint { endpoint, is_pole }),
    }
    points.sort_by(|a, b| endpoint_cmp(&a.endpoint, &b.endpoint));
}

/// `(-∞, p1), (p1, p2), …, (pn, +∞)`
fn open_segments(points: &[CriticalPoint]) -> Vec<Interval> {
    let mut segments = Vec::with_capacity(points.len() + 1);
    let mut lower = Bound::Unbounded;
    for point in points {
        segments.push(Interval::new(lower, Bound::Exclusive(point.endpoint.clone())));
        lower = Bound::Exclusive(point.endpoint.clone());
    }
    segments.push(Interval::new(lower, Bound::Unbounded));
    segments
}

fn sample(segment: &Interval) -> f64 {
    match (segment.min.endpoint(), segment.max.endpoint()) {
        (None, None) => 0.0,
        (Some(a), None) => a.approx + 1.0,
        (None, Some(b)) => b.approx - 1.0,
        (Some(a), Some(b)) => (a.approx + b.approx) / 2.0,
    }
}
