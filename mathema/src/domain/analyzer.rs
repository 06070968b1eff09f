//! Domain-of-definition analysis
//!
//! A pre-order walk tags every node with a [`NodeKind`] and records the
//! restriction it imposes on the unknown. Each restriction is solved over ℝ
//! on its own and the results are intersected.

use super::inequality::{solve_univariate_inequality, Relation};
use super::set::{Exclusion, RealSet};
use crate::error::MathemaError;
use crate::resource_limits::ResourceLimits;
use crate::symbolic::{walk_expr, Expr, ExprVisitor, Function, Polynomial, Rational};
use crate::MathemaResult;
use num::{Integer, Signed, Zero};
use tracing::debug;

/// The shape of a node as far as domain restrictions are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Log,
    Sqrt,
    Tan,
    Cot,
    /// A power whose numeric exponent has an even denominator, `x**(3/2)`
    EvenRoot,
    /// A power with a negative numeric exponent
    Reciprocal,
    Sum,
    Product,
    Other,
}

impl NodeKind {
    pub fn of(expr: &Expr) -> NodeKind {
        match expr {
            Expr::Function(Function::Log, _) => NodeKind::Log,
            Expr::Function(Function::Sqrt, _) => NodeKind::Sqrt,
            Expr::Function(Function::Tan, _) => NodeKind::Tan,
            Expr::Function(Function::Cot, _) => NodeKind::Cot,
            Expr::Pow(_, exp) if exp.as_number().is_some_and(|e| e.denom().is_even()) => {
                NodeKind::EvenRoot
            }
            Expr::Pow(_, exp) if exp.as_number().is_some_and(|e| e.is_negative()) => {
                NodeKind::Reciprocal
            }
            Expr::Add(_) => NodeKind::Sum,
            Expr::Mul(_) => NodeKind::Product,
            _ => NodeKind::Other,
        }
    }
}

/// A restriction on the unknown imposed by one node
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Logarithm argument or base of a negative even root: `arg > 0`
    Positive(Expr),
    /// Square root argument or base of an even root: `arg >= 0`
    NonNegative(Expr),
    /// Denominator or reciprocal base: `expr != 0`
    NonZero(Expr),
    /// Tangent argument: `cos(arg) != 0`
    CosineNonZero(Expr),
    /// Cotangent argument: `sin(arg) != 0`
    SineNonZero(Expr),
    /// A literal reciprocal of zero, which no value can satisfy
    Unsatisfiable,
}

struct ConstraintCollector<'a> {
    var: &'a str,
    constraints: Vec<Constraint>,
}

impl ConstraintCollector<'_> {
    fn push(&mut self, constraint: Constraint) {
        if !self.constraints.contains(&constraint) {
            self.constraints.push(constraint);
        }
    }

    fn push_if_dependent(&mut self, arg: &Expr, make: fn(Expr) -> Constraint) {
        if arg.has(self.var) {
            self.push(make(arg.clone()));
        }
    }
}

impl ExprVisitor for ConstraintCollector<'_> {
    fn visit(&mut self, node: &Expr) -> bool {
        let arg = node.args().first().copied();
        match (NodeKind::of(node), arg) {
            (NodeKind::Log, Some(arg)) => self.push_if_dependent(arg, Constraint::Positive),
            (NodeKind::Sqrt, Some(arg)) => self.push_if_dependent(arg, Constraint::NonNegative),
            (NodeKind::Tan, Some(arg)) => self.push_if_dependent(arg, Constraint::CosineNonZero),
            (NodeKind::Cot, Some(arg)) => self.push_if_dependent(arg, Constraint::SineNonZero),
            (NodeKind::EvenRoot, _) => {
                if let Expr::Pow(base, exp) = node {
                    let make: fn(Expr) -> Constraint = if exp.as_number().is_some_and(|e| e.is_negative()) {
                        Constraint::Positive
                    } else {
                        Constraint::NonNegative
                    };
                    self.push_if_dependent(base, make);
                }
            }
            (NodeKind::Reciprocal, _) => {
                if let Expr::Pow(base, _) = node {
                    if base.has(self.var) {
                        self.push(Constraint::NonZero((**base).clone()));
                    } else if base.is_zero() {
                        self.push(Constraint::Unsatisfiable);
                    }
                }
            }
            (NodeKind::Sum | NodeKind::Product, _) => {
                let (_, denom) = node.as_numer_denom();
                if denom.has(self.var) {
                    self.push(Constraint::NonZero(denom));
                }
            }
            _ => {}
        }
        true
    }
}

/// Restrictions imposed on `var` by the sub-expressions of `expr`
pub fn collect_constraints(expr: &Expr, var: &str) -> Vec<Constraint> {
    let mut collector = ConstraintCollector {
        var,
        constraints: Vec::new(),
    };
    walk_expr(expr, &mut collector);
    collector.constraints
}

/// The set of real values of `var` for which `expr` is defined
pub fn domain(expr: &Expr, var: &str, limits: &ResourceLimits) -> MathemaResult<RealSet> {
    let mut result = RealSet::reals();
    for constraint in collect_constraints(expr, var) {
        debug!(?constraint, var, "domain constraint");
        let set = solve_constraint(&constraint, var, limits)?;
        result = result.intersect(&set);
    }
    Ok(result)
}

fn solve_constraint(
    constraint: &Constraint,
    var: &str,
    limits: &ResourceLimits,
) -> MathemaResult<RealSet> {
    match constraint {
        Constraint::Positive(arg) => {
            solve_univariate_inequality(arg, Relation::Greater, var, limits)
        }
        Constraint::NonNegative(arg) => {
            solve_univariate_inequality(arg, Relation::GreaterOrEqual, var, limits)
        }
        Constraint::NonZero(expr) => {
            solve_univariate_inequality(expr, Relation::NotEqual, var, limits)
        }
        Constraint::CosineNonZero(arg) => {
            // cos(a*x + b) = 0  ⇔  x = (π/2 - b)/a + kπ/|a|
            let (a, b) = linear_parts(arg, var, "tan")?;
            let offset = Expr::div(
                Expr::sub(Expr::div(Expr::pi(), Expr::integer(2)), b),
                Expr::Number(a.clone()),
            );
            Ok(periodic_exclusion(offset, &a))
        }
        Constraint::SineNonZero(arg) => {
            // sin(a*x + b) = 0  ⇔  x = -b/a + kπ/|a|
            let (a, b) = linear_parts(arg, var, "cot")?;
            let offset = Expr::div(Expr::neg(b), Expr::Number(a.clone()));
            Ok(periodic_exclusion(offset, &a))
        }
        Constraint::Unsatisfiable => Ok(RealSet::empty()),
    }
}

fn periodic_exclusion(offset: Expr, slope: &Rational) -> RealSet {
    let period = Expr::mul(vec![Expr::Number(slope.abs().recip()), Expr::pi()]);
    RealSet::excluding(vec![Exclusion::Periodic {
        offset: offset.expand(),
        period,
    }])
}

/// Split `arg` as `a*var + b` with a numeric, non-zero slope `a`
fn linear_parts(arg: &Expr, var: &str, function: &str) -> MathemaResult<(Rational, Expr)> {
    let unsupported = || {
        MathemaError::unsupported(format!(
            "{}({}) needs an argument linear in {}",
            function, arg, var
        ))
    };
    let poly = Polynomial::from_expr(&arg.expand(), var).ok_or_else(unsupported)?;
    match poly.coeffs.as_slice() {
        [b, a] => match a.as_number() {
            Some(slope) if !slope.is_zero() => Ok((slope.clone(), b.clone())),
            _ => Err(unsupported()),
        },
        _ => Err(unsupported()),
    }
}
