//! Single equations and the `solve` entry point

use super::isolate::isolate;
use super::system::solve_system;
use super::SolveContext;
use crate::ast::Equation;
use crate::error::MathemaError;
use crate::resource_limits::ResourceLimits;
use crate::symbolic::expand::{max_power_of, TooManyTerms};
use crate::symbolic::{Expr, Polynomial};
use crate::MathemaResult;
use num::Zero;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// One solution: variable name → value (possibly containing the parameter `k`)
pub type Solution = BTreeMap<String, Expr>;

/// Residuals smaller than this count as zero when validating candidates
const VALIDATION_TOLERANCE: f64 = 1e-9;

/// Solve one equation for `var`, or several equations for all their unknowns
///
/// A single equation yields one mapping `{var: root}` per real root; other
/// symbols are treated as parameters. A system yields one mapping per
/// solution branch, covering every variable the elimination determined.
pub fn solve(
    equations: &[Equation],
    var: &str,
    limits: &ResourceLimits,
) -> MathemaResult<Vec<Solution>> {
    match equations {
        [] => Ok(Vec::new()),
        [equation] => {
            let roots = solve_univariate(equation, var, limits)?;
            Ok(roots
                .into_iter()
                .map(|root| Solution::from([(var.to_string(), root)]))
                .collect())
        }
        _ => {
            if equations.len() > limits.max_equations {
                return Err(MathemaError::limit_exceeded(
                    "max_equations",
                    limits.max_equations,
                    equations.len(),
                    "Split the system into smaller queries",
                ));
            }
            solve_system(equations, &SolveContext::new(limits))
        }
    }
}

/// Real roots of a single equation in `var`
pub fn solve_univariate(
    equation: &Equation,
    var: &str,
    limits: &ResourceLimits,
) -> MathemaResult<Vec<Expr>> {
    debug!(%equation, var, "solving equation");
    find_roots(&equation.residual(), var, &SolveContext::new(limits))
}

/// Real zeros of `expr` as a function of `var`
///
/// Rational expressions go through the polynomial root finder; anything else
/// is isolated layer by layer. Every constant candidate is substituted back
/// into `expr` and kept only if it is real and makes `expr` vanish.
pub fn find_roots(expr: &Expr, var: &str, ctx: &SolveContext) -> MathemaResult<Vec<Expr>> {
    let ctx = ctx.descend()?;
    if !expr.has(var) {
        return Ok(Vec::new());
    }

    let candidates = match polynomial_zeros(expr, var, &ctx) {
        Ok(Some(roots)) => roots,
        Ok(None) => isolated_zeros(expr, var, &ctx)?,
        Err(MathemaError::Unsupported(reason)) => {
            // (x - 1)**3 = 2 has no rational roots but peels off directly
            debug!(%reason, "polynomial root finder gave up, isolating");
            match isolated_zeros(expr, var, &ctx) {
                Ok(roots) => roots,
                Err(MathemaError::Unsupported(_)) => {
                    return Err(MathemaError::Unsupported(reason))
                }
                Err(e) => return Err(e),
            }
        }
        Err(e) => return Err(e),
    };

    let mut roots: Vec<Expr> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !roots.contains(&candidate) && is_valid_root(expr, var, &candidate) {
            roots.push(candidate);
        } else {
            trace!(%candidate, "rejected candidate root");
        }
    }
    sort_numeric(&mut roots);
    Ok(roots)
}

/// Zeros of a rational function of `var`; `None` if the numerator is not a
/// polynomial in `var`
pub(crate) fn polynomial_zeros(
    expr: &Expr,
    var: &str,
    ctx: &SolveContext,
) -> MathemaResult<Option<Vec<Expr>>> {
    let max_degree = ctx.limits.max_polynomial_degree;
    let (numer, denom) = expr.as_numer_denom();

    let degree = max_power_of(&numer, var);
    if degree > max_degree {
        return Err(MathemaError::limit_exceeded(
            "max_polynomial_degree",
            max_degree,
            degree,
            "Reduce the degree of the equation",
        ));
    }

    let numer = numer
        .expand_bounded(max_degree, ctx.limits.max_expanded_terms)
        .map_err(|TooManyTerms(size)| {
            MathemaError::limit_exceeded(
                "max_expanded_terms",
                ctx.limits.max_expanded_terms,
                size,
                "Reduce the number of unknowns or the degree of the equation",
            )
        })?;
    let Some(poly) = Polynomial::from_expr(&numer, var) else {
        return Ok(None);
    };
    if poly.degree() > max_degree {
        return Err(MathemaError::limit_exceeded(
            "max_polynomial_degree",
            max_degree,
            poly.degree(),
            "Reduce the degree of the equation",
        ));
    }
    let roots = poly.real_roots()?;
    Ok(Some(drop_poles(roots, &denom, var)))
}

fn isolated_zeros(expr: &Expr, var: &str, ctx: &SolveContext) -> MathemaResult<Vec<Expr>> {
    let (numer, denom) = expr.as_numer_denom();
    let roots = isolate(&numer, var, Expr::zero(), ctx)?;
    Ok(drop_poles(roots, &denom, var))
}

/// Remove candidates at which the denominator vanishes
fn drop_poles(roots: Vec<Expr>, denom: &Expr, var: &str) -> Vec<Expr> {
    if !denom.has(var) {
        return roots;
    }
    roots
        .into_iter()
        .filter(|root| {
            let at_root = denom.subs(var, root);
            !(at_root.is_zero()
                || at_root
                    .approx()
                    .is_some_and(|v| v.abs() < VALIDATION_TOLERANCE))
        })
        .collect()
}

fn is_valid_root(expr: &Expr, var: &str, candidate: &Expr) -> bool {
    if !candidate.is_constant() {
        // Parametric or periodic roots cannot be checked numerically
        return true;
    }
    let value = candidate.eval_f64(&[]);
    if value.is_nan() {
        // Constant without a real value, e.g. sqrt(-1)
        return false;
    }
    if !expr.free_symbol_names().iter().all(|name| name == var) {
        return true;
    }
    if let Expr::Number(residual) = expr.subs(var, candidate) {
        return residual.is_zero();
    }
    if value.is_infinite() {
        // Beyond f64 range (10**400) and not decided exactly
        return true;
    }
    let residual = expr.eval_f64(&[(var, value)]);
    residual.is_finite() && residual.abs() <= VALIDATION_TOLERANCE * (1.0 + value.abs())
}

fn sort_numeric(roots: &mut [Expr]) {
    if roots.iter().all(|r| r.approx().is_some()) {
        roots.sort_by(|a, b| {
            let (x, y) = (a.approx().unwrap_or(0.0), b.approx().unwrap_or(0.0));
            x.total_cmp(&y)
        });
    }
}
