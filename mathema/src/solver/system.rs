//! Systems of equations by substitution
//!
//! An equation that is linear in one of its unknowns (or else the first one)
//! is solved for that unknown, the result is substituted into the remaining
//! equations and the reduced system is solved recursively. Each branch of the
//! recursion is one solution; values found deeper are substituted back on the
//! way up.

use super::equation::{find_roots, Solution};
use super::SolveContext;
use crate::ast::Equation;
use crate::symbolic::{Expr, Polynomial, PERIODIC_PARAMETER};
use crate::MathemaResult;
use tracing::{debug, trace};

/// Solve all equations simultaneously over every free symbol they contain
pub fn solve_system(equations: &[Equation], ctx: &SolveContext) -> MathemaResult<Vec<Solution>> {
    let residuals: Vec<Expr> = equations.iter().map(Equation::residual).collect();
    debug!(equations = residuals.len(), "solving system");
    let mut solutions = eliminate(residuals, ctx)?;
    solutions.dedup();
    Ok(solutions)
}

fn eliminate(residuals: Vec<Expr>, ctx: &SolveContext) -> MathemaResult<Vec<Solution>> {
    let ctx = ctx.descend()?;

    let mut pending = Vec::with_capacity(residuals.len());
    for residual in residuals {
        if !residual.is_constant() {
            pending.push(residual);
        } else if !vanishes(&residual) {
            trace!(%residual, "inconsistent branch");
            return Ok(Vec::new());
        }
    }
    let Some((index, unknown)) = pick_pivot(&pending) else {
        // Only the periodic parameter is left; nothing to eliminate
        return Ok(vec![Solution::new()]);
    };
    let pivot = pending.remove(index);
    trace!(%pivot, unknown = %unknown, "eliminating");

    let mut solutions = Vec::new();
    for root in find_roots(&pivot, &unknown, &ctx)? {
        let reduced: Vec<Expr> = pending.iter().map(|r| r.subs(&unknown, &root)).collect();
        for mut solution in eliminate(reduced, &ctx)? {
            let value = solution
                .iter()
                .fold(root.clone(), |value, (name, known)| value.subs(name, known));
            solution.insert(unknown.clone(), value);
            if !solutions.contains(&solution) {
                solutions.push(solution);
            }
        }
    }
    Ok(solutions)
}

/// The first equation linear in one of its unknowns, solved for that unknown;
/// otherwise the first equation and its first unknown
fn pick_pivot(residuals: &[Expr]) -> Option<(usize, String)> {
    let mut fallback = None;
    for (index, residual) in residuals.iter().enumerate() {
        let names: Vec<String> = residual
            .free_symbol_names()
            .into_iter()
            .filter(|name| name != PERIODIC_PARAMETER)
            .collect();
        let expanded = residual.expand();
        if let Some(name) = names
            .iter()
            .find(|name| Polynomial::from_expr(&expanded, name).is_some_and(|p| p.degree() == 1))
        {
            return Some((index, name.clone()));
        }
        if fallback.is_none() {
            fallback = names.into_iter().next().map(|name| (index, name));
        }
    }
    fallback
}

fn vanishes(residual: &Expr) -> bool {
    residual.is_zero() || residual.approx().is_some_and(|v| v.abs() < 1e-9)
}
