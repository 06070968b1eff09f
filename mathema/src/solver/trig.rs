//! Basic trigonometric equations
//!
//! `f(u) = c` for `f` in {sin, cos, tan, cot} has the closed-form solution
//! families below, with `k` ranging over the integers. The families describe
//! the value of the argument `u`; the argument itself is not solved for the
//! unknown, so `sin(2*x) = 1/2` reports the values of `2*x`.

use crate::error::MathemaError;
use crate::symbolic::{Expr, Function, PERIODIC_PARAMETER};
use crate::MathemaResult;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigFunction {
    Sine,
    Cosine,
    Tangent,
    Cotangent,
}

impl TrigFunction {
    /// Head and argument of a basic trigonometric call
    pub fn of(expr: &Expr) -> Option<(TrigFunction, &Expr)> {
        let (kind, function) = match expr {
            Expr::Function(Function::Sin, _) => (TrigFunction::Sine, Function::Sin),
            Expr::Function(Function::Cos, _) => (TrigFunction::Cosine, Function::Cos),
            Expr::Function(Function::Tan, _) => (TrigFunction::Tangent, Function::Tan),
            Expr::Function(Function::Cot, _) => (TrigFunction::Cotangent, Function::Cot),
            _ => return None,
        };
        expr.function_arg(function).map(|arg| (kind, arg))
    }
}

/// Solve `lhs = rhs` when `lhs` is a bare sin/cos/tan/cot call
///
/// Returns `Ok(None)` when the equation is not of that shape, so the caller
/// can fall back to the general solver.
pub fn solve_trig(lhs: &Expr, rhs: &Expr, var: &str) -> MathemaResult<Option<Vec<Expr>>> {
    let Some((kind, arg)) = TrigFunction::of(lhs) else {
        return Ok(None);
    };
    if rhs.has(PERIODIC_PARAMETER) || rhs.has(var) {
        return Ok(None);
    }
    debug!(?kind, argument = %arg, value = %rhs, "trigonometric equation");
    families(kind, rhs).map(Some)
}

/// All `u` with `f(u) = c`, as expressions in the integer parameter `k`
pub(crate) fn families(kind: TrigFunction, c: &Expr) -> MathemaResult<Vec<Expr>> {
    let full_turn = Expr::mul(vec![Expr::integer(2), Expr::pi()]);
    let out_of_range = c.is_constant() && c.approx().is_some_and(|v| v.abs() > 1.0);

    let (offsets, period) = match kind {
        TrigFunction::Sine => {
            if out_of_range {
                return Ok(Vec::new());
            }
            let a = Expr::func(Function::Asin, c.clone());
            (vec![a.clone(), Expr::sub(Expr::pi(), a)], full_turn)
        }
        TrigFunction::Cosine => {
            if out_of_range {
                return Ok(Vec::new());
            }
            let a = Expr::func(Function::Acos, c.clone());
            (vec![a.clone(), Expr::neg(a)], full_turn)
        }
        TrigFunction::Tangent => (vec![Expr::func(Function::Atan, c.clone())], Expr::pi()),
        TrigFunction::Cotangent => {
            if c.is_zero() {
                return Err(MathemaError::DivisionByZero(
                    "cot(u) = 0 requires atan(1/0)".to_string(),
                ));
            }
            let a = Expr::func(Function::Atan, Expr::recip(c.clone()));
            (vec![a], Expr::pi())
        }
    };

    Ok(periodic_families(offsets, period))
}

/// `period*k + offset` for each offset, dropping offsets that differ from an
/// earlier one by a whole number of periods (`-π/2` and `3π/2` for sin = -1)
fn periodic_families(offsets: Vec<Expr>, period: Expr) -> Vec<Expr> {
    let mut distinct: Vec<Expr> = Vec::with_capacity(offsets.len());
    for offset in offsets {
        let repeats = distinct.iter().any(|seen| {
            let turns = Expr::div(Expr::sub(offset.clone(), seen.clone()), period.clone());
            turns.as_number().is_some_and(|n| n.is_integer())
        });
        if !repeats {
            distinct.push(offset);
        }
    }

    let turns = Expr::mul(vec![period, Expr::periodic_parameter()]);
    distinct
        .into_iter()
        .map(|offset| Expr::add(vec![turns.clone(), offset]))
        .collect()
}
