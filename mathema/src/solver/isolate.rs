//! Algebraic isolation of a single unknown
//!
//! Given `expr = target` where the unknown occurs in exactly one operand of
//! each layer, peel the layers off one by one and apply the inverse operation
//! to the target: `log(x - 3) = 1` → `x - 3 = E` → `x = E + 3`.
//!
//! Non-injective layers branch (`u**2 = t` gives `±sqrt(t)`, `sin(u) = t`
//! gives two periodic families). Branches that are impossible over ℝ
//! (`sqrt(u) = -1`) are cut as soon as the target is a known constant.

use super::equation::polynomial_zeros;
use super::trig::{families, TrigFunction};
use super::SolveContext;
use crate::error::MathemaError;
use crate::symbolic::{Constant, Expr, Function};
use crate::MathemaResult;
use num::{Integer, Signed};

/// Candidate values of `var` with `expr = target`
pub fn isolate(
    expr: &Expr,
    var: &str,
    target: Expr,
    ctx: &SolveContext,
) -> MathemaResult<Vec<Expr>> {
    let ctx = ctx.descend()?;

    if expr.is_symbol(var) {
        return Ok(vec![target]);
    }
    if !expr.has(var) {
        return Ok(Vec::new());
    }

    match expr {
        Expr::Add(terms) => {
            let (with, without): (Vec<&Expr>, Vec<&Expr>) =
                terms.iter().partition(|t| t.has(var));
            if with.len() == 1 {
                let rest = Expr::add(without.into_iter().cloned().collect());
                return isolate(with[0], var, Expr::sub(target, rest), &ctx);
            }
            fallback(expr, var, target, &ctx)
        }
        Expr::Mul(factors) => {
            let (with, without): (Vec<&Expr>, Vec<&Expr>) =
                factors.iter().partition(|f| f.has(var));
            if with.len() == 1 {
                let rest = Expr::mul(without.into_iter().cloned().collect());
                return isolate(with[0], var, Expr::div(target, rest), &ctx);
            }
            if target.is_zero() {
                // Zero product: some factor vanishes
                let mut out = Vec::new();
                for factor in with {
                    out.extend(isolate(factor, var, Expr::zero(), &ctx)?);
                }
                return Ok(out);
            }
            fallback(expr, var, target, &ctx)
        }
        Expr::Pow(base, exp) => {
            let base_has = base.has(var);
            let exp_has = exp.has(var);
            if base_has && !exp_has {
                let mut out = Vec::new();
                for value in invert_power(exp, &target) {
                    out.extend(isolate(base, var, value, &ctx)?);
                }
                Ok(out)
            } else if exp_has && !base_has {
                // b**u = t  =>  u = log(t)/log(b)
                if is_known_negative_or_zero(&target) {
                    return Ok(Vec::new());
                }
                let value = match base.as_ref() {
                    Expr::Constant(Constant::E) => Expr::log(target),
                    other => Expr::log_base(target, other.clone()),
                };
                isolate(exp, var, value, &ctx)
            } else {
                fallback(expr, var, target, &ctx)
            }
        }
        Expr::Function(function, args) if args.len() == 1 => {
            let inner = &args[0];
            let mut out = Vec::new();
            for value in invert_function(*function, expr, &target)? {
                out.extend(isolate(inner, var, value, &ctx)?);
            }
            Ok(out)
        }
        _ => fallback(expr, var, target, &ctx),
    }
}

/// The unknown occurs more than once: only polynomial shapes are solvable
fn fallback(expr: &Expr, var: &str, target: Expr, ctx: &SolveContext) -> MathemaResult<Vec<Expr>> {
    let residual = Expr::sub(expr.clone(), target);
    match polynomial_zeros(&residual, var, ctx)? {
        Some(roots) => Ok(roots),
        None => Err(MathemaError::unsupported(format!(
            "cannot isolate {} in {} = 0",
            var, residual
        ))),
    }
}

fn known_value(expr: &Expr) -> Option<f64> {
    if expr.is_constant() {
        expr.approx()
    } else {
        None
    }
}

fn is_known_negative(expr: &Expr) -> bool {
    known_value(expr).is_some_and(|v| v < 0.0)
}

fn is_known_negative_or_zero(expr: &Expr) -> bool {
    known_value(expr).is_some_and(|v| v <= 0.0)
}

/// Values of `u` with `u**exp = target`
fn invert_power(exp: &Expr, target: &Expr) -> Vec<Expr> {
    let Some(p) = exp.as_number() else {
        // Symbolic constant exponent: principal root only
        return vec![Expr::pow(target.clone(), Expr::recip(exp.clone()))];
    };
    if target.is_zero() {
        return if p.is_positive() {
            vec![Expr::zero()]
        } else {
            Vec::new()
        };
    }
    let inverse = Expr::Number(p.recip());
    let numer_even = p.numer().is_even();
    let denom_even = p.denom().is_even();
    let negative_target = is_known_negative(target);

    if numer_even {
        // u**2 = t: t >= 0 and u = ±t**(1/2)
        if negative_target {
            return Vec::new();
        }
        let root = Expr::pow(target.clone(), inverse);
        return vec![Expr::neg(root.clone()), root];
    }
    if denom_even {
        // u**(1/2) = t needs t >= 0
        if negative_target {
            return Vec::new();
        }
        return vec![Expr::pow(target.clone(), inverse)];
    }
    if negative_target {
        // Odd root of a negative number stays real
        return vec![Expr::neg(Expr::pow(Expr::neg(target.clone()), inverse))];
    }
    vec![Expr::pow(target.clone(), inverse)]
}

/// Values of the argument `u` with `f(u) = target`
fn invert_function(function: Function, call: &Expr, target: &Expr) -> MathemaResult<Vec<Expr>> {
    let value = known_value(target);
    let values = match function {
        Function::Sqrt => {
            if is_known_negative(target) {
                Vec::new()
            } else {
                vec![Expr::pow(target.clone(), Expr::integer(2))]
            }
        }
        Function::Log => vec![Expr::pow(Expr::e(), target.clone())],
        Function::Exp => {
            if is_known_negative_or_zero(target) {
                Vec::new()
            } else {
                vec![Expr::log(target.clone())]
            }
        }
        Function::Abs => {
            if is_known_negative(target) {
                Vec::new()
            } else if target.is_zero() {
                vec![Expr::zero()]
            } else {
                vec![Expr::neg(target.clone()), target.clone()]
            }
        }
        Function::Sin | Function::Cos | Function::Tan | Function::Cot => {
            match TrigFunction::of(call) {
                Some((kind, _)) => families(kind, target)?,
                None => Vec::new(),
            }
        }
        Function::Asin => match value {
            Some(v) if v.abs() > std::f64::consts::FRAC_PI_2 => Vec::new(),
            _ => vec![Expr::func(Function::Sin, target.clone())],
        },
        Function::Acos => match value {
            Some(v) if !(0.0..=std::f64::consts::PI).contains(&v) => Vec::new(),
            _ => vec![Expr::func(Function::Cos, target.clone())],
        },
        Function::Atan => match value {
            Some(v) if v.abs() >= std::f64::consts::FRAC_PI_2 => Vec::new(),
            _ => vec![Expr::func(Function::Tan, target.clone())],
        },
    };
    Ok(values)
}
