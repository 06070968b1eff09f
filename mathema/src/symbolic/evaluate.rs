//! Floating-point evaluation
//!
//! Used for sign sampling in the inequality solver, for ordering numeric
//! roots and for validating solver candidates. Undefined values (log of a
//! non-positive number, division by zero, even roots of negatives) come out
//! as NaN and never as a panic.

use super::number;
use super::{Constant, Expr, Function};
use num::Integer;

impl Expr {
    /// Evaluate with the given symbol bindings; unbound symbols yield NaN
    pub fn eval_f64(&self, bindings: &[(&str, f64)]) -> f64 {
        match self {
            Expr::Number(n) => number::to_f64(n),
            Expr::Constant(Constant::Pi) => std::f64::consts::PI,
            Expr::Constant(Constant::E) => std::f64::consts::E,
            Expr::Symbol(s) => bindings
                .iter()
                .find(|(name, _)| *name == s.name)
                .map(|(_, value)| *value)
                .unwrap_or(f64::NAN),
            Expr::Add(terms) => terms.iter().map(|t| t.eval_f64(bindings)).sum(),
            Expr::Mul(factors) => factors.iter().map(|f| f.eval_f64(bindings)).product(),
            Expr::Pow(base, exp) => {
                let b = base.eval_f64(bindings);
                let e = exp.eval_f64(bindings);
                power(b, e, exp.as_number())
            }
            Expr::Function(function, args) => {
                let values: Vec<f64> = args.iter().map(|a| a.eval_f64(bindings)).collect();
                match values.as_slice() {
                    [value] => apply(*function, *value),
                    _ => f64::NAN,
                }
            }
        }
    }

    /// Numeric value of a constant expression, if it is finite
    pub fn approx(&self) -> Option<f64> {
        let value = self.eval_f64(&[]);
        value.is_finite().then_some(value)
    }
}

fn power(base: f64, exp: f64, exact_exp: Option<&number::Rational>) -> f64 {
    if base == 0.0 && exp < 0.0 {
        return f64::NAN;
    }
    if base < 0.0 {
        // Real odd roots of negatives, e.g. (-8)**(1/3) = -2
        if let Some(e) = exact_exp {
            if !e.is_integer() {
                if e.denom().is_odd() {
                    let magnitude = (-base).powf(exp);
                    return if e.numer().is_odd() { -magnitude } else { magnitude };
                }
                return f64::NAN;
            }
        }
    }
    base.powf(exp)
}

fn apply(function: Function, x: f64) -> f64 {
    match function {
        Function::Sin => x.sin(),
        Function::Cos => x.cos(),
        Function::Tan => {
            if x.cos().abs() < 1e-12 {
                f64::NAN
            } else {
                x.tan()
            }
        }
        Function::Cot => {
            let s = x.sin();
            if s.abs() < 1e-12 {
                f64::NAN
            } else {
                x.cos() / s
            }
        }
        Function::Asin => x.asin(),
        Function::Acos => x.acos(),
        Function::Atan => x.atan(),
        Function::Log => {
            if x > 0.0 {
                x.ln()
            } else {
                f64::NAN
            }
        }
        Function::Exp => x.exp(),
        Function::Sqrt => x.sqrt(),
        Function::Abs => x.abs(),
    }
}
