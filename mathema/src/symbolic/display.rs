//! String form of expressions
//!
//! Output follows the conventional CAS text form: `**` for powers, `x - 2`
//! rather than `x + (-2)`, and reciprocal factors collected into a single
//! denominator (`5*pi/6`, `1/(x - 2)`, `sqrt(2)/2`).

use super::number::{self, Rational};
use super::{Constant, Expr};
use num::{One, Signed};
use std::cmp::Ordering;
use std::fmt;

const PREC_ADD: u8 = 10;
const PREC_MUL: u8 = 20;
const PREC_POW: u8 = 30;
const PREC_ATOM: u8 = 40;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::Pi => write!(f, "pi"),
            Constant::E => write!(f, "E"),
        }
    }
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::Number(n) if n.is_negative() || !n.is_integer() => PREC_MUL,
        Expr::Number(_) | Expr::Constant(_) | Expr::Symbol(_) | Expr::Function(..) => PREC_ATOM,
        Expr::Add(_) => PREC_ADD,
        Expr::Mul(_) => PREC_MUL,
        Expr::Pow(_, exp) => match exp.as_number() {
            Some(e) if e.is_negative() => PREC_MUL,
            _ => PREC_POW,
        },
    }
}

fn render(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => number::format_rational(n),
        Expr::Constant(c) => c.to_string(),
        Expr::Symbol(s) => s.name.clone(),
        Expr::Add(terms) => render_add(terms),
        Expr::Mul(_) => render_mul(expr),
        Expr::Pow(base, exp) => render_pow(base, exp),
        Expr::Function(function, args) => {
            let args: Vec<String> = args.iter().map(render).collect();
            format!("{}({})", function.name(), args.join(", "))
        }
    }
}

fn parenthesize(expr: &Expr, min_prec: u8) -> String {
    let text = render(expr);
    if precedence(expr) < min_prec {
        format!("({})", text)
    } else {
        text
    }
}

/// Total degree over free symbols, used only for term ordering
fn degree(expr: &Expr) -> i64 {
    match expr {
        Expr::Symbol(_) => 1,
        Expr::Pow(base, exp) => match (base.as_ref(), exp.as_number()) {
            (Expr::Symbol(_), Some(e)) if e.is_integer() => {
                num::ToPrimitive::to_i64(&e.to_integer()).unwrap_or(0)
            }
            _ => 0,
        },
        Expr::Mul(factors) => factors.iter().map(degree).sum(),
        _ => 0,
    }
}

fn has_symbols(expr: &Expr) -> bool {
    expr.preorder().any(|e| matches!(e, Expr::Symbol(_)))
}

fn term_order(a: &Expr, b: &Expr) -> Ordering {
    let key = |e: &Expr| (e.as_number().is_some(), !has_symbols(e), -degree(e));
    key(a).cmp(&key(b)).then_with(|| a.cmp(b))
}

fn render_add(terms: &[Expr]) -> String {
    let mut ordered: Vec<&Expr> = terms.iter().collect();
    ordered.sort_by(|a, b| term_order(a, b));

    let mut out = String::new();
    for (i, term) in ordered.into_iter().enumerate() {
        let (coeff, _) = term.split_coefficient();
        if i == 0 {
            out.push_str(&render(term));
        } else if coeff.is_negative() {
            out.push_str(" - ");
            out.push_str(&render(&Expr::neg(term.clone())));
        } else {
            out.push_str(" + ");
            out.push_str(&render(term));
        }
    }
    out
}

fn render_mul(expr: &Expr) -> String {
    let (coeff, rest) = expr.split_coefficient();
    let factors: Vec<Expr> = match rest {
        Expr::Mul(factors) => factors,
        other => vec![other],
    };

    let mut numer: Vec<String> = Vec::new();
    let mut denom: Vec<String> = Vec::new();
    let negative = coeff.is_negative();
    let magnitude: Rational = coeff.abs();
    if !magnitude.numer().is_one() {
        numer.push(magnitude.numer().to_string());
    }
    if !magnitude.denom().is_one() {
        denom.push(magnitude.denom().to_string());
    }

    for factor in &factors {
        match factor {
            Expr::Pow(base, exp) if exp.as_number().is_some_and(|e| e.is_negative()) => {
                let flipped = Expr::pow((**base).clone(), Expr::neg((**exp).clone()));
                denom.push(parenthesize(&flipped, PREC_POW));
            }
            other => numer.push(parenthesize(other, PREC_MUL + 1)),
        }
    }

    let numer_text = if numer.is_empty() {
        "1".to_string()
    } else {
        numer.join("*")
    };
    let body = match denom.len() {
        0 => numer_text,
        1 => format!("{}/{}", numer_text, denom[0]),
        _ => format!("{}/({})", numer_text, denom.join("*")),
    };
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

fn render_pow(base: &Expr, exp: &Expr) -> String {
    if let Some(e) = exp.as_number() {
        if *e == number::integer(-1) {
            return format!("1/{}", parenthesize(base, PREC_ATOM));
        }
        if e.is_negative() {
            let flipped = Expr::pow(base.clone(), Expr::Number(-e));
            return format!("1/{}", parenthesize(&flipped, PREC_POW));
        }
    }
    format!(
        "{}**{}",
        parenthesize(base, PREC_ATOM),
        parenthesize(exp, PREC_ATOM)
    )
}
