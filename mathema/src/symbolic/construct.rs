//! Canonicalizing constructors
//!
//! Sums and products are flattened, numeric parts are folded exactly, like
//! terms (`2*x + 3*x`) and like bases (`x * x**2`) are collected, and a
//! rational coefficient is distributed over a single sum (`2*(x + 1)` becomes
//! `2*x + 2`). Functions evaluate exactly at the handful of arguments the
//! solvers need (standard inverse trig values, perfect squares, `log(E)`).

use super::number::{self, Rational};
use super::{Constant, Expr, Function, Symbol, PERIODIC_PARAMETER};
use num::{BigInt, One, Signed, Zero};

impl Expr {
    pub fn number(value: Rational) -> Expr {
        Expr::Number(value)
    }

    pub fn integer(value: i64) -> Expr {
        Expr::Number(number::integer(value))
    }

    pub fn rational(numer: i64, denom: i64) -> Expr {
        Expr::Number(number::rational(numer, denom))
    }

    pub fn zero() -> Expr {
        Expr::Number(Rational::zero())
    }

    pub fn one() -> Expr {
        Expr::Number(Rational::one())
    }

    pub fn pi() -> Expr {
        Expr::Constant(Constant::Pi)
    }

    pub fn e() -> Expr {
        Expr::Constant(Constant::E)
    }

    pub fn symbol(name: impl Into<String>) -> Expr {
        Expr::Symbol(Symbol {
            name: name.into(),
            integer: false,
        })
    }

    pub fn integer_symbol(name: impl Into<String>) -> Expr {
        Expr::Symbol(Symbol {
            name: name.into(),
            integer: true,
        })
    }

    /// The integer-typed `k` of periodic solution families
    pub fn periodic_parameter() -> Expr {
        Expr::integer_symbol(PERIODIC_PARAMETER)
    }

    pub fn add(terms: Vec<Expr>) -> Expr {
        let mut flat = Vec::with_capacity(terms.len());
        flatten_into(terms, &mut flat, |e| matches!(e, Expr::Add(_)));

        let mut constant = Rational::zero();
        let mut collected: Vec<(Expr, Rational)> = Vec::new();
        for term in flat {
            match term {
                Expr::Number(n) => constant += n,
                other => {
                    let (coeff, rest) = other.split_coefficient();
                    match collected.iter_mut().find(|(r, _)| *r == rest) {
                        Some(slot) => slot.1 += coeff,
                        None => collected.push((rest, coeff)),
                    }
                }
            }
        }

        let mut out: Vec<Expr> = collected
            .into_iter()
            .filter(|(_, coeff)| !coeff.is_zero())
            .map(|(rest, coeff)| scaled(coeff, rest))
            .collect();
        if !constant.is_zero() {
            out.push(Expr::Number(constant));
        }
        out.sort();

        match out.len() {
            0 => Expr::zero(),
            1 => out.remove(0),
            _ => Expr::Add(out),
        }
    }

    pub fn mul(factors: Vec<Expr>) -> Expr {
        let mut flat = Vec::with_capacity(factors.len());
        flatten_into(factors, &mut flat, |e| matches!(e, Expr::Mul(_)));

        let mut coeff = Rational::one();
        let mut powers: Vec<(Expr, Expr)> = Vec::new();
        for factor in flat {
            match factor {
                Expr::Number(n) => coeff *= n,
                other => {
                    let (base, exp) = other.into_base_exp();
                    match powers.iter_mut().find(|(b, _)| *b == base) {
                        Some(slot) => slot.1 = Expr::add(vec![slot.1.clone(), exp]),
                        None => powers.push((base, exp)),
                    }
                }
            }
        }
        if coeff.is_zero() {
            return Expr::zero();
        }

        let mut out = Vec::with_capacity(powers.len());
        for (base, exp) in powers {
            match Expr::pow(base, exp) {
                Expr::Number(n) => coeff *= n,
                Expr::Mul(inner) => {
                    for f in inner {
                        match f {
                            Expr::Number(n) => coeff *= n,
                            other => out.push(other),
                        }
                    }
                }
                other => out.push(other),
            }
        }
        let mut factors = Vec::with_capacity(out.len());
        for factor in out {
            match absorb_coefficient(factor, &mut coeff) {
                Expr::Number(n) => coeff *= n,
                other => factors.push(other),
            }
        }
        let mut out = factors;
        if coeff.is_zero() {
            return Expr::zero();
        }
        if out.is_empty() {
            return Expr::Number(coeff);
        }
        if out.len() == 1 {
            if coeff.is_one() {
                return out.remove(0);
            }
            if let Expr::Add(terms) = &out[0] {
                let distributed = terms
                    .iter()
                    .map(|t| Expr::mul(vec![Expr::Number(coeff.clone()), t.clone()]))
                    .collect();
                return Expr::add(distributed);
            }
        }

        out.sort();
        if !coeff.is_one() {
            out.insert(0, Expr::Number(coeff));
        }
        Expr::Mul(out)
    }

    pub fn pow(base: Expr, exp: Expr) -> Expr {
        if exp.is_zero() || base.is_one() {
            return Expr::one();
        }
        if exp.is_one() {
            return base;
        }

        if let Expr::Number(e) = &exp {
            if number::is_half(e) {
                return Expr::sqrt(base);
            }
            if number::is_half(&-e) {
                return Expr::recip(Expr::sqrt(base));
            }
        }

        match (&base, &exp) {
            (Expr::Number(b), Expr::Number(e)) => {
                if e.is_integer() {
                    if let Some(value) = number::pow_integer(b, e) {
                        return Expr::Number(value);
                    }
                } else if b.is_zero() && e.is_positive() {
                    return Expr::zero();
                } else if let Some(root) = number::rational_root(b, e.denom()) {
                    // 8**(2/3) = (8**(1/3))**2
                    let numer = Expr::Number(Rational::from_integer(e.numer().clone()));
                    return Expr::pow(Expr::Number(root), numer);
                }
            }
            (Expr::Pow(inner_base, inner_exp), Expr::Number(e)) if e.is_integer() => {
                let combined = Expr::mul(vec![(**inner_exp).clone(), exp.clone()]);
                return Expr::pow((**inner_base).clone(), combined);
            }
            (Expr::Mul(factors), Expr::Number(e)) if e.is_integer() => {
                let distributed = factors
                    .iter()
                    .map(|f| Expr::pow(f.clone(), exp.clone()))
                    .collect();
                return Expr::mul(distributed);
            }
            (Expr::Function(Function::Sqrt, args), Expr::Number(e)) if args.len() == 1 => {
                let half = e / number::integer(2);
                if half.is_integer() {
                    return Expr::pow(args[0].clone(), Expr::Number(half));
                }
                // sqrt(n)**e = n**((e - 1)/2) * sqrt(n) keeps radicals in numerators
                if let Expr::Number(n) = &args[0] {
                    if e.is_integer() && n.is_positive() {
                        let outer = (e - number::one()) / number::integer(2);
                        if let Some(factor) = number::pow_integer(n, &outer) {
                            return Expr::mul(vec![Expr::Number(factor), base.clone()]);
                        }
                    }
                }
            }
            (Expr::Constant(Constant::E), Expr::Function(Function::Log, args))
                if args.len() == 1 =>
            {
                return args[0].clone();
            }
            (Expr::Constant(Constant::E), Expr::Mul(factors)) => {
                // E**(3*log(2)) = 2**3
                if let Some((arg, rest)) = split_log_factor(factors) {
                    return Expr::pow(arg, rest);
                }
            }
            _ => {}
        }

        Expr::Pow(Box::new(base), Box::new(exp))
    }

    pub fn neg(expr: Expr) -> Expr {
        Expr::mul(vec![Expr::integer(-1), expr])
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
        Expr::add(vec![lhs, Expr::neg(rhs)])
    }

    pub fn div(numer: Expr, denom: Expr) -> Expr {
        Expr::mul(vec![numer, Expr::recip(denom)])
    }

    pub fn recip(expr: Expr) -> Expr {
        Expr::pow(expr, Expr::integer(-1))
    }

    pub fn func(function: Function, arg: Expr) -> Expr {
        match function {
            Function::Exp => Expr::pow(Expr::e(), arg),
            Function::Sqrt => Expr::sqrt(arg),
            Function::Log => Expr::log(arg),
            Function::Sin | Function::Cos | Function::Tan | Function::Cot => {
                trig_at_special_angle(function, &arg)
                    .unwrap_or_else(|| Expr::Function(function, vec![arg]))
            }
            Function::Asin => {
                asin_exact(&arg).unwrap_or_else(|| Expr::Function(function, vec![arg]))
            }
            Function::Acos => match asin_exact(&arg) {
                Some(angle) => Expr::sub(Expr::div(Expr::pi(), Expr::integer(2)), angle),
                None => Expr::Function(function, vec![arg]),
            },
            Function::Atan => {
                atan_exact(&arg).unwrap_or_else(|| Expr::Function(function, vec![arg]))
            }
            Function::Abs => match arg {
                Expr::Number(n) => Expr::Number(n.abs()),
                other => Expr::Function(Function::Abs, vec![other]),
            },
        }
    }

    pub fn sqrt(arg: Expr) -> Expr {
        if let Expr::Number(n) = &arg {
            if !n.is_negative() {
                if let Some(root) = number::rational_sqrt(n) {
                    return Expr::Number(root);
                }
                let product = n.numer() * n.denom();
                let (outside, inside) = number::split_square_factor(&product);
                if outside.is_one() && n.denom().is_one() {
                    return Expr::Function(Function::Sqrt, vec![arg]);
                }
                let coeff = Rational::new(outside, n.denom().clone());
                let radical = Expr::Function(
                    Function::Sqrt,
                    vec![Expr::Number(Rational::from_integer(inside))],
                );
                return Expr::mul(vec![Expr::Number(coeff), radical]);
            }
        }
        Expr::Function(Function::Sqrt, vec![arg])
    }

    pub fn log(arg: Expr) -> Expr {
        match &arg {
            Expr::Number(n) if n.is_one() => Expr::zero(),
            Expr::Constant(Constant::E) => Expr::one(),
            Expr::Pow(base, exp) if matches!(**base, Expr::Constant(Constant::E)) => {
                (**exp).clone()
            }
            _ => Expr::Function(Function::Log, vec![arg]),
        }
    }

    /// `log(arg, base)` as the change of base `log(arg) / log(base)`
    pub fn log_base(arg: Expr, base: Expr) -> Expr {
        if let (Expr::Number(a), Expr::Number(b)) = (&arg, &base) {
            if let Some(n) = exact_integer_log(a, b) {
                return Expr::integer(n);
            }
        }
        Expr::div(Expr::log(arg), Expr::log(base))
    }

    /// Split off the rational coefficient: `-3*x*y` → `(-3, x*y)`
    pub fn split_coefficient(&self) -> (Rational, Expr) {
        match self {
            Expr::Number(n) => (n.clone(), Expr::one()),
            Expr::Mul(factors) => match factors.first() {
                Some(Expr::Number(n)) => {
                    let rest = &factors[1..];
                    let rest = if rest.len() == 1 {
                        rest[0].clone()
                    } else {
                        Expr::Mul(rest.to_vec())
                    };
                    (n.clone(), rest)
                }
                _ => (Rational::one(), self.clone()),
            },
            _ => (Rational::one(), self.clone()),
        }
    }

    /// `(base, exponent)` view used when collecting like bases
    pub fn as_base_exp(&self) -> (Expr, Expr) {
        self.clone().into_base_exp()
    }

    fn into_base_exp(self) -> (Expr, Expr) {
        match self {
            Expr::Pow(base, exp) => (*base, *exp),
            other => (other, Expr::one()),
        }
    }
}

fn flatten_into(items: Vec<Expr>, out: &mut Vec<Expr>, nested: fn(&Expr) -> bool) {
    for item in items {
        if nested(&item) {
            match item {
                Expr::Add(inner) | Expr::Mul(inner) => flatten_into(inner, out, nested),
                other => out.push(other),
            }
        } else {
            out.push(item);
        }
    }
}

/// Rebuild `coeff * rest` for an already canonical `rest`
fn scaled(coeff: Rational, rest: Expr) -> Expr {
    if coeff.is_one() {
        return rest;
    }
    match rest {
        Expr::Number(n) => Expr::Number(coeff * n),
        Expr::Mul(mut factors) => {
            factors.insert(0, Expr::Number(coeff));
            Expr::Mul(factors)
        }
        other => Expr::Mul(vec![Expr::Number(coeff), other]),
    }
}

/// Move powers of an integer base out of the coefficient and into its
/// exponent: `2**1000 / 2` becomes `2**999`
fn absorb_coefficient(factor: Expr, coeff: &mut Rational) -> Expr {
    let (base, exp) = match &factor {
        Expr::Pow(base, exp) => match (&**base, &**exp) {
            (Expr::Number(b), Expr::Number(e))
                if b.is_integer() && e.is_integer() && *b > Rational::one() =>
            {
                (b.to_integer(), e.clone())
            }
            _ => return factor,
        },
        _ => return factor,
    };

    let mut numer = coeff.numer().clone();
    let mut denom = coeff.denom().clone();
    let mut shift = BigInt::zero();
    while !numer.is_zero() && (&numer % &base).is_zero() {
        numer /= &base;
        shift += 1;
    }
    while (&denom % &base).is_zero() {
        denom /= &base;
        shift -= 1;
    }
    if shift.is_zero() {
        return factor;
    }
    *coeff = Rational::new(numer, denom);
    Expr::pow(
        Expr::Number(Rational::from_integer(base)),
        Expr::Number(exp + Rational::from_integer(shift)),
    )
}

/// `(a, c)` for a product `c*log(a)` with exactly one logarithm of a
/// positive or symbolic argument
fn split_log_factor(factors: &[Expr]) -> Option<(Expr, Expr)> {
    let mut logs = factors
        .iter()
        .enumerate()
        .filter(|(_, f)| matches!(f, Expr::Function(Function::Log, args) if args.len() == 1));
    let (index, log) = logs.next()?;
    if logs.next().is_some() {
        return None;
    }
    let arg = log.args().first().map(|a| (*a).clone())?;
    if matches!(&arg, Expr::Number(n) if !n.is_positive()) {
        return None;
    }
    let rest = factors
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, f)| f.clone())
        .collect();
    Some((arg, Expr::mul(rest)))
}

/// `n` with `base**n = value` for a small integer `n`
fn exact_integer_log(value: &Rational, base: &Rational) -> Option<i64> {
    const MAX_EXACT_LOG: i64 = 64;
    if !value.is_positive() || !base.is_positive() || base.is_one() {
        return None;
    }
    (-MAX_EXACT_LOG..=MAX_EXACT_LOG)
        .find(|n| number::pow_integer(base, &number::integer(*n)).as_ref() == Some(value))
}

fn pi_times(numer: i64, denom: i64) -> Expr {
    Expr::mul(vec![Expr::rational(numer, denom), Expr::pi()])
}

fn half_sqrt(n: i64) -> Expr {
    Expr::mul(vec![Expr::rational(1, 2), Expr::sqrt(Expr::integer(n))])
}

/// Strip a negative coefficient: returns the positive part when `arg` is negative
fn negated_if_negative(arg: &Expr) -> Option<Expr> {
    let (coeff, _) = arg.split_coefficient();
    if coeff.is_negative() {
        Some(Expr::neg(arg.clone()))
    } else {
        None
    }
}

fn asin_exact(arg: &Expr) -> Option<Expr> {
    if let Some(positive) = negated_if_negative(arg) {
        return asin_exact(&positive).map(Expr::neg);
    }
    let table = [
        (Expr::zero(), Expr::zero()),
        (Expr::rational(1, 2), pi_times(1, 6)),
        (half_sqrt(2), pi_times(1, 4)),
        (half_sqrt(3), pi_times(1, 3)),
        (Expr::one(), pi_times(1, 2)),
    ];
    table
        .into_iter()
        .find(|(value, _)| value == arg)
        .map(|(_, angle)| angle)
}

fn atan_exact(arg: &Expr) -> Option<Expr> {
    if let Some(positive) = negated_if_negative(arg) {
        return atan_exact(&positive).map(Expr::neg);
    }
    let third_sqrt3 = Expr::mul(vec![Expr::rational(1, 3), Expr::sqrt(Expr::integer(3))]);
    let table = [
        (Expr::zero(), Expr::zero()),
        (third_sqrt3, pi_times(1, 6)),
        (Expr::one(), pi_times(1, 4)),
        (Expr::sqrt(Expr::integer(3)), pi_times(1, 3)),
    ];
    table
        .into_iter()
        .find(|(value, _)| value == arg)
        .map(|(_, angle)| angle)
}

/// Exact values at integer multiples of π (and zero)
fn trig_at_special_angle(function: Function, arg: &Expr) -> Option<Expr> {
    let multiple: BigInt = if arg.is_zero() {
        BigInt::zero()
    } else {
        match arg.split_coefficient() {
            (coeff, Expr::Constant(Constant::Pi)) if coeff.is_integer() => coeff.to_integer(),
            _ => return None,
        }
    };
    let even = (&multiple % BigInt::from(2)).is_zero();
    match function {
        Function::Sin | Function::Tan => Some(Expr::zero()),
        Function::Cos => Some(if even { Expr::one() } else { Expr::integer(-1) }),
        _ => None,
    }
}
