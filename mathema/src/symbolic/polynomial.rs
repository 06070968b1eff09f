//! Univariate polynomials and their exact real roots
//!
//! Roots are found with the rational root theorem plus the quadratic formula,
//! after factoring out powers of the variable and substituting `u = x**g` when
//! every exponent shares a common factor `g`. Anything that needs a general
//! cubic or quartic formula is reported as unsupported.

use super::number::{self, Rational};
use super::Expr;
use crate::error::MathemaError;
use crate::MathemaResult;
use num::{BigInt, Integer, One, Signed, ToPrimitive, Zero};

/// A polynomial in `var`; `coeffs[i]` multiplies `var**i`
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    pub var: String,
    pub coeffs: Vec<Expr>,
}

impl Polynomial {
    /// Read an (expanded) expression as a polynomial in `var`
    ///
    /// Returns `None` when `var` occurs anywhere other than in a non-negative
    /// integer power.
    pub fn from_expr(expr: &Expr, var: &str) -> Option<Polynomial> {
        let terms: Vec<&Expr> = match expr {
            Expr::Add(terms) => terms.iter().collect(),
            other => vec![other],
        };
        let mut coeffs: Vec<Vec<Expr>> = Vec::new();
        for term in terms {
            let (degree, coeff) = monomial(term, var)?;
            if coeffs.len() <= degree {
                coeffs.resize(degree + 1, Vec::new());
            }
            coeffs[degree].push(coeff);
        }
        let mut coeffs: Vec<Expr> = coeffs.into_iter().map(Expr::add).collect();
        while coeffs.last().is_some_and(Expr::is_zero) {
            coeffs.pop();
        }
        Some(Polynomial {
            var: var.to_string(),
            coeffs,
        })
    }

    /// Degree; the zero polynomial has degree 0
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficients as exact rationals, if none of them is symbolic
    pub fn rational_coefficients(&self) -> Option<Vec<Rational>> {
        self.coeffs.iter().map(|c| c.as_number().cloned()).collect()
    }

    /// All distinct real roots, sorted ascending when numeric
    ///
    /// The zero polynomial (an identity) has no isolated roots and yields an
    /// empty list.
    pub fn real_roots(&self) -> MathemaResult<Vec<Expr>> {
        if self.degree() == 0 {
            return Ok(Vec::new());
        }
        let mut roots = match self.rational_coefficients() {
            Some(coeffs) => rational_real_roots(coeffs)?,
            None => self.symbolic_roots()?,
        };
        dedupe_and_sort(&mut roots);
        Ok(roots)
    }

    fn symbolic_roots(&self) -> MathemaResult<Vec<Expr>> {
        match self.coeffs.as_slice() {
            [b, a] => Ok(vec![Expr::neg(Expr::div(b.clone(), a.clone()))]),
            [c, b, a] => {
                let discriminant = Expr::sub(
                    Expr::pow(b.clone(), Expr::integer(2)),
                    Expr::mul(vec![Expr::integer(4), a.clone(), c.clone()]),
                )
                .expand();
                if let Some(d) = discriminant.as_number() {
                    if d.is_negative() {
                        return Ok(Vec::new());
                    }
                }
                Ok(quadratic_roots(a.clone(), b.clone(), discriminant))
            }
            _ => Err(MathemaError::unsupported(format!(
                "polynomial of degree {} in {} with symbolic coefficients",
                self.degree(),
                self.var
            ))),
        }
    }
}

fn monomial(term: &Expr, var: &str) -> Option<(usize, Expr)> {
    let factors: Vec<&Expr> = match term {
        Expr::Mul(factors) => factors.iter().collect(),
        other => vec![other],
    };
    let mut degree = 0usize;
    let mut rest = Vec::new();
    for factor in factors {
        if factor.is_symbol(var) {
            degree += 1;
        } else if let Expr::Pow(base, exp) = factor {
            if base.is_symbol(var) {
                let n = exp.as_number()?;
                if !n.is_integer() || n.is_negative() {
                    return None;
                }
                degree += n.to_integer().to_usize()?;
            } else if factor.has(var) {
                return None;
            } else {
                rest.push(factor.clone());
            }
        } else if factor.has(var) {
            return None;
        } else {
            rest.push(factor.clone());
        }
    }
    Some((degree, Expr::mul(rest)))
}

fn rational_real_roots(coeffs: Vec<Rational>) -> MathemaResult<Vec<Expr>> {
    let mut roots = Vec::new();

    // Factor out var**m
    let lowest = coeffs.iter().position(|c| !c.is_zero()).unwrap_or(0);
    if lowest > 0 {
        roots.push(Expr::zero());
    }
    let coeffs = coeffs[lowest..].to_vec();
    if coeffs.len() <= 1 {
        return Ok(roots);
    }

    // Substitute u = var**g when every exponent is a multiple of g
    let g = coeffs
        .iter()
        .enumerate()
        .filter(|(_, c)| !c.is_zero())
        .fold(0usize, |acc, (i, _)| acc.gcd(&i));
    if g > 1 {
        let reduced: Vec<Rational> = coeffs.iter().step_by(g).cloned().collect();
        for u in rational_real_roots(reduced)? {
            roots.extend(real_nth_roots(&u, g));
        }
        return Ok(roots);
    }

    let mut remaining = integer_coefficients(&coeffs);
    let mut search_exhausted = false;
    while remaining.len() > 3 && !search_exhausted {
        match find_rational_root(&remaining) {
            Some(root) => {
                roots.push(Expr::Number(root.clone()));
                remaining = deflate(&remaining, &root);
            }
            None => search_exhausted = true,
        }
    }

    match remaining.as_slice() {
        [b, a] => roots.push(Expr::Number(-b / a)),
        [c, b, a] => {
            let discriminant = b * b - number::integer(4) * a * c;
            if !discriminant.is_negative() {
                roots.extend(quadratic_roots(
                    Expr::Number(a.clone()),
                    Expr::Number(b.clone()),
                    Expr::Number(discriminant),
                ));
            }
        }
        _ => {
            return Err(MathemaError::unsupported(format!(
                "polynomial of degree {} without rational roots",
                remaining.len() - 1
            )))
        }
    }
    Ok(roots)
}

fn quadratic_roots(a: Expr, b: Expr, discriminant: Expr) -> Vec<Expr> {
    let two_a = Expr::mul(vec![Expr::integer(2), a]);
    let minus_b = Expr::neg(b);
    if discriminant.is_zero() {
        return vec![Expr::div(minus_b, two_a)];
    }
    let root = Expr::sqrt(discriminant);
    vec![
        Expr::div(Expr::sub(minus_b.clone(), root.clone()), two_a.clone()).expand(),
        Expr::div(Expr::add(vec![minus_b, root]), two_a).expand(),
    ]
}

/// Real solutions of `var**n = u`
fn real_nth_roots(u: &Expr, n: usize) -> Vec<Expr> {
    let Some(value) = u.approx() else {
        return Vec::new();
    };
    let exponent = Expr::rational(1, n as i64);
    if value == 0.0 {
        return vec![Expr::zero()];
    }
    if n % 2 == 0 {
        if value < 0.0 {
            return Vec::new();
        }
        let root = Expr::pow(u.clone(), exponent);
        vec![Expr::neg(root.clone()), root]
    } else if value < 0.0 {
        vec![Expr::neg(Expr::pow(Expr::neg(u.clone()), exponent))]
    } else {
        vec![Expr::pow(u.clone(), exponent)]
    }
}

/// Scale to integer coefficients (still stored as rationals)
fn integer_coefficients(coeffs: &[Rational]) -> Vec<Rational> {
    let lcm = Rational::from_integer(number::lcm_of_denominators(coeffs));
    coeffs.iter().map(|c| c * &lcm).collect()
}

fn horner(coeffs: &[Rational], x: &Rational) -> Rational {
    coeffs
        .iter()
        .rev()
        .fold(Rational::zero(), |acc, c| acc * x + c)
}

/// Divide by `(var - root)`, dropping the zero remainder
fn deflate(coeffs: &[Rational], root: &Rational) -> Vec<Rational> {
    let mut quotient = Vec::with_capacity(coeffs.len() - 1);
    let mut carry = Rational::zero();
    for c in coeffs.iter().rev().take(coeffs.len() - 1) {
        carry = carry * root + c;
        quotient.push(carry.clone());
    }
    quotient.reverse();
    quotient
}

fn find_rational_root(coeffs: &[Rational]) -> Option<Rational> {
    let constant: BigInt = coeffs.first()?.to_integer();
    let leading: BigInt = coeffs.last()?.to_integer();
    if constant.is_zero() {
        return Some(Rational::zero());
    }
    let numerators = number::divisors(&constant)?;
    let denominators = number::divisors(&leading)?;
    for q in &denominators {
        for p in &numerators {
            for sign in [BigInt::one(), -BigInt::one()] {
                let candidate = Rational::new(&sign * p, q.clone());
                if horner(coeffs, &candidate).is_zero() {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

fn dedupe_and_sort(roots: &mut Vec<Expr>) {
    let mut seen = Vec::with_capacity(roots.len());
    roots.retain(|r| {
        if seen.contains(r) {
            false
        } else {
            seen.push(r.clone());
            true
        }
    });
    let approx: Option<Vec<f64>> = roots.iter().map(Expr::approx).collect();
    if approx.is_some() {
        roots.sort_by(|a, b| {
            let (x, y) = (a.approx().unwrap_or(0.0), b.approx().unwrap_or(0.0));
            x.total_cmp(&y)
        });
    }
}
