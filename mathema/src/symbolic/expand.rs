//! Expansion and numerator/denominator splitting

use super::number::Rational;
use super::Expr;
use num::{Signed, ToPrimitive};

/// Default cap on `(a + b)**n` expansion when no limit is supplied
pub const DEFAULT_MAX_EXPANDED_POWER: usize = 24;

/// Default cap on the number of terms a single expansion may produce
pub const DEFAULT_MAX_EXPANDED_TERMS: usize = 4096;

/// Raised when multiplying out would produce more than the allowed number of
/// terms; carries the size that was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooManyTerms(pub usize);

impl Expr {
    /// Distribute products over sums and expand small positive integer powers
    ///
    /// An expansion that would exceed [`DEFAULT_MAX_EXPANDED_TERMS`] terms is
    /// abandoned and the expression is returned as it was.
    pub fn expand(&self) -> Expr {
        self.expand_bounded(DEFAULT_MAX_EXPANDED_POWER, DEFAULT_MAX_EXPANDED_TERMS)
            .unwrap_or_else(|_| self.clone())
    }

    /// As [`Expr::expand`], leaving powers above `max_power` untouched and
    /// failing once more than `max_terms` terms would be produced
    pub fn expand_bounded(&self, max_power: usize, max_terms: usize) -> Result<Expr, TooManyTerms> {
        let expand = |e: &Expr| e.expand_bounded(max_power, max_terms);
        match self {
            Expr::Number(_) | Expr::Constant(_) | Expr::Symbol(_) => Ok(self.clone()),
            Expr::Add(terms) => {
                let expanded = terms.iter().map(expand).collect::<Result<Vec<_>, _>>()?;
                Ok(Expr::add(expanded))
            }
            Expr::Mul(factors) => {
                let expanded = factors.iter().map(expand).collect::<Result<Vec<_>, _>>()?;
                distribute(expanded, max_terms)
            }
            Expr::Pow(base, exp) => {
                let base = expand(base)?;
                let exp = expand(exp)?;
                match (&base, small_positive_integer(&exp, max_power)) {
                    (Expr::Add(_), Some(n)) => distribute(vec![base.clone(); n], max_terms),
                    _ => Ok(Expr::pow(base, exp)),
                }
            }
            Expr::Function(function, args) => {
                let mut args = args.iter().map(expand).collect::<Result<Vec<_>, _>>()?;
                if args.len() == 1 {
                    Ok(Expr::func(*function, args.remove(0)))
                } else {
                    Ok(Expr::Function(*function, args))
                }
            }
        }
    }

    /// Split into `(numerator, denominator)` over a common denominator
    ///
    /// `1/(x - 2) - 3` becomes `(-3*x + 7, x - 2)`. The parts are canonical but
    /// not expanded.
    pub fn as_numer_denom(&self) -> (Expr, Expr) {
        match self {
            Expr::Number(n) => (
                Expr::Number(Rational::from_integer(n.numer().clone())),
                Expr::Number(Rational::from_integer(n.denom().clone())),
            ),
            Expr::Add(terms) => {
                let mut acc = (Expr::zero(), Expr::one());
                for term in terms {
                    let (n, d) = term.as_numer_denom();
                    acc = if acc.1 == d {
                        (Expr::add(vec![acc.0, n]), d)
                    } else {
                        let numer = Expr::add(vec![
                            Expr::mul(vec![acc.0, d.clone()]),
                            Expr::mul(vec![n, acc.1.clone()]),
                        ]);
                        (numer, Expr::mul(vec![acc.1, d]))
                    };
                }
                acc
            }
            Expr::Mul(factors) => {
                let mut numer = Vec::with_capacity(factors.len());
                let mut denom = Vec::new();
                for factor in factors {
                    let (n, d) = factor.as_numer_denom();
                    numer.push(n);
                    denom.push(d);
                }
                (Expr::mul(numer), Expr::mul(denom))
            }
            Expr::Pow(base, exp) => match exp.as_number() {
                Some(e) if e.is_integer() => {
                    let (n, d) = base.as_numer_denom();
                    if e.is_negative() {
                        let flipped = Expr::Number(-e);
                        (Expr::pow(d, flipped.clone()), Expr::pow(n, flipped))
                    } else {
                        (Expr::pow(n, exp.as_ref().clone()), Expr::pow(d, exp.as_ref().clone()))
                    }
                }
                Some(e) if e.is_negative() => (
                    Expr::one(),
                    Expr::pow(base.as_ref().clone(), Expr::Number(-e)),
                ),
                _ => (self.clone(), Expr::one()),
            },
            _ => (self.clone(), Expr::one()),
        }
    }
}

fn small_positive_integer(exp: &Expr, max_power: usize) -> Option<usize> {
    let e = exp.as_number()?;
    if !e.is_integer() || !e.is_positive() {
        return None;
    }
    let n = e.to_integer().to_usize()?;
    (n <= max_power).then_some(n)
}

/// Multiply out a product whose factors may be sums
///
/// Like terms are collected after every factor, so `(x + 1)**n` never holds
/// more than `n + 1` terms at a time.
fn distribute(factors: Vec<Expr>, max_terms: usize) -> Result<Expr, TooManyTerms> {
    let mut terms: Vec<Expr> = vec![Expr::one()];
    for factor in factors {
        let parts: Vec<Expr> = match factor {
            Expr::Add(inner) => inner,
            other => vec![other],
        };
        let size = terms.len().saturating_mul(parts.len());
        if size > max_terms {
            return Err(TooManyTerms(size));
        }
        let mut next = Vec::with_capacity(size);
        for t in &terms {
            for p in &parts {
                next.push(Expr::mul(vec![t.clone(), p.clone()]));
            }
        }
        terms = match Expr::add(next) {
            Expr::Add(collected) => collected,
            other => vec![other],
        };
    }
    Ok(Expr::add(terms))
}

/// Highest integer power of `var` appearing anywhere, used for limit checks
pub fn max_power_of(expr: &Expr, var: &str) -> usize {
    expr.preorder()
        .filter_map(|e| match e {
            Expr::Pow(base, exp) if base.has(var) => exp
                .as_number()
                .filter(|n| n.is_integer())
                .and_then(|n| n.to_integer().abs().to_usize()),
            _ => None,
        })
        .max()
        .unwrap_or_else(|| usize::from(expr.has(var)))
}
