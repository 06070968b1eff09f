//! Exact rational helpers on top of `num`

use num::bigint::Sign;
use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;

pub type Rational = BigRational;

/// Largest integer exponent folded exactly; bigger powers stay symbolic
pub const MAX_EXACT_EXPONENT: u32 = 256;

/// Largest magnitude whose square factors are extracted by trial division
const MAX_SQUARE_FACTOR_SEARCH: u64 = 1_000_000_000_000;

pub fn rational(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

pub fn integer(value: i64) -> Rational {
    Rational::from_integer(BigInt::from(value))
}

/// Exact conversion of a parsed decimal literal (`0.5` → `1/2`)
pub fn from_decimal(value: Decimal) -> Rational {
    let mantissa = BigInt::from(value.mantissa());
    let scale = BigInt::from(10u32).pow(value.scale());
    Rational::new(mantissa, scale)
}

pub fn to_f64(value: &Rational) -> f64 {
    match (value.numer().to_f64(), value.denom().to_f64()) {
        (Some(n), Some(d)) => n / d,
        _ => f64::NAN,
    }
}

/// `base ** exponent` for an integer exponent; `None` for `0 ** negative`
/// or exponents too large to fold
pub fn pow_integer(base: &Rational, exponent: &Rational) -> Option<Rational> {
    if !exponent.is_integer() {
        return None;
    }
    let exp = exponent.to_integer();
    let magnitude = exp.abs().to_u32()?;
    if magnitude > MAX_EXACT_EXPONENT {
        return None;
    }
    let raised = num::pow(base.clone(), magnitude as usize);
    if exp.sign() == Sign::Minus {
        if raised.is_zero() {
            return None;
        }
        Some(raised.recip())
    } else {
        Some(raised)
    }
}

/// Exact square root of a non-negative integer, if it is a perfect square
pub fn integer_sqrt(value: &BigInt) -> Option<BigInt> {
    if value.is_negative() {
        return None;
    }
    let root = value.sqrt();
    if &root * &root == *value {
        Some(root)
    } else {
        None
    }
}

/// Exact square root of a non-negative rational, if both parts are squares
pub fn rational_sqrt(value: &Rational) -> Option<Rational> {
    let numer = integer_sqrt(value.numer())?;
    let denom = integer_sqrt(value.denom())?;
    Some(Rational::new(numer, denom))
}

/// Exact `n`-th root of a positive rational, if both parts are perfect powers
pub fn rational_root(value: &Rational, n: &BigInt) -> Option<Rational> {
    if !value.is_positive() {
        return None;
    }
    let n = n.to_u32().filter(|n| *n >= 2 && *n <= MAX_EXACT_EXPONENT)?;
    let exact = |part: &BigInt| {
        let root = part.nth_root(n);
        (num::pow(root.clone(), n as usize) == *part).then_some(root)
    };
    Some(Rational::new(exact(value.numer())?, exact(value.denom())?))
}

/// Split `n` into `(outside, inside)` with `n = outside² · inside`
pub fn split_square_factor(value: &BigInt) -> (BigInt, BigInt) {
    let Some(mut rest) = value.to_u64() else {
        return (BigInt::one(), value.clone());
    };
    if rest > MAX_SQUARE_FACTOR_SEARCH {
        return (BigInt::one(), value.clone());
    }
    let mut outside: u64 = 1;
    let mut factor: u64 = 2;
    while factor * factor <= rest {
        let square = factor * factor;
        while rest % square == 0 {
            rest /= square;
            outside *= factor;
        }
        factor += 1;
    }
    (BigInt::from(outside), BigInt::from(rest))
}

/// Positive divisors of `value`, ascending; `None` when the value is too large
pub fn divisors(value: &BigInt) -> Option<Vec<BigInt>> {
    let n = value.abs().to_u64()?;
    if n == 0 || n > MAX_SQUARE_FACTOR_SEARCH {
        return None;
    }
    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d: u64 = 1;
    while d * d <= n {
        if n % d == 0 {
            small.push(BigInt::from(d));
            if d * d != n {
                large.push(BigInt::from(n / d));
            }
        }
        d += 1;
    }
    large.reverse();
    small.extend(large);
    Some(small)
}

pub fn is_half(value: &Rational) -> bool {
    *value == rational(1, 2)
}

pub fn format_rational(value: &Rational) -> String {
    if value.is_integer() {
        value.numer().to_string()
    } else {
        format!("{}/{}", value.numer(), value.denom())
    }
}

pub fn lcm_of_denominators(values: &[Rational]) -> BigInt {
    values.iter().fold(BigInt::one(), |acc, v| {
        num::integer::lcm(acc, v.denom().clone())
    })
}

pub fn zero() -> Rational {
    Rational::zero()
}

pub fn one() -> Rational {
    Rational::one()
}
