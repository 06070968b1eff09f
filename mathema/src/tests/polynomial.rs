use crate::symbolic::{Expr, Polynomial};

fn x() -> Expr {
    Expr::symbol("x")
}

fn poly(coeffs: &[i64]) -> Expr {
    let terms = coeffs
        .iter()
        .enumerate()
        .map(|(i, c)| Expr::mul(vec![Expr::integer(*c), Expr::pow(x(), Expr::integer(i as i64))]))
        .collect();
    Expr::add(terms)
}

fn roots_of(coeffs: &[i64]) -> Vec<String> {
    Polynomial::from_expr(&poly(coeffs), "x")
        .unwrap()
        .real_roots()
        .unwrap()
        .iter()
        .map(|r| r.to_string())
        .collect()
}

#[test]
fn test_extracts_coefficients() {
    let p = Polynomial::from_expr(&poly(&[6, -5, 1]), "x").unwrap();
    assert_eq!(p.degree(), 2);
    assert_eq!(
        p.coeffs,
        vec![Expr::integer(6), Expr::integer(-5), Expr::integer(1)]
    );
}

#[test]
fn test_rejects_non_polynomials() {
    assert!(Polynomial::from_expr(&Expr::sqrt(x()), "x").is_none());
    assert!(Polynomial::from_expr(&Expr::recip(x()), "x").is_none());
    assert!(Polynomial::from_expr(&Expr::log(x()), "x").is_none());
}

#[test]
fn test_symbolic_coefficients() {
    let expr = Expr::add(vec![x(), Expr::symbol("y"), Expr::integer(-5)]);
    let p = Polynomial::from_expr(&expr, "x").unwrap();
    assert_eq!(p.degree(), 1);
    let roots = p.real_roots().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].to_string(), "-y + 5");
}

#[test]
fn test_linear_and_quadratic_roots() {
    assert_eq!(roots_of(&[-7, 3]), vec!["7/3"]);
    assert_eq!(roots_of(&[6, -5, 1]), vec!["2", "3"]);
    assert_eq!(roots_of(&[-2, 0, 1]), vec!["-sqrt(2)", "sqrt(2)"]);
    assert_eq!(roots_of(&[1, 2, 1]), vec!["-1"]);
    assert!(roots_of(&[1, 0, 1]).is_empty());
}

#[test]
fn test_cubic_with_rational_root() {
    // (x - 1)(x - 2)(x + 3) = x**3 - 7x + 6
    assert_eq!(roots_of(&[6, -7, 0, 1]), vec!["-3", "1", "2"]);
}

#[test]
fn test_biquadratic_substitution() {
    // x**4 - 5x**2 + 4 = (x**2 - 1)(x**2 - 4)
    assert_eq!(roots_of(&[4, 0, -5, 0, 1]), vec!["-2", "-1", "1", "2"]);
}

#[test]
fn test_factor_out_power_of_variable() {
    // x**3 - x = x(x - 1)(x + 1)
    assert_eq!(roots_of(&[0, -1, 0, 1]), vec!["-1", "0", "1"]);
}

#[test]
fn test_odd_root_of_negative() {
    // x**3 + 8 = 0
    assert_eq!(roots_of(&[8, 0, 0, 1]), vec!["-2"]);
}

#[test]
fn test_cubic_without_rational_root_is_unsupported() {
    let p = Polynomial::from_expr(&poly(&[-2, -1, 0, 1]), "x").unwrap();
    assert!(p.real_roots().is_err());
}

#[test]
fn test_identity_has_no_isolated_roots() {
    let p = Polynomial::from_expr(&Expr::sub(x(), x()), "x").unwrap();
    assert!(p.is_zero());
    assert!(p.real_roots().unwrap().is_empty());
}
