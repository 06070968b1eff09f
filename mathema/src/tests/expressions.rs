use crate::symbolic::{Expr, Function};

fn x() -> Expr {
    Expr::symbol("x")
}

#[test]
fn test_like_terms_are_collected() {
    let sum = Expr::add(vec![
        Expr::mul(vec![Expr::integer(2), x()]),
        Expr::mul(vec![Expr::integer(3), x()]),
    ]);
    assert_eq!(sum, Expr::mul(vec![Expr::integer(5), x()]));
    assert_eq!(sum.to_string(), "5*x");
}

#[test]
fn test_like_bases_are_collected() {
    let product = Expr::mul(vec![x(), Expr::pow(x(), Expr::integer(2))]);
    assert_eq!(product.to_string(), "x**3");
    assert_eq!(Expr::div(x(), x()), Expr::one());
}

#[test]
fn test_cancellation_to_zero() {
    assert!(Expr::sub(x(), x()).is_zero());
    assert!(Expr::mul(vec![Expr::zero(), x()]).is_zero());
}

#[test]
fn test_rational_coefficient_distributes_over_sum() {
    let expr = Expr::mul(vec![
        Expr::integer(2),
        Expr::add(vec![x(), Expr::one()]),
    ]);
    assert_eq!(expr.to_string(), "2*x + 2");
}

#[test]
fn test_display_orders_terms_by_degree() {
    let expr = Expr::add(vec![
        Expr::integer(6),
        Expr::mul(vec![Expr::integer(-5), x()]),
        Expr::pow(x(), Expr::integer(2)),
    ]);
    assert_eq!(expr.to_string(), "x**2 - 5*x + 6");
}

#[test]
fn test_display_of_fractions() {
    assert_eq!(Expr::rational(7, 3).to_string(), "7/3");
    assert_eq!(Expr::recip(Expr::sub(x(), Expr::integer(2))).to_string(), "1/(x - 2)");
    assert_eq!(
        Expr::mul(vec![Expr::rational(5, 6), Expr::pi()]).to_string(),
        "5*pi/6"
    );
    assert_eq!(Expr::div(Expr::pi(), Expr::integer(2)).to_string(), "pi/2");
}

#[test]
fn test_display_of_constants() {
    assert_eq!(Expr::add(vec![Expr::e(), Expr::integer(3)]).to_string(), "E + 3");
    assert_eq!(Expr::neg(x()).to_string(), "-x");
}

#[test]
fn test_numeric_powers_fold() {
    assert_eq!(Expr::pow(Expr::integer(2), Expr::integer(10)), Expr::integer(1024));
    assert_eq!(Expr::pow(Expr::integer(2), Expr::integer(-2)), Expr::rational(1, 4));
    assert_eq!(Expr::pow(Expr::integer(9), Expr::rational(1, 2)), Expr::integer(3));
}

#[test]
fn test_square_roots_are_simplified() {
    assert_eq!(Expr::sqrt(Expr::integer(4)), Expr::integer(2));
    assert_eq!(Expr::sqrt(Expr::rational(1, 4)), Expr::rational(1, 2));
    assert_eq!(Expr::sqrt(Expr::integer(8)).to_string(), "2*sqrt(2)");
    assert_eq!(Expr::sqrt(Expr::rational(1, 2)).to_string(), "sqrt(2)/2");
    assert_eq!(Expr::pow(Expr::sqrt(x()), Expr::integer(2)), x());
}

#[test]
fn test_exact_inverse_trig_values() {
    assert_eq!(
        Expr::func(Function::Asin, Expr::rational(1, 2)).to_string(),
        "pi/6"
    );
    assert_eq!(
        Expr::func(Function::Asin, Expr::rational(-1, 2)).to_string(),
        "-pi/6"
    );
    assert_eq!(
        Expr::func(Function::Acos, Expr::rational(1, 2)).to_string(),
        "pi/3"
    );
    assert_eq!(Expr::func(Function::Acos, Expr::one()), Expr::zero());
    assert_eq!(Expr::func(Function::Atan, Expr::one()).to_string(), "pi/4");
    assert_eq!(
        Expr::func(Function::Asin, Expr::rational(1, 3)).to_string(),
        "asin(1/3)"
    );
}

#[test]
fn test_trig_at_multiples_of_pi() {
    assert_eq!(Expr::func(Function::Sin, Expr::pi()), Expr::zero());
    assert_eq!(Expr::func(Function::Cos, Expr::pi()), Expr::integer(-1));
    assert_eq!(Expr::func(Function::Cos, Expr::zero()), Expr::one());
}

#[test]
fn test_logarithm_and_exponential_cancel() {
    assert_eq!(Expr::log(Expr::e()), Expr::one());
    assert_eq!(Expr::log(Expr::one()), Expr::zero());
    assert_eq!(Expr::pow(Expr::e(), Expr::log(x())), x());
    assert_eq!(Expr::log(Expr::pow(Expr::e(), x())), x());
    assert_eq!(Expr::func(Function::Exp, x()), Expr::pow(Expr::e(), x()));
}

#[test]
fn test_exponential_of_scaled_logarithm() {
    let three_log_two = Expr::mul(vec![Expr::integer(3), Expr::log(Expr::integer(2))]);
    assert_eq!(Expr::pow(Expr::e(), three_log_two), Expr::integer(8));
    let minus_log_x = Expr::neg(Expr::log(x()));
    assert_eq!(Expr::pow(Expr::e(), minus_log_x), Expr::recip(x()));
    // Two logarithms in the exponent stay as they are
    let product = Expr::mul(vec![Expr::log(x()), Expr::log(Expr::symbol("y"))]);
    assert!(matches!(Expr::pow(Expr::e(), product), Expr::Pow(_, _)));
}

#[test]
fn test_coefficient_merges_into_large_power() {
    let big = Expr::pow(Expr::integer(2), Expr::integer(1000));
    let halved = Expr::div(big.clone(), Expr::integer(2));
    assert_eq!(halved.to_string(), "2**999");
    let scaled = Expr::mul(vec![Expr::integer(12), big]);
    assert_eq!(scaled.to_string(), "3*2**1002");
}

#[test]
fn test_substitution_recanonicalizes() {
    let expr = Expr::add(vec![x(), Expr::symbol("y"), Expr::integer(-5)]);
    let substituted = expr.subs("y", &Expr::integer(2));
    assert_eq!(substituted.to_string(), "x - 3");
    assert_eq!(substituted.subs("x", &Expr::integer(3)), Expr::zero());
}

#[test]
fn test_free_symbols_sorted() {
    let expr = Expr::add(vec![Expr::symbol("y"), x(), Expr::pi()]);
    let names: Vec<String> = expr.free_symbol_names().into_iter().collect();
    assert_eq!(names, vec!["x", "y"]);
    assert!(!Expr::add(vec![Expr::pi(), Expr::e()]).has("x"));
    assert!(Expr::add(vec![Expr::pi(), Expr::e()]).is_constant());
}

#[test]
fn test_numeric_evaluation() {
    let expr = Expr::log(Expr::sub(x(), Expr::integer(3)));
    assert!(expr.eval_f64(&[("x", 2.0)]).is_nan());
    let value = expr.eval_f64(&[("x", 3.0 + std::f64::consts::E)]);
    assert!((value - 1.0).abs() < 1e-12);
    assert!(Expr::sqrt(Expr::integer(-1)).approx().is_none());
}

#[test]
fn test_numer_denom_split() {
    let expr = Expr::sub(
        Expr::recip(Expr::sub(x(), Expr::integer(2))),
        Expr::integer(3),
    );
    let (numer, denom) = expr.as_numer_denom();
    assert_eq!(denom.to_string(), "x - 2");
    assert_eq!(numer.expand().to_string(), "-3*x + 7");
}

#[test]
fn test_expand_products_of_sums() {
    let expr = Expr::mul(vec![
        Expr::sub(x(), Expr::integer(2)),
        Expr::sub(x(), Expr::integer(3)),
    ]);
    assert_eq!(expr.expand().to_string(), "x**2 - 5*x + 6");
    let square = Expr::pow(Expr::add(vec![x(), Expr::one()]), Expr::integer(2));
    assert_eq!(square.expand().to_string(), "x**2 + 2*x + 1");
}
