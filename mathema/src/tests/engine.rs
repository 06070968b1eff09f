use crate::classifier::SYSTEMS_CHAPTER;
use crate::engine::Engine;
use crate::error::MathemaError;
use crate::resource_limits::ResourceLimits;
use crate::response::SolvePath;
use crate::symbolic::Expr;
use crate::taxonomy::Taxonomy;

fn engine() -> Engine {
    Engine::builtin().unwrap()
}

#[test]
fn test_engine_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Engine>();
}

#[test]
fn test_polynomial_query() {
    let outcome = engine().solve_input("x^2-5x+6=0").unwrap();
    assert_eq!(outcome.normalized, vec!["x**2-5*x+6=0"]);
    assert_eq!(outcome.variable, "x");
    assert!(outcome.domain.is_reals());
    assert_eq!(outcome.path, SolvePath::General);
    let values: Vec<&Expr> = outcome.solutions.iter().map(|s| &s["x"]).collect();
    assert_eq!(values, vec![&Expr::integer(2), &Expr::integer(3)]);
}

#[test]
fn test_trig_query_short_circuits() {
    let outcome = engine().solve_input("ημ(x)=0.5").unwrap();
    assert_eq!(outcome.path, SolvePath::Trigonometric);
    assert_eq!(outcome.solutions.len(), 2);
    assert!(outcome.domain.is_reals());
}

#[test]
fn test_trig_domain_uses_equations_seen_so_far() {
    let outcome = engine().solve_input("log(x)=y, tan(x)=1").unwrap();
    assert_eq!(outcome.path, SolvePath::Trigonometric);
    assert!(!outcome.domain.contains(-1.0));
    assert!(!outcome.domain.contains(std::f64::consts::FRAC_PI_2));
    assert!(outcome.domain.contains(1.0));
}

#[test]
fn test_variable_is_first_symbol_of_first_lhs() {
    let outcome = engine().solve_input("b+a=3").unwrap();
    assert_eq!(outcome.variable, "a");
}

#[test]
fn test_x_and_y_are_preferred_over_parameters() {
    let outcome = engine().solve_input("1/(x-a)=1").unwrap();
    assert_eq!(outcome.variable, "x");
    assert_eq!(outcome.solutions[0]["x"].to_string(), "a + 1");

    assert_eq!(engine().solve_input("y+a=3").unwrap().variable, "y");
    assert_eq!(engine().solve_input("a*x+y=0").unwrap().variable, "x");
}

#[test]
fn test_domain_only_looks_at_left_hand_side() {
    let response = engine().analyze("3=log(x)").unwrap();
    assert_eq!(response.domain_text, "x ∈ ℝ");
    assert_eq!(response.solution_texts, vec!["x = e**3"]);
}

#[test]
fn test_placeholder_variable_without_symbols() {
    let outcome = engine().solve_input("2+2=4").unwrap();
    assert_eq!(outcome.variable, "x");
    assert!(outcome.solutions.is_empty());
}

#[test]
fn test_system_query() {
    let response = engine().analyze("x+y=5, x-y=1").unwrap();
    assert_eq!(response.matches[0].chapter, SYSTEMS_CHAPTER);
    assert_eq!(response.matches[0].score, 1000);
    assert_eq!(response.normalized, vec!["x+y=5", "x-y=1"]);
    assert_eq!(response.solution_texts, vec!["x = 3, y = 2"]);
}

#[test]
fn test_response_texts() {
    let response = engine().analyze("log(x-3)=1").unwrap();
    assert_eq!(response.domain_text, "x ∈ (3, +∞)");
    assert_eq!(response.solution_texts, vec!["x = e + 3"]);
    assert!(!response.is_infeasible());

    let response = engine().analyze("sqrt(x)=-1").unwrap();
    assert_eq!(response.domain_text, "x ∈ [0, +∞)");
    assert!(response.is_infeasible());
}

#[test]
fn test_top_matches() {
    let response = engine().analyze("ημ(x)=y, x^2=y").unwrap();
    assert_eq!(response.top_matches(2).len(), 2);
    assert_eq!(response.top_matches(10).len(), 3);
}

#[test]
fn test_parse_errors_propagate() {
    let result = engine().solve_input("x+=1");
    assert!(matches!(result, Err(MathemaError::Parse(_))));
}

#[test]
fn test_empty_input() {
    assert!(matches!(
        engine().solve_input(" , "),
        Err(MathemaError::Engine(_))
    ));
}

#[test]
fn test_engine_limits() {
    let limits = ResourceLimits {
        max_equations: 1,
        ..ResourceLimits::default()
    };
    let engine = Engine::with_limits(Taxonomy::builtin().unwrap(), limits);
    match engine.solve_input("x=1, y=2") {
        Err(MathemaError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_equations");
        }
        other => panic!("Expected equation limit error, got {:?}", other),
    }
}

#[test]
fn test_domain_of_intersects_all_equations() {
    let domain = engine().domain_of("log(x)=y, sqrt(2-x)=y").unwrap();
    assert!(domain.contains(1.0));
    assert!(domain.contains(2.0));
    assert!(!domain.contains(0.0));
    assert!(!domain.contains(3.0));
}
