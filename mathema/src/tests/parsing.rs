use crate::error::MathemaError;
use crate::parser::{parse_equation, parse_expression};
use crate::resource_limits::ResourceLimits;
use crate::symbolic::Expr;

fn parse(input: &str) -> Expr {
    parse_expression(input, &ResourceLimits::default()).unwrap()
}

#[test]
fn test_parse_expressions_comprehensive() {
    let test_cases = vec![
        ("x**2-5*x+6", "x**2 - 5*x + 6"),
        ("x^2", "x**2"),
        ("2**3**2", "512"),
        ("-x**2", "-x**2"),
        ("(x+1)*(x-1)", "(x - 1)*(x + 1)"),
        ("1/(x-2)", "1/(x - 2)"),
        ("0.5", "1/2"),
        (".25", "1/4"),
        ("3.", "3"),
        ("sin(x)", "sin(x)"),
        ("log(x, e)", "log(x)"),
        ("exp(0)", "1"),
        ("pi/2", "pi/2"),
        ("π", "pi"),
        ("sqrt(9)", "3"),
        ("--x", "x"),
        ("+x", "x"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse(input).to_string(), expected, "parsing {}", input);
    }
}

#[test]
fn test_parse_equation_sides() {
    let limits = ResourceLimits::default();
    let equation = parse_equation("log(x-3)=1", &limits).unwrap();
    assert_eq!(equation.lhs.to_string(), "log(x - 3)");
    assert_eq!(equation.rhs, Expr::one());
    assert_eq!(equation.to_string(), "log(x - 3) = 1");
}

#[test]
fn test_bare_expression_means_equals_zero() {
    let equation = parse_equation("x**2-4", &ResourceLimits::default()).unwrap();
    assert_eq!(equation.rhs, Expr::zero());
    assert_eq!(equation.residual().to_string(), "x**2 - 4");
}

#[test]
fn test_log_with_base_is_change_of_base() {
    let expr = parse("log(8, 2)");
    let value = expr.approx().unwrap();
    assert!((value - 3.0).abs() < 1e-12);
}

#[test]
fn test_unknown_function_suggests_product() {
    let err = parse_expression("f(x)", &ResourceLimits::default()).unwrap_err();
    match err {
        MathemaError::Parse(details) => {
            assert!(details.message.contains("Unknown function 'f'"));
            assert_eq!(details.suggestion.as_deref(), Some("write 'f*(...)' for a product"));
            assert_eq!(details.span.start, 0);
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_wrong_arity_is_rejected() {
    let err = parse_expression("sin(x, 2)", &ResourceLimits::default()).unwrap_err();
    assert!(err.to_string().contains("takes 1 argument, 2 given"));
}

#[test]
fn test_malformed_input_fails_to_parse() {
    let limits = ResourceLimits::default();
    for input in ["x+", "(x+1", "x==1", "2(x+1)", "=1", ""] {
        let result = parse_equation(input, &limits);
        assert!(
            matches!(result, Err(MathemaError::Parse(_))),
            "expected parse error for {:?}, got {:?}",
            input,
            result
        );
    }
}

#[test]
fn test_expression_depth_limit() {
    let limits = ResourceLimits {
        max_expression_depth: 5,
        ..ResourceLimits::default()
    };
    let deep = format!("{}x{}", "(".repeat(10), ")".repeat(10));
    match parse_expression(&deep, &limits) {
        Err(MathemaError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_expression_depth");
        }
        other => panic!("Expected depth limit error, got {:?}", other),
    }
}

#[test]
fn test_input_size_limit() {
    let limits = ResourceLimits {
        max_input_bytes: 8,
        ..ResourceLimits::default()
    };
    match parse_equation("x+1+2+3+4+5=0", &limits) {
        Err(MathemaError::ResourceLimitExceeded { limit_name, .. }) => {
            assert_eq!(limit_name, "max_input_bytes");
        }
        other => panic!("Expected size limit error, got {:?}", other),
    }
}
