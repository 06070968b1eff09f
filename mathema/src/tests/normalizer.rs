use crate::normalizer::{normalize, split_clauses};

#[test]
fn test_normalize_powers_and_implicit_multiplication() {
    assert_eq!(normalize("x^2-5x+6=0"), "x**2-5*x+6=0");
    assert_eq!(normalize("3xy"), "3*xy");
    assert_eq!(normalize("x2"), "x*2");
    assert_eq!(normalize("2(x+1)"), "2(x+1)");
    assert_eq!(normalize("(x+1)2"), "(x+1)*2");
}

#[test]
fn test_normalize_greek_function_names() {
    let test_cases = vec![
        ("ημ(x)=0.5", "sin(x)=0.5"),
        ("συν(x)=1", "cos(x)=1"),
        ("εφ(x)=1", "tan(x)=1"),
        ("σφ(x)=1", "cot(x)=1"),
        ("ημ(x)+συν(x)=1", "sin(x)+cos(x)=1"),
    ];

    for (input, expected) in test_cases {
        assert_eq!(normalize(input), expected, "normalizing {}", input);
    }
}

#[test]
fn test_greek_names_only_replaced_as_whole_words() {
    // ημx is a single identifier, not ημ applied to x
    assert_eq!(normalize("ημx"), "ημx");
}

#[test]
fn test_normalize_minus_variants() {
    assert_eq!(normalize("x\u{2212}1=0"), "x-1=0");
    assert_eq!(normalize("x\u{2013}1=0"), "x-1=0");
    assert_eq!(normalize("x\u{2014}1=0"), "x-1=0");
}

#[test]
fn test_normalize_square_root_glyph() {
    assert_eq!(normalize("√(x)=2"), "sqrt(x)=2");
}

#[test]
fn test_normalize_natural_log() {
    assert_eq!(normalize("ln(x)=1"), "log(x, e)=1");
    assert_eq!(normalize("ln (x-3)=1"), "log(x-3, e)=1");
}

#[test]
fn test_natural_log_stops_at_first_closing_paren() {
    // Nested parentheses inside ln(...) are cut at the first ')'
    assert_eq!(normalize("ln((x+1))=0"), "log((x+1, e))=0");
}

#[test]
fn test_normalize_leaves_parser_syntax_alone() {
    let already = "x**2-5*x+6=0";
    assert_eq!(normalize(already), already);
}

#[test]
fn test_split_clauses_top_level_commas() {
    assert_eq!(split_clauses("x+y=5, x-y=1"), vec!["x+y=5", "x-y=1"]);
    assert_eq!(split_clauses("log(x, 2)=3"), vec!["log(x, 2)=3"]);
    assert_eq!(split_clauses("x=1,, ,y=2"), vec!["x=1", "y=2"]);
    assert!(split_clauses("  ").is_empty());
}
