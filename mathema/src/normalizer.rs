//! Notation normalizer
//!
//! Rewrites the informal notation students type (Greek function names, `^`,
//! `√`, typographic minus signs, `2x`) into the form the parser accepts. The
//! rewrite is purely textual and never fails; malformed input is left for the
//! parser to reject.
//!
//! `ln(...)` is matched non-greedily up to the first closing parenthesis, so
//! an argument containing its own parentheses (`ln((x+1)*2)`) is cut short.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

const MINUS_VARIANTS: [char; 3] = ['\u{2212}', '\u{2014}', '\u{2013}'];

static GREEK_FUNCTIONS: LazyLock<[(Regex, &'static str); 4]> = LazyLock::new(|| {
    [
        (Regex::new(r"\bημ\b").expect("valid regex"), "sin"),
        (Regex::new(r"\bσυν\b").expect("valid regex"), "cos"),
        (Regex::new(r"\bεφ\b").expect("valid regex"), "tan"),
        (Regex::new(r"\bσφ\b").expect("valid regex"), "cot"),
    ]
});

static NATURAL_LOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bln\s*\((.*?)\)").expect("valid regex"));

static DIGIT_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d)([a-zA-Z_])").expect("valid regex"));

static LETTER_DIGIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-zA-Z_])(\d)").expect("valid regex"));

static CLOSE_PAREN_OPERAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\)([a-zA-Z_\d])").expect("valid regex"));

/// Normalize raw user notation into parser-ready text
pub fn normalize(text: &str) -> String {
    let mut expr: String = text
        .chars()
        .map(|c| if MINUS_VARIANTS.contains(&c) { '-' } else { c })
        .collect();

    expr = expr.replace('^', "**");

    for (pattern, name) in GREEK_FUNCTIONS.iter() {
        expr = pattern.replace_all(&expr, *name).into_owned();
    }

    expr = expr.replace('√', "sqrt");
    expr = NATURAL_LOG.replace_all(&expr, "log($1, e)").into_owned();

    expr = DIGIT_LETTER.replace_all(&expr, "$1*$2").into_owned();
    expr = LETTER_DIGIT.replace_all(&expr, "$1*$2").into_owned();
    expr = CLOSE_PAREN_OPERAND.replace_all(&expr, ")*$1").into_owned();

    trace!(input = text, normalized = %expr, "normalized input");
    expr
}

/// Split a query into its equations at top-level commas
///
/// Commas inside parentheses (`log(x, 2)`) do not separate equations. Blank
/// clauses are dropped and the rest are trimmed.
pub fn split_clauses(text: &str) -> Vec<&str> {
    let mut clauses = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                clauses.push(&text[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    clauses.push(&text[start..]);
    clauses
        .into_iter()
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect()
}
