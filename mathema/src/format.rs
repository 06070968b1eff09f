//! Rendering of sets and solutions in the notation used in class
//!
//! Expressions are printed with `π`, `e` and `√` instead of their ASCII
//! names. Periodic solutions get the `k ∈ ℤ` annotation.

use crate::domain::{Bound, Exclusion, Interval, RealSet};
use crate::symbolic::{Expr, PERIODIC_PARAMETER};
use regex::Regex;
use std::sync::LazyLock;

/// Annotation appended to solutions that contain the periodic parameter
pub const INTEGER_ANNOTATION: &str = ", k ∈ ℤ";

static PI_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bpi\b").expect("valid regex"));
static E_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bE\b").expect("valid regex"));

/// Replace `pi`, `E` and `sqrt` with their glyphs
pub fn apply_glyphs(text: &str) -> String {
    let text = PI_PATTERN.replace_all(text, "π");
    let text = E_PATTERN.replace_all(&text, "e");
    text.replace("sqrt", "√")
}

fn render(expr: &Expr) -> String {
    apply_glyphs(&expr.to_string())
}

/// `ℝ`, `∅`, or the intervals joined by `∪`, followed by any exclusions
pub fn format_interval(set: &RealSet) -> String {
    if set.is_empty() {
        return "∅".to_string();
    }
    let base = if set.intervals.len() == 1 && set.intervals[0].is_all() {
        "ℝ".to_string()
    } else {
        set.intervals
            .iter()
            .map(render_interval)
            .collect::<Vec<_>>()
            .join(" ∪ ")
    };
    if set.exclusions.is_empty() {
        return base;
    }
    let excluded: Vec<String> = set.exclusions.iter().map(render_exclusion).collect();
    format!("{} \\ {{{}}}", base, excluded.join(", "))
}

fn render_interval(interval: &Interval) -> String {
    if let (Bound::Inclusive(lo), Bound::Inclusive(hi)) = (&interval.min, &interval.max) {
        if lo == hi {
            return format!("{{{}}}", render(&lo.value));
        }
    }
    let (open, low) = match &interval.min {
        Bound::Unbounded => ('(', "-∞".to_string()),
        Bound::Exclusive(e) => ('(', render(&e.value)),
        Bound::Inclusive(e) => ('[', render(&e.value)),
    };
    let (close, high) = match &interval.max {
        Bound::Unbounded => (')', "+∞".to_string()),
        Bound::Exclusive(e) => (')', render(&e.value)),
        Bound::Inclusive(e) => (']', render(&e.value)),
    };
    format!("{}{}, {}{}", open, low, high, close)
}

fn render_exclusion(exclusion: &Exclusion) -> String {
    match exclusion {
        Exclusion::Point(p) => render(p),
        Exclusion::Periodic { .. } => {
            format!("{} : k ∈ ℤ", render(&exclusion.as_expr()))
        }
    }
}

/// A solution value with glyphs, annotated when it is a periodic family
///
/// The check is textual: any `k` in the rendered text triggers the
/// annotation.
pub fn format_solution(expr: &Expr) -> String {
    let text = render(expr);
    if text.contains(PERIODIC_PARAMETER) {
        format!("{}{}", text, INTEGER_ANNOTATION)
    } else {
        text
    }
}

/// `x ∈ …`
pub fn format_domain(var: &str, set: &RealSet) -> String {
    format!("{} ∈ {}", var, format_interval(set))
}

/// One solution mapping as `x = 3, y = 2`, annotated once if periodic
pub fn format_assignment(solution: &crate::solver::Solution) -> String {
    let text = solution
        .iter()
        .map(|(name, value)| format!("{} = {}", name, render(value)))
        .collect::<Vec<_>>()
        .join(", ");
    if text.contains(PERIODIC_PARAMETER) {
        format!("{}{}", text, INTEGER_ANNOTATION)
    } else {
        text
    }
}
