use insta::assert_snapshot;
use mathema::Engine;

fn render(input: &str) -> String {
    let response = Engine::builtin().unwrap().analyze(input).unwrap();
    let mut lines = vec![response.domain_text.clone()];
    lines.extend(response.solution_texts.iter().cloned());
    lines.join("\n")
}

#[test]
fn test_snapshot_quadratic() {
    assert_snapshot!(render("x^2-5x+6=0"), @r"
    x ∈ ℝ
    x = 2
    x = 3
    ");
}

#[test]
fn test_snapshot_cosine() {
    assert_snapshot!(render("συν(x)=1/2"), @r"
    x ∈ ℝ
    x = 2*π*k + π/3, k ∈ ℤ
    x = 2*π*k - π/3, k ∈ ℤ
    ");
}

#[test]
fn test_snapshot_tangent_domain() {
    assert_snapshot!(render("εφ(x)=1"), @r"
    x ∈ ℝ \ {π*k + π/2 : k ∈ ℤ}
    x = π*k + π/4, k ∈ ℤ
    ");
}

#[test]
fn test_snapshot_irrational_roots() {
    assert_snapshot!(render("x^2=2"), @r"
    x ∈ ℝ
    x = -√(2)
    x = √(2)
    ");
}

#[test]
fn test_snapshot_rational_domain() {
    assert_snapshot!(render("x/(x^2-1)=0"), @r"
    x ∈ (-∞, -1) ∪ (-1, 1) ∪ (1, +∞)
    x = 0
    ");
}
