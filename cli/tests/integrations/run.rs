use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn mathema() -> Command {
    let mut cmd = Command::cargo_bin("mathema").unwrap();
    cmd.env_remove("MATHEMA_TAXONOMY").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_solve_quadratic() {
    let mut cmd = mathema();
    cmd.arg("solve").arg("x^2-5x+6=0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Πιθανά κεφάλαια/ενότητες:"))
        .stdout(predicate::str::contains("Κεφάλαιο 4 – Πολυώνυμα"))
        .stdout(predicate::str::contains("x ∈ ℝ"))
        .stdout(predicate::str::contains("x = 2"))
        .stdout(predicate::str::contains("x = 3"));
}

#[test]
fn test_cli_solve_trig() {
    let mut cmd = mathema();
    cmd.arg("solve").arg("ημ(x)=0.5");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("x = 2*π*k + π/6, k ∈ ℤ"))
        .stdout(predicate::str::contains("x = 2*π*k + 5*π/6, k ∈ ℤ"));
}

#[test]
fn test_cli_solve_system() {
    let mut cmd = mathema();
    cmd.arg("solve").arg("x+y=5, x-y=1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Κεφάλαιο 1 – Συστήματα"))
        .stdout(predicate::str::contains("x = 3, y = 2"));
}

#[test]
fn test_cli_solve_infeasible() {
    let mut cmd = mathema();
    cmd.arg("solve").arg("sqrt(x)=-1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("x ∈ [0, +∞)"))
        .stdout(predicate::str::contains("Αδύνατο"));
}

#[test]
fn test_cli_solve_json() {
    let mut cmd = mathema();
    cmd.arg("solve").arg("log(x-3)=1").arg("--json");

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["domain_text"], "x ∈ (3, +∞)");
    assert_eq!(json["solution_texts"][0], "x = e + 3");
    assert_eq!(json["path"], "general");
}

#[test]
fn test_cli_solve_top_limits_matches() {
    let mut cmd = mathema();
    cmd.arg("solve").arg("x^2+y=1, x-y=1").arg("--top").arg("1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Κεφάλαιο 1 – Συστήματα"))
        .stdout(predicate::str::contains("Κεφάλαιο 4").not());
}

#[test]
fn test_cli_parse_error_exits_with_failure() {
    let mut cmd = mathema();
    cmd.arg("solve").arg("x+*2=1");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_cli_division_by_zero() {
    let mut cmd = mathema();
    cmd.arg("solve").arg("σφ(x)=0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_cli_classify() {
    let mut cmd = mathema();
    cmd.arg("classify").arg("log(x)=2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Κεφάλαιο 5"))
        .stdout(predicate::str::contains("100"));
}

#[test]
fn test_cli_classify_fallback() {
    let mut cmd = mathema();
    cmd.arg("classify").arg("2x+1=5");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Παλαιότερη ύλη"));
}

#[test]
fn test_cli_normalize() {
    let mut cmd = mathema();
    cmd.arg("normalize").arg("2x^2 − συν(x)=0");

    cmd.assert()
        .success()
        .stdout(predicate::eq("2*x**2 - cos(x)=0\n"));
}

#[test]
fn test_cli_custom_taxonomy() {
    let temp_dir = TempDir::new().unwrap();
    let taxonomy_file = temp_dir.path().join("theory.json");

    fs::write(
        &taxonomy_file,
        r#"{
  "chapters": [
    {
      "chapter": "Κεφάλαιο 4 – Πολυώνυμα",
      "sections": {
        "polynomial_equations": { "name": "Εξισώσεις ανώτερου βαθμού" }
      }
    }
  ]
}"#,
    )
    .unwrap();

    let mut cmd = mathema();
    cmd.arg("--taxonomy").arg(&taxonomy_file).arg("classify").arg("x^3=8");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Εξισώσεις ανώτερου βαθμού"));
}

#[test]
fn test_cli_taxonomy_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let taxonomy_file = temp_dir.path().join("empty.json");
    fs::write(&taxonomy_file, r#"{ "chapters": [] }"#).unwrap();

    let mut cmd = mathema();
    cmd.env("MATHEMA_TAXONOMY", &taxonomy_file)
        .arg("classify")
        .arg("x+y=5, x-y=1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Παλαιότερη ύλη"));
}

#[test]
fn test_cli_invalid_taxonomy() {
    let temp_dir = TempDir::new().unwrap();
    let taxonomy_file = temp_dir.path().join("broken.json");
    fs::write(&taxonomy_file, "{ not json").unwrap();

    let mut cmd = mathema();
    cmd.arg("--taxonomy").arg(&taxonomy_file).arg("solve").arg("x=1");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Taxonomy error"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let mut cmd = mathema();
    cmd.arg("-v").arg("solve").arg("x=1");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("x = 1"))
        .stderr(predicate::str::contains("normalized input"));
}
