use assert_cmd::Command;

#[test]
fn test_interactive_mode_help() {
    let mut cmd = Command::cargo_bin("mathema").unwrap();
    cmd.arg("interactive").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Prompt for equations"));
}

#[test]
fn test_interactive_requires_terminal() {
    let mut cmd = Command::cargo_bin("mathema").unwrap();
    cmd.arg("interactive").write_stdin("x=1\n");

    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("Failed to read equation"));
}
