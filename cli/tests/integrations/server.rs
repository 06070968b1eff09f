use assert_cmd::Command;

#[test]
fn test_server_command_available() {
    let mut cmd = Command::cargo_bin("mathema").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicates::str::contains("server"));
}

#[test]
fn test_server_rejects_invalid_host() {
    let mut cmd = Command::cargo_bin("mathema").unwrap();
    cmd.arg("server").arg("--host").arg("not a host").arg("--port").arg("0");

    cmd.assert().failure();
}
