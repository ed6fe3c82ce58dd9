use std::process::Command;

/// Runs the deployer against an empty artifacts directory so it fails before
/// reaching the network.
fn run_without_artifacts() -> std::process::Output {
    let dir = tempfile::tempdir().unwrap();
    Command::new(env!("CARGO_BIN_EXE_deployer"))
        .arg("--artifacts-dir")
        .arg(dir.path())
        .env_remove("NODE_URL")
        .env_remove("CONTRACT")
        .env_remove("GAS_LIMIT")
        .env_remove("ARTIFACTS_DIR")
        .env_remove("PRIVATE_KEY")
        .env_remove("LOG_FILTER")
        .output()
        .unwrap()
}

#[test]
fn failure_exits_nonzero_with_error_detail_on_stderr() {
    let output = run_without_artifacts();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("contract deployment failed"), "{stderr}");
    assert!(stderr.contains("Rebase.json"), "{stderr}");
}

#[test]
fn stdout_is_reserved_for_the_address_line() {
    let output = run_without_artifacts();

    // All logging, including the startup line emitted before the deployment
    // is attempted, goes to stderr. On failure stdout stays empty.
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("running deployer with validated arguments"), "{stderr}");
}
