use assert_cmd::Command;

/// Helper to get a Command for the certguard binary.
#[allow(deprecated)]
fn certguard_cmd() -> Command {
    Command::cargo_bin("certguard").unwrap()
}

#[test]
fn help_works() {
    certguard_cmd().arg("--help").assert().success();
}

#[test]
fn lint_requires_a_file() {
    certguard_cmd().arg("lint").assert().failure();
}
