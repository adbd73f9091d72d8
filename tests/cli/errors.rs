//! Tests for error handling and CLI flags.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    t.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("prepare"))
        .stdout(predicate::str::contains("cleanup"));
}

#[test]
fn test_version() {
    let t = Test::new();

    t.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_completions() {
    let t = Test::new();

    for shell in ["bash", "zsh", "fish", "power-shell"] {
        t.cmd()
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("deploy-keys"));
    }
}

#[test]
fn test_odd_line_count_fails_without_side_effects() {
    let t = Test::new();
    let deps = format!("{}\n{}\n{}", encode(REPO_A), encode(SAMPLE_KEY), encode(REPO_B));

    let output = t.prepare(&["--dependencies", &deps, "--custom-prepare", "touch hook-ran"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid format");
    assert_stderr_contains(&output, "got 3 lines");
    assert_stderr_contains(&output, "each dependency is two lines");
    assert!(!t.path("hook-ran").exists(), "hook must not run");
    assert_untouched(&t);
}

#[test]
fn test_invalid_base64_fails() {
    let t = Test::new();
    let deps = format!("not*base64\n{}", encode(SAMPLE_KEY));

    let output = t.prepare(&["--dependencies", &deps]);
    assert_failure(&output);
    assert_stderr_contains(&output, "line 1 is not valid base64");
    assert_untouched(&t);
}

#[test]
fn test_export_only_without_script_fails() {
    let t = Test::new();

    let output = t.prepare(&["--export-only", "--custom-prepare", "touch hook-ran"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing parameter");
    assert_stderr_contains(&output, "INPUT_EXPORT-SCRIPT");
    assert!(!t.path("hook-ran").exists());
    assert_untouched(&t);
}

#[test]
fn test_failing_prepare_hook_aborts_before_provisioning() {
    let t = Test::new();
    let deps = dependencies(&[(REPO_A, SAMPLE_KEY)]);

    let output = t.prepare(&["--dependencies", &deps, "--custom-prepare", "exit 3"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "exit code 3");
    assert_stdout_excludes(&output, "Found 1 dependencies");
    assert_untouched(&t);
}

#[test]
fn test_missing_config_file_fails() {
    let t = Test::new();

    let output = t.prepare(&["--config", "nope.toml"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "nope.toml");
}

#[test]
fn test_unknown_config_key_fails() {
    let t = Test::new();
    std::fs::write(t.path("deploy-keys.toml"), "dependancies = \"x\"\n").unwrap();

    let output = t.prepare(&["--config", "deploy-keys.toml"]);
    assert_failure(&output);
    assert_untouched(&t);
}
