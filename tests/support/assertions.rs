//! Test assertion helpers.

use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded:\n{}",
        String::from_utf8_lossy(&output.stdout)
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stdout contains a string.
pub fn assert_stdout_contains(output: &Output, expected: &str) {
    let out = stdout(output);
    assert!(
        out.contains(expected),
        "stdout missing '{}', got: {}",
        expected,
        out
    );
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert stdout does NOT contain a string.
pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    let out = stdout(output);
    assert!(
        !out.contains(excluded),
        "stdout should not contain '{}', got: {}",
        excluded,
        out
    );
}

/// Assert `first` appears in stdout before `second`.
pub fn assert_stdout_order(output: &Output, first: &str, second: &str) {
    let out = stdout(output);
    let a = out
        .find(first)
        .unwrap_or_else(|| panic!("stdout missing '{}', got: {}", first, out));
    let b = out
        .find(second)
        .unwrap_or_else(|| panic!("stdout missing '{}', got: {}", second, out));
    assert!(a < b, "'{}' should precede '{}', got: {}", first, second, out);
}

/// Assert the run left no trace in the temp home.
pub fn assert_untouched(t: &super::Test) {
    assert!(!t.ssh_dir().exists(), "~/.ssh should not exist");
    assert!(
        !t.home.path().join(".gitconfig").exists(),
        "~/.gitconfig should not exist"
    );
}
