//! Tests for exporting the companion script.

use std::fs;

use crate::support::*;

#[test]
fn test_export_only_writes_script_and_nothing_else() {
    let t = Test::new();
    let deps = dependencies(&[(REPO_A, SAMPLE_KEY)]);

    let output = t.prepare(&[
        "--export-only",
        "--export-script",
        "deploy.sh",
        "--dependencies",
        &deps,
        "--custom-prepare",
        "touch hook-ran",
    ]);
    assert_success(&output);
    assert_stdout_contains(&output, "Exported script to deploy.sh");
    assert_stdout_excludes(&output, "Found");

    let script = fs::read_to_string(t.path("deploy.sh")).unwrap();
    assert!(script.starts_with("#!/usr/bin/env bash"));
    assert!(!t.path("hook-ran").exists(), "hook must not run");
    assert_untouched(&t);
}

#[cfg(unix)]
#[test]
fn test_exported_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    let output = t.export("deploy.sh");
    assert_success(&output);

    let mode = fs::metadata(t.path("deploy.sh")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn test_export_inlines_hooks() {
    let t = Test::new();

    let output = t.prepare(&[
        "--export-only",
        "--export-script",
        "deploy.sh",
        "--custom-prepare",
        "echo before-build",
        "--custom-cleanup",
        "echo after-build",
    ]);
    assert_success(&output);

    let script = fs::read_to_string(t.path("deploy.sh")).unwrap();
    assert!(script.contains("echo before-build"));
    assert!(script.contains("echo after-build"));
    assert!(!script.contains("# @custom-prepare@"));
    assert!(!script.contains("# @custom-cleanup@"));
}

#[test]
fn test_export_without_hooks_keeps_markers() {
    let t = Test::new();

    assert_success(&t.export("deploy.sh"));
    let script = fs::read_to_string(t.path("deploy.sh")).unwrap();
    assert!(script.contains("# @custom-prepare@"));
    assert!(script.contains("# @custom-cleanup@"));
}

#[test]
fn test_export_creates_parent_dirs() {
    let t = Test::new();

    let output = t.export("ci/scripts/deploy.sh");
    assert_success(&output);
    assert!(t.path("ci/scripts/deploy.sh").is_file());
}

#[test]
fn test_export_overwrites_existing_script() {
    let t = Test::new();
    fs::write(t.path("deploy.sh"), "stale").unwrap();

    assert_success(&t.export("deploy.sh"));
    let script = fs::read_to_string(t.path("deploy.sh")).unwrap();
    assert_ne!(script, "stale");
}

#[test]
fn test_export_then_continue_without_export_only() {
    let t = Test::new();

    let output = t.prepare(&["--export-script", "deploy.sh"]);
    assert_success(&output);
    assert!(t.path("deploy.sh").is_file());
    assert_stdout_order(&output, "Exported script to", "Found 0 dependencies");
}

#[test]
fn test_cleanup_after_export_only_is_a_no_op() {
    let t = Test::new();

    let output = t.cleanup(&[
        "--export-only",
        "--export-script",
        "deploy.sh",
        "--custom-cleanup",
        "touch cleanup-ran",
    ]);
    assert_success(&output);
    assert!(!t.path("cleanup-ran").exists());
    assert!(!t.path("deploy.sh").exists(), "cleanup never exports");
}

#[cfg(unix)]
#[test]
fn test_exported_script_provisions_and_strips_quoted_identity() {
    use std::os::unix::fs::PermissionsExt;

    crate::skip_without_git!();
    crate::skip_without_bash!();
    let t = Test::repo();
    t.stub_program("ssh-keyscan", "echo \"$1 ssh-ed25519 AAAAstub\"");
    assert_success(&t.git(&[
        "config",
        "--local",
        "core.sshCommand",
        "ssh -i \"/home/u/my key\" -F /dev/null",
    ]));
    assert_success(&t.export("deploy.sh"));

    let output = t.run_script("deploy.sh", "prepare", &dependencies(&[(REPO_A, SAMPLE_KEY)]));
    assert_success(&output);
    assert_stdout_contains(&output, "Found 1 dependencies");
    assert_stdout_contains(&output, "Adding acme/widgets dependency");

    let ssh = t.ssh_dir();
    let known_hosts = fs::read_to_string(ssh.join("known_hosts")).unwrap();
    assert!(known_hosts.contains("github.com ssh-ed25519 AAAAstub"));

    let key_path = ssh.join("github.com-repo-0");
    assert_eq!(fs::read_to_string(&key_path).unwrap(), SAMPLE_KEY);
    let mode = fs::metadata(&key_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o400);

    let config = fs::read_to_string(ssh.join("config")).unwrap();
    assert!(config.contains(&format!(
        "Host github.com-repo-0\n    Hostname github.com\n    IdentityFile {}\n",
        key_path.display()
    )));

    let rules = t.git(&[
        "config",
        "--global",
        "--get-all",
        "url.git@github.com-repo-0:acme/widgets.insteadOf",
    ]);
    assert_success(&rules);
    assert_eq!(
        stdout(&rules).lines().collect::<Vec<_>>(),
        vec![
            "https://github.com/acme/widgets",
            "ssh://git@github.com/acme/widgets",
            "git@github.com:acme/widgets",
        ]
    );

    assert_eq!(
        t.git_get("--local", "core.sshCommand").as_deref(),
        Some("ssh -F /dev/null")
    );
}

#[test]
fn test_exported_script_matches_binary_without_dependencies() {
    crate::skip_without_git!();
    crate::skip_without_bash!();
    let t = Test::repo();
    assert_success(&t.git(&[
        "config",
        "--local",
        "core.sshCommand",
        "ssh -o IdentitiesOnly=yes -i \"/home/u/my key\"",
    ]));
    assert_success(&t.export("deploy.sh"));

    let output = t.run_script("deploy.sh", "prepare", "");
    assert_success(&output);
    assert_stdout_contains(&output, "Found 0 dependencies");
    assert!(!t.ssh_dir().exists(), "no keyscan or ~/.ssh without dependencies");
    assert_eq!(
        t.git_get("--local", "core.sshCommand").as_deref(),
        Some("ssh -o IdentitiesOnly=yes")
    );
}

#[test]
fn test_exported_script_keeps_command_without_identity() {
    crate::skip_without_git!();
    crate::skip_without_bash!();
    let t = Test::repo();
    assert_success(&t.git(&["config", "--local", "core.sshCommand", "ssh -v"]));
    assert_success(&t.export("deploy.sh"));

    let output = t.run_script("deploy.sh", "prepare", "");
    assert_success(&output);
    assert_stdout_excludes(&output, "Removed");
    assert_eq!(
        t.git_get("--local", "core.sshCommand").as_deref(),
        Some("ssh -v")
    );
}
