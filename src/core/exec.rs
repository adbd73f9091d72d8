//! Process execution.
//!
//! Every child process deploy-keys starts goes through a [`Runner`] so the
//! provisioning logic can be exercised without spawning real tools.

use std::process::{Command, Output, Stdio};

use tracing::{debug, trace};

use crate::error::{CommandError, Result};

/// Runs single-shot child commands and captures their stdout.
pub trait Runner {
    /// Run `program` with `args`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` if the program is missing, cannot be spawned,
    /// or exits non-zero.
    fn run(&self, program: &str, args: &[&str]) -> Result<String>;

    /// Run a user-supplied command line through `sh -c`.
    fn shell(&self, command: &str) -> Result<String> {
        self.run("sh", &["-c", command])
    }
}

/// Runner backed by real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct System;

impl Runner for System {
    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        let output = spawn(program, args, None)?;
        check(program, args, &output)?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Locate `program` and run it to completion with piped output.
///
/// Does not inspect the exit status; see [`check`].
pub(crate) fn spawn(
    program: &str,
    args: &[&str],
    dir: Option<&std::path::Path>,
) -> Result<Output> {
    let path =
        which::which(program).map_err(|_| CommandError::NotFound(program.to_string()))?;

    debug!(program, args = ?args, "running command");

    let mut cmd = Command::new(path);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|source| CommandError::Spawn {
        program: program.to_string(),
        source,
    })?;

    trace!(
        program,
        status = ?output.status.code(),
        stdout_len = output.stdout.len(),
        "command finished"
    );
    Ok(output)
}

/// Turn a non-zero exit into `CommandError::Failed`.
pub(crate) fn check(program: &str, args: &[&str], output: &Output) -> Result<()> {
    if output.status.success() {
        return Ok(());
    }
    let status = match output.status.code() {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    };
    Err(CommandError::Failed {
        command: display_command(program, args),
        status,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    }
    .into())
}

fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ")
}
