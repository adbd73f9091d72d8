//! `git config` backed store.

use std::path::PathBuf;

use tracing::debug;

use super::ConfigStore;
use crate::core::exec;
use crate::error::{ConfigError, Result};

/// `git config --get` exit status for a missing key.
const EXIT_KEY_MISSING: i32 = 1;

/// `git config --unset-all` exit status for a missing key.
const EXIT_NOTHING_TO_UNSET: i32 = 5;

/// Which git configuration file to operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `~/.gitconfig` (or `$XDG_CONFIG_HOME/git/config`).
    Global,
    /// `.git/config` of the repository in the working directory.
    Local,
}

impl Scope {
    fn flag(&self) -> &'static str {
        match self {
            Self::Global => "--global",
            Self::Local => "--local",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Local => "local",
        }
    }
}

/// Config store that runs `git config` for one scope.
#[derive(Debug, Clone)]
pub struct GitConfig {
    scope: Scope,
    dir: Option<PathBuf>,
}

impl GitConfig {
    pub fn global() -> Self {
        Self {
            scope: Scope::Global,
            dir: None,
        }
    }

    /// Local store for the repository containing `dir`.
    pub fn local(dir: impl Into<PathBuf>) -> Self {
        Self {
            scope: Scope::Local,
            dir: Some(dir.into()),
        }
    }

    fn git(&self, args: &[&str]) -> Result<std::process::Output> {
        let mut full = vec!["config", self.scope.flag()];
        full.extend_from_slice(args);
        exec::spawn("git", &full, self.dir.as_deref())
    }
}

impl ConfigStore for GitConfig {
    fn scope(&self) -> &str {
        self.scope.name()
    }

    fn is_available(&self) -> bool {
        match self.scope {
            Scope::Global => true,
            Scope::Local => exec::spawn("git", &["rev-parse", "--git-dir"], self.dir.as_deref())
                .map(|o| o.status.success())
                .unwrap_or(false),
        }
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let args = ["--get", key];
        let output = self.git(&args)?;
        if output.status.code() == Some(EXIT_KEY_MISSING) {
            debug!(scope = self.scope(), key, "config key not set");
            return Ok(None);
        }
        exec::check("git config", &args, &output)?;

        let value = String::from_utf8_lossy(&output.stdout)
            .trim_end_matches(['\n', '\r'])
            .to_string();
        Ok(Some(value))
    }

    fn append(&mut self, key: &str, value: &str) -> Result<()> {
        let args = ["--add", key, value];
        let output = self.git(&args)?;
        exec::check("git config", &args, &output)
    }

    fn unset_all(&mut self, key: &str) -> Result<()> {
        let args = ["--unset-all", key];
        let output = self.git(&args)?;
        if output.status.code() == Some(EXIT_NOTHING_TO_UNSET) {
            return Ok(());
        }
        exec::check("git config", &args, &output)
    }

    fn list(&self) -> Result<String> {
        let output = self.git(&["--list"])?;
        if !output.status.success() {
            return Err(ConfigError::Unreadable {
                scope: self.scope().to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
