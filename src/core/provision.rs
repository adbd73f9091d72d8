//! Identity provisioning.
//!
//! Writes one key file per dependency into `~/.ssh`, records the forge host
//! key, and appends a `Host` block binding each alias to its key file.
//! Everything is additive: repeated runs append duplicate blocks and
//! known-hosts lines, which SSH tolerates.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::{KEY_FILE_MODE, KNOWN_HOSTS_FILE, SSH_CONFIG_FILE, SSH_DIR};
use crate::core::domain::{AliasBinding, DependencyPair};
use crate::core::exec::Runner;
use crate::error::{FsError, Result};

/// Paths of the SSH client files under one home directory.
#[derive(Debug, Clone)]
pub struct SshLayout {
    dir: PathBuf,
}

impl SshLayout {
    pub fn new(home: &Path) -> Self {
        Self {
            dir: home.join(SSH_DIR),
        }
    }

    /// `~/.ssh`
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// `~/.ssh/config`
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(SSH_CONFIG_FILE)
    }

    /// `~/.ssh/known_hosts`
    pub fn known_hosts_path(&self) -> PathBuf {
        self.dir.join(KNOWN_HOSTS_FILE)
    }

    /// Create `~/.ssh` (and parents) if missing.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            debug!(path = %self.dir.display(), "creating ssh directory");
        }
        fs::create_dir_all(&self.dir).map_err(|source| FsError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Append the forge host's public keys to `known_hosts`.
///
/// Runs `ssh-keyscan <host>`. Existing entries are not deduplicated.
pub fn scan_host(runner: &dyn Runner, layout: &SshLayout, host: &str) -> Result<()> {
    let keys = runner.run("ssh-keyscan", &[host])?;
    debug!(host, lines = keys.lines().count(), "scanned host keys");
    append(&layout.known_hosts_path(), &keys)
}

/// Provision the dependency at `index`.
///
/// Writes the key file (replacing any previous one), restricts it to
/// owner-read, then appends the `Host` block that points at it.
pub fn provision(
    layout: &SshLayout,
    index: usize,
    pair: &DependencyPair,
    host: &str,
) -> Result<AliasBinding> {
    let binding = AliasBinding::allocate(index, host, layout.dir());
    write_key(binding.key_path(), pair.key().expose())?;
    append(&layout.config_path(), &binding.ssh_stanza())?;

    debug!(
        index,
        alias = binding.alias(),
        repository = pair.repository(),
        key = ?pair.key(),
        "identity provisioned"
    );
    Ok(binding)
}

/// Write key material and restrict its permissions.
fn write_key(path: &Path, key: &str) -> Result<()> {
    // A previous run leaves the file read-only; replace rather than truncate.
    if path.exists() {
        fs::remove_file(path).map_err(|source| FsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, key).map_err(|source| FsError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(KEY_FILE_MODE)).map_err(
            |source| FsError::Permissions {
                path: path.to_path_buf(),
                source,
            },
        )?;
    }

    Ok(())
}

/// Append `text` to `path`, creating the file if needed.
fn append(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| FsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(text.as_bytes())
        .map_err(|source| FsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}
