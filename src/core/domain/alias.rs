//! Alias binding type.

use std::path::{Path, PathBuf};

/// Binds a synthetic SSH host alias to the forge host and one key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasBinding {
    index: usize,
    alias: String,
    hostname: String,
    key_path: PathBuf,
}

impl AliasBinding {
    /// Allocate the binding for the dependency at `index`.
    ///
    /// The alias is `<host>-repo-<index>` and doubles as the key file name
    /// inside `ssh_dir`.
    pub fn allocate(index: usize, hostname: &str, ssh_dir: &Path) -> Self {
        let alias = format!("{}-repo-{}", hostname, index);
        let key_path = ssh_dir.join(&alias);
        Self {
            index,
            alias,
            hostname: hostname.to_string(),
            key_path,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// The `Host` block appended to the SSH client configuration.
    pub fn ssh_stanza(&self) -> String {
        format!(
            "Host {}\n    Hostname {}\n    IdentityFile {}\n\n",
            self.alias,
            self.hostname,
            self.key_path.display()
        )
    }
}
