//! Local SSH command override guard.
//!
//! A repository checkout may set `core.sshCommand` to something like
//! `ssh -i ~/.ssh/id_rsa`, which would force one identity for every remote
//! and defeat the per-alias `IdentityFile` entries. The guard drops the
//! `-i <file>` pair and writes the rest of the command back.

use tracing::debug;

use crate::core::constants::SSH_COMMAND_KEY;
use crate::core::domain::SshCommandOverride;
use crate::core::store::ConfigStore;
use crate::error::Result;

/// What the guard found and did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// No local configuration to inspect (not inside a work tree).
    Unavailable,
    /// `core.sshCommand` is not set or empty.
    Absent,
    /// The override does not force an identity file; left untouched.
    Kept(String),
    /// The identity flag was removed.
    Stripped {
        identity: String,
        /// Command written back, or `None` when nothing remained.
        replacement: Option<String>,
    },
}

/// Inspect `core.sshCommand` in `store` and strip a forced identity file.
///
/// # Errors
///
/// Returns the store's error if reading or rewriting the key fails.
pub fn neutralize(store: &mut dyn ConfigStore) -> Result<GuardOutcome> {
    if !store.is_available() {
        debug!(scope = store.scope(), "config store unavailable, skipping override check");
        return Ok(GuardOutcome::Unavailable);
    }

    let raw = match store.get(SSH_COMMAND_KEY)? {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Ok(GuardOutcome::Absent),
    };

    let mut command = SshCommandOverride::parse(&raw);
    let identity = match command.strip_identity() {
        Some(identity) => identity,
        None => {
            debug!(command = %raw, "ssh command override kept");
            return Ok(GuardOutcome::Kept(raw));
        }
    };

    store.unset_all(SSH_COMMAND_KEY)?;
    let rest = command.render();
    let replacement = if rest.is_empty() {
        None
    } else {
        store.append(SSH_COMMAND_KEY, &rest)?;
        Some(rest)
    };

    debug!(
        original = %raw,
        replacement = ?replacement,
        "identity flag stripped from ssh command override"
    );
    Ok(GuardOutcome::Stripped {
        identity,
        replacement,
    })
}
