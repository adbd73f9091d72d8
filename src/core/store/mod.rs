//! Version-control configuration stores.
//!
//! The provisioning logic only needs a handful of key operations, so the
//! stores sit behind the small [`ConfigStore`] trait.
//!
//! ## Implementations
//!
//! - [`GitConfig`]: shells out to `git config` for the global or local scope
//! - `Memory` (tests only): an ordered in-process list of entries

mod git;

#[cfg(test)]
pub(crate) mod memory;

pub use git::{GitConfig, Scope};

use crate::error::Result;

/// A multi-valued key/value configuration store.
pub trait ConfigStore {
    /// Human-readable scope name for log lines ("global", "local").
    fn scope(&self) -> &str;

    /// Whether the store can be read at all.
    ///
    /// A local store outside a work tree is unavailable; callers treat
    /// that the same as an absent key.
    fn is_available(&self) -> bool {
        true
    }

    /// Last value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error only if the store itself fails; absence is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Add `value` under `key`, keeping existing values.
    fn append(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove every value under `key`. Removing an absent key succeeds.
    fn unset_all(&mut self, key: &str) -> Result<()>;

    /// Dump the whole store as `key=value` lines.
    fn list(&self) -> Result<String>;
}
