//! In-process store used by unit tests.

use super::ConfigStore;
use crate::error::{ConfigError, Result};

/// Ordered list of `(key, value)` entries.
#[derive(Debug, Default)]
pub(crate) struct Memory {
    scope: String,
    available: bool,
    entries: Vec<(String, String)>,
    fail_list: bool,
}

impl Memory {
    pub fn new(scope: &str) -> Self {
        Self {
            scope: scope.to_string(),
            available: true,
            ..Self::default()
        }
    }

    /// Store that reports itself as unavailable (no work tree).
    pub fn unavailable(scope: &str) -> Self {
        Self {
            available: false,
            ..Self::new(scope)
        }
    }

    /// Make `list` fail, to exercise best-effort dumps.
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.entries.push((key.to_string(), value.to_string()));
        self
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn values(&self, key: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

impl ConfigStore for Memory {
    fn scope(&self) -> &str {
        &self.scope
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values(key).last().map(|v| v.to_string()))
    }

    fn append(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.push((key.to_string(), value.to_string()));
        Ok(())
    }

    fn unset_all(&mut self, key: &str) -> Result<()> {
        self.entries.retain(|(k, _)| k != key);
        Ok(())
    }

    fn list(&self) -> Result<String> {
        if self.fail_list {
            return Err(ConfigError::Unreadable {
                scope: self.scope.clone(),
                reason: "no such file".to_string(),
            }
            .into());
        }
        Ok(self
            .entries
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect())
    }
}
