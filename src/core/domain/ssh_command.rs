//! SSH command override type.
//!
//! Wraps the local `core.sshCommand` value, which may force an identity
//! file that would win over the per-alias `IdentityFile` entries.

use crate::core::constants::IDENTITY_FLAG;
use crate::core::tokenizer;

/// A parsed `core.sshCommand` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshCommandOverride {
    raw: String,
    tokens: Vec<String>,
}

impl SshCommandOverride {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            tokens: tokenizer::tokenize(raw),
        }
    }

    /// The value as read from configuration.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Position of the first `-i` flag, if any.
    pub fn identity_flag(&self) -> Option<usize> {
        self.tokens.iter().position(|t| t == IDENTITY_FLAG)
    }

    /// Remove the first `-i` flag and the value that follows it.
    ///
    /// Returns the removed identity file value, or `None` when no flag was
    /// present. A trailing `-i` with no value is removed on its own.
    pub fn strip_identity(&mut self) -> Option<String> {
        let at = self.identity_flag()?;
        let end = (at + 2).min(self.tokens.len());
        let mut removed = self.tokens.drain(at..end);
        removed.next();
        Some(removed.next().unwrap_or_default())
    }

    /// Remaining tokens joined with single spaces.
    pub fn render(&self) -> String {
        tokenizer::join(&self.tokens).trim().to_string()
    }
}
