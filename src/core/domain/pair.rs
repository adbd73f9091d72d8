//! Dependency pair type.
//!
//! A repository together with the deploy key that grants access to it.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Private key material for one repository.
///
/// Stored verbatim: line breaks inside a PEM block are significant.
/// The buffer is wiped on drop and `Debug` never prints it.
#[derive(Clone)]
pub struct KeyMaterial(Zeroizing<String>);

impl KeyMaterial {
    pub fn new(text: String) -> Self {
        Self(Zeroizing::new(text))
    }

    /// Raw key text, exactly as decoded.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Short SHA-256 fingerprint, safe to print.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        digest[..8].iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyMaterial(sha256:{})", self.fingerprint())
    }
}

/// A decoded `(repository, key)` entry from the dependency list.
#[derive(Debug, Clone)]
pub struct DependencyPair {
    repository: String,
    key: KeyMaterial,
}

impl DependencyPair {
    pub fn new(repository: impl Into<String>, key: KeyMaterial) -> Self {
        Self {
            repository: repository.into(),
            key,
        }
    }

    /// Repository in `owner/name` form.
    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }
}
