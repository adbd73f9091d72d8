//! URL rewrite registration.
//!
//! Routes every access form of a dependency's URL through its SSH alias
//! with `url.<alias-url>.insteadOf` rules in the global git configuration.
//! Rules are appended without checking for existing ones; git resolves
//! duplicates fine, but the file grows on every run.

use tracing::debug;

use crate::core::domain::{AliasBinding, DependencyPair, RewriteRule, UrlForm};
use crate::core::store::ConfigStore;
use crate::error::Result;

/// The rewrite rules for one dependency, in registration order.
pub fn rules_for(binding: &AliasBinding, pair: &DependencyPair) -> Vec<RewriteRule> {
    UrlForm::ALL
        .iter()
        .map(|form| {
            RewriteRule::new(
                *form,
                binding.hostname(),
                binding.alias(),
                pair.repository(),
            )
        })
        .collect()
}

/// Append the rewrite rules for one dependency to `store`.
///
/// # Errors
///
/// Returns the store's error on the first failed append; earlier rules
/// stay in place.
pub fn register(
    store: &mut dyn ConfigStore,
    binding: &AliasBinding,
    pair: &DependencyPair,
) -> Result<Vec<RewriteRule>> {
    let rules = rules_for(binding, pair);
    for rule in &rules {
        store.append(&rule.config_key(), rule.pattern())?;
        debug!(
            scope = store.scope(),
            target = rule.target(),
            pattern = rule.pattern(),
            "rewrite rule added"
        );
    }
    Ok(rules)
}
