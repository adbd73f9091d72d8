//! Domain types.

mod alias;
mod pair;
mod rule;
mod ssh_command;

pub use alias::AliasBinding;
pub use pair::{DependencyPair, KeyMaterial};
pub use rule::{RewriteRule, UrlForm};
pub use ssh_command::SshCommandOverride;
