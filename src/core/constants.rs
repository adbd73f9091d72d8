//! Constants used throughout deploy-keys.
//!
//! Centralizes host names, file names and permission modes.

/// The forge host every dependency is cloned from.
pub const FORGE_HOST: &str = "github.com";

/// User the forge expects for SSH clones.
pub const FORGE_USER: &str = "git";

/// SSH directory relative to HOME (~/.ssh).
pub const SSH_DIR: &str = ".ssh";

/// SSH client configuration file inside [`SSH_DIR`].
pub const SSH_CONFIG_FILE: &str = "config";

/// Known-hosts store inside [`SSH_DIR`].
pub const KNOWN_HOSTS_FILE: &str = "known_hosts";

/// Owner read only.
pub const KEY_FILE_MODE: u32 = 0o400;

/// Exported companion script mode.
pub const SCRIPT_MODE: u32 = 0o755;

/// Local git configuration key holding a custom SSH invocation.
pub const SSH_COMMAND_KEY: &str = "core.sshCommand";

/// Identity-file flag stripped from [`SSH_COMMAND_KEY`].
pub const IDENTITY_FLAG: &str = "-i";

/// Injection marker replaced by the custom prepare command in the exported script.
pub const PREPARE_MARKER: &str = "# @custom-prepare@";

/// Injection marker replaced by the custom cleanup command in the exported script.
pub const CLEANUP_MARKER: &str = "# @custom-cleanup@";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DEPLOY_KEYS_LOG";
