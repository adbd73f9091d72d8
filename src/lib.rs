//! deploy-keys - per-repository SSH deploy keys for CI builds.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── prepare       # Pre-build phase
//! │   ├── cleanup       # Post-build phase
//! │   ├── output        # Terminal output helpers
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # Run settings (flags, INPUT_* env, TOML file)
//!     ├── dependency    # Encoded dependency list decoding
//!     ├── domain/       # Pairs, alias bindings, rewrite rules, overrides
//!     ├── provision     # Key files, known_hosts, ~/.ssh/config stanzas
//!     ├── rewrite       # url.<alias>.insteadOf rules
//!     ├── guard         # core.sshCommand identity override stripping
//!     ├── tokenizer     # Quote-aware argument splitting
//!     ├── lifecycle     # Prepare/cleanup orchestration
//!     ├── script        # Companion shell script export
//!     ├── exec          # Process runner trait
//!     ├── store/        # Config store trait + git implementation
//!     └── sink          # Progress sink trait
//! ```
//!
//! # How it works
//!
//! Each dependency gets an SSH host alias `github.com-repo-<i>` whose
//! `IdentityFile` is that dependency's deploy key. Rewrite rules then send
//! `https://github.com/<repo>`, `ssh://git@github.com/<repo>` and
//! `git@github.com:<repo>` to `git@github.com-repo-<i>:<repo>`, so
//! unmodified clone URLs pick the right key.

pub mod cli;
pub mod core;
pub mod error;
