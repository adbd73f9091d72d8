//! deploy-keys - per-repository SSH deploy keys for CI builds.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use deploy_keys::cli::output;
use deploy_keys::cli::{execute, Cli};
use deploy_keys::core::constants::LOG_ENV;
use deploy_keys::error::{CommandError, Error};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("deploy_keys=debug")
        } else {
            EnvFilter::new("deploy_keys=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::MissingParameter(_) => Some("set --export-script (INPUT_EXPORT-SCRIPT)"),
            Error::Format(_) => {
                Some("each dependency is two lines: base64(owner/repo) then base64(private key)")
            }
            Error::Command(CommandError::NotFound(_)) => {
                Some("install git and openssh-client")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
