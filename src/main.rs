//! asap - search AWS parameters and secrets from the terminal.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use asap::cli::output;
use asap::cli::{execute, Cli};
use asap::core::constants::LOG_ENV;
use asap::error::Error;

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("asap=debug")
        } else {
            EnvFilter::new("asap=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    match execute(cli.command) {
        Ok(outcome) => std::process::exit(outcome.exit_code()),
        Err(e) => {
            let suggestion = match &e {
                Error::AuthenticationMissing => {
                    Some("configure credentials, e.g. run: aws sso login")
                }
                Error::NotInteractive(_) => Some("run asap from an interactive terminal"),
                Error::PageSizeTooLarge { .. } => {
                    Some("lower --max-results or max_results in the config file")
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
}
