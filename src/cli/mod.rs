//! Command-line interface.

pub mod completions;
pub mod output;
pub mod prompt;
pub mod search;

use clap::{Args, Parser, Subcommand};

use crate::core::criteria::Flags;
use crate::core::render::Display;
use crate::core::workflow::Outcome;
use crate::error::Result;

/// asap - search AWS parameters and secrets.
#[derive(Parser)]
#[command(
    name = "asap",
    about = "Search and retrieve AWS SSM parameters and Secrets Manager secrets",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Search parameters in AWS SSM Parameter Store
    #[command(visible_alias = "ps", after_help = "Example:\n  asap ps -t awesome-param")]
    SearchParameters {
        #[command(flatten)]
        search: SearchArgs,

        /// Disable decryption of SecureString parameters
        #[arg(short = 'd', long)]
        disable_decryption: bool,
    },

    /// Search secrets in AWS Secrets Manager
    #[command(visible_alias = "sm", after_help = "Example:\n  asap sm -t awesome-secret")]
    SearchSecrets {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags shared by both search commands.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Term to search for
    #[arg(short, long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    pub term: Option<String>,

    /// AWS region override
    #[arg(short, long)]
    pub region: Option<String>,

    /// Limit for the amount of results returned, default is 50
    #[arg(short = 'n', long, value_parser = clap::value_parser!(i32).range(1..))]
    pub max_results: Option<i32>,

    /// Retrieve every match for the search term
    #[arg(long)]
    pub no_limit: bool,

    /// Retrieve every entry in the region
    #[arg(long)]
    pub all: bool,

    /// Output in CSV format
    #[arg(long, conflicts_with_all = ["no_truncate", "no_header"])]
    pub csv: bool,

    /// Show extra columns
    #[arg(short = 'x', long)]
    pub extended: bool,

    /// Do not truncate output to fit the screen
    #[arg(long)]
    pub no_truncate: bool,

    /// Hide the table header
    #[arg(long)]
    pub no_header: bool,
}

impl SearchArgs {
    /// Selection-mode flags for validation.
    pub fn flags(&self) -> Flags {
        Flags {
            term: self.term.clone(),
            max_results: self.max_results,
            no_limit: self.no_limit,
            all: self.all,
        }
    }

    pub fn display(&self) -> Display {
        Display {
            extended: self.extended,
            csv: self.csv,
            no_truncate: self.no_truncate,
            no_header: self.no_header,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
///
/// # Errors
///
/// Returns error if the command execution fails.
pub fn execute(command: Command) -> Result<Outcome> {
    match command {
        Command::SearchParameters {
            search,
            disable_decryption,
        } => search::parameters(&search, !disable_decryption),
        Command::SearchSecrets { search } => search::secrets(&search),
        Command::Completions { shell } => {
            completions::execute(shell, &mut std::io::stdout())?;
            Ok(Outcome::Displayed(0))
        }
    }
}
