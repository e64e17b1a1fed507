//! Search commands.
//!
//! `search-parameters` and `search-secrets` differ only in the store they
//! build; both hand off to the shared workflow.

use std::io::{self, IsTerminal};

use tracing::debug;

use crate::cli::output::Status;
use crate::cli::prompt::Terminal;
use crate::cli::SearchArgs;
use crate::core::config::Config;
use crate::core::criteria::{self, SearchCriteria};
use crate::core::store::{ParameterStore, SecretsStore, Session, Store};
use crate::core::workflow::{self, Options, Outcome};
use crate::error::Result;

/// Search SSM Parameter Store.
pub fn parameters(args: &SearchArgs, decrypt: bool) -> Result<Outcome> {
    let (criteria, config) = prepare(args, ParameterStore::MAX_PAGE_SIZE)?;
    let session = Session::connect(&config.region(args.region.as_deref()))?;
    run(&ParameterStore::new(session, decrypt), args, criteria, &config)
}

/// Search Secrets Manager.
pub fn secrets(args: &SearchArgs) -> Result<Outcome> {
    let (criteria, config) = prepare(args, SecretsStore::MAX_PAGE_SIZE)?;
    let session = Session::connect(&config.region(args.region.as_deref()))?;
    run(&SecretsStore::new(session), args, criteria, &config)
}

/// Validate flags and load config before touching AWS.
fn prepare(args: &SearchArgs, max_page_size: i32) -> Result<(SearchCriteria, Config)> {
    let criteria = criteria::validate(args.flags())?;
    let config = Config::load()?;
    criteria.check_page_size(config.page_size(), max_page_size)?;
    Ok((criteria, config))
}

fn run<S: Store>(
    store: &S,
    args: &SearchArgs,
    criteria: SearchCriteria,
    config: &Config,
) -> Result<Outcome> {
    let options = Options {
        display: args.display(),
        page_size: config.page_size(),
        width: terminal_width(),
    };
    debug!(?options, "running search");

    let mut stdout = io::stdout().lock();
    workflow::run(
        store,
        &mut Terminal,
        &mut Status,
        criteria,
        &options,
        &mut stdout,
    )
}

fn terminal_width() -> Option<u16> {
    if !io::stdout().is_terminal() {
        return None;
    }
    console::Term::stdout()
        .size_checked()
        .map(|(_rows, cols)| cols)
}
