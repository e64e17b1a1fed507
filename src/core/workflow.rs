//! Search-select-fetch pipeline.
//!
//! One generic run shared by every store: resolve the term, accumulate
//! matching names, let the operator pick, fetch the values, render them.

use std::io::Write;

use tracing::{debug, info};

use crate::core::constants;
use crate::core::criteria::SearchCriteria;
use crate::core::prompt::Prompter;
use crate::core::render::{self, Display};
use crate::core::search;
use crate::core::select;
use crate::core::store::Store;
use crate::error::Result;

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// This many entries were rendered
    Displayed(usize),
    /// The search or the fetch came back empty
    NothingFound,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Displayed(_) => 0,
            Outcome::NothingFound => 1,
        }
    }
}

/// Run-wide settings.
#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub display: Display,
    /// Page size when the criteria carry no limit
    pub page_size: i32,
    /// Terminal width, `None` when not writing to a terminal
    pub width: Option<u16>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            display: Display::default(),
            page_size: constants::DEFAULT_PAGE_SIZE,
            width: None,
        }
    }
}

/// Operator-facing status: progress on the slow steps and warnings.
///
/// Kept apart from the result writer so notices never end up in a table or
/// CSV document.
pub trait Reporter {
    fn start(&mut self, _label: &str) {}
    fn finish(&mut self, _success: bool) {}
    fn warn(&mut self, _message: &str) {}
}

impl Reporter for () {}

/// Run the pipeline against `store`.
///
/// # Errors
///
/// Returns prompt, store or write errors. Nothing is rendered when the fetch
/// fails.
pub fn run<S, P, R, W>(
    store: &S,
    prompter: &mut P,
    reporter: &mut R,
    criteria: SearchCriteria,
    options: &Options,
    out: &mut W,
) -> Result<Outcome>
where
    S: Store + ?Sized,
    P: Prompter + ?Sized,
    R: Reporter + ?Sized,
    W: Write + ?Sized,
{
    let noun = store.noun();

    let criteria = if criteria.needs_term() {
        criteria.with_term(prompt_term(prompter)?)
    } else {
        criteria
    };
    info!(term = ?criteria.term(), scope = ?criteria.scope(), "searching {}", noun.plural);

    reporter.start(&format!("listing matching {}", noun.plural));
    let entries = search::accumulate(store, &criteria, options.page_size);
    reporter.finish(entries.is_ok());
    let entries = entries?;

    if entries.is_empty() {
        reporter.warn(&noun.not_found());
        return Ok(Outcome::NothingFound);
    }

    let chosen = select::select(prompter, reporter, noun, &entries)?;

    reporter.start(&format!("retrieving {}", noun.plural));
    let resolved = store.fetch(&chosen);
    reporter.finish(resolved.is_ok());
    let resolved = resolved?;

    if resolved.is_empty() {
        debug!(requested = chosen.len(), "store returned no values");
        reporter.warn(&noun.not_found());
        return Ok(Outcome::NothingFound);
    }

    render::render(
        &resolved,
        store.columns(),
        &options.display,
        options.width,
        out,
    )?;

    Ok(Outcome::Displayed(resolved.len()))
}

/// Ask for a search term until the operator gives a non-blank one.
fn prompt_term<P: Prompter + ?Sized>(prompter: &mut P) -> Result<String> {
    loop {
        let term = prompter.term(constants::TERM_PROMPT)?;
        let term = term.trim();
        if !term.is_empty() {
            return Ok(term.to_string());
        }
        debug!("blank search term, asking again");
    }
}
