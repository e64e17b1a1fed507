//! Interactive selection.

use tracing::debug;

use crate::core::domain::{EntryRef, Noun};
use crate::core::prompt::Prompter;
use crate::core::workflow::Reporter;
use crate::error::Result;

/// Selection progress.
#[derive(Debug, PartialEq, Eq)]
enum State {
    Prompting,
    Done(Vec<String>),
}

/// Ask the operator to pick entries until at least one is chosen.
///
/// Every empty answer warns through `reporter` and prompts again. There is
/// no retry limit; the loop ends on a non-empty selection or when the prompt
/// itself fails or is cancelled.
///
/// Callers must not pass an empty `entries` slice.
///
/// # Errors
///
/// Returns prompt errors, including `Error::Cancelled`.
pub fn select<P, R>(
    prompter: &mut P,
    reporter: &mut R,
    noun: Noun,
    entries: &[EntryRef],
) -> Result<Vec<String>>
where
    P: Prompter + ?Sized,
    R: Reporter + ?Sized,
{
    debug_assert!(!entries.is_empty(), "selector called without entries");

    let items: Vec<String> = entries.iter().map(|e| e.name().to_string()).collect();
    let message = format!("Select your {}", noun.plural);

    let mut state = State::Prompting;
    loop {
        state = match state {
            State::Prompting => {
                let chosen = prompter.select(&message, &items)?;
                if chosen.is_empty() {
                    reporter.warn(&noun.none_selected());
                    State::Prompting
                } else {
                    State::Done(chosen)
                }
            }
            State::Done(chosen) => {
                debug!(selected = chosen.len(), "selection complete");
                return Ok(chosen);
            }
        };
    }
}
