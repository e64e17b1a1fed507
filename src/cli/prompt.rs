//! Terminal prompts.

use std::io::{self, IsTerminal};

use dialoguer::{Input, MultiSelect};

use crate::core::prompt::Prompter;
use crate::error::{Error, Result};

/// dialoguer-backed prompter on the controlling terminal.
///
/// Refuses to prompt when stdin is not a terminal rather than blocking.
pub struct Terminal;

impl Prompter for Terminal {
    fn term(&mut self, message: &str) -> Result<String> {
        if !io::stdin().is_terminal() {
            return Err(Error::NotInteractive("search term (pass --term or --all)"));
        }
        let term: String = Input::new().with_prompt(message).interact_text()?;
        Ok(term.trim().to_string())
    }

    fn select(&mut self, message: &str, items: &[String]) -> Result<Vec<String>> {
        if !io::stdin().is_terminal() {
            return Err(Error::NotInteractive("entry selection"));
        }
        let picked = MultiSelect::new()
            .with_prompt(format!("{} (space to toggle, enter to confirm)", message))
            .items(items)
            .interact_opt()?;

        match picked {
            Some(indices) => Ok(indices.into_iter().map(|i| items[i].clone()).collect()),
            None => Err(Error::Cancelled),
        }
    }
}
