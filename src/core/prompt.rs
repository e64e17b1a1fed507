//! Operator input.
//!
//! The workflow only sees this trait; the terminal implementation lives in
//! `cli::prompt` and tests substitute scripted answers.

use crate::error::Result;

/// Interactive input capability.
pub trait Prompter {
    /// Ask for a free-text line.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read.
    fn term(&mut self, message: &str) -> Result<String>;

    /// Offer `items` as a checkbox list and return the chosen labels.
    ///
    /// An empty vector means the operator confirmed without ticking anything.
    ///
    /// # Errors
    ///
    /// Returns `Error::Cancelled` if the operator aborts the prompt, or an
    /// error if input cannot be read.
    fn select(&mut self, message: &str, items: &[String]) -> Result<Vec<String>>;
}
