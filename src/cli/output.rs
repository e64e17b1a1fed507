//! Shared CLI output helpers.
//!
//! Everything here writes to stderr so stdout carries only tables and CSV.
//!
//! Color scheme (respects NO_COLOR):
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: hints
//! - Dimmed: progress labels

use std::io::{self, Write};

use console::style;

use crate::core::workflow::Reporter;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print an error message (red).
///
/// Example: `✗ Please authenticate against AWS to use this tool`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ No Parameters found`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ run: aws sso login`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Start a progress line in the format `Label... `.
///
/// Call `progress_done()` to finish the line.
pub fn progress(label: &str) {
    if colors_enabled() {
        eprint!("{}... ", style(label).dim());
    } else {
        eprint!("{}... ", label);
    }
    let _ = io::stderr().flush();
}

/// Finish a progress line with success/failure indicator.
pub fn progress_done(success: bool) {
    let word = if success { "done" } else { "failed" };
    if !colors_enabled() {
        eprintln!("{}", word);
    } else if success {
        eprintln!("{}", style(word).green());
    } else {
        eprintln!("{}", style(word).red());
    }
}

/// Reporter printing `label... done` lines and warnings to stderr.
pub struct Status;

impl Reporter for Status {
    fn start(&mut self, label: &str) {
        progress(label);
    }

    fn finish(&mut self, success: bool) {
        progress_done(success);
    }

    fn warn(&mut self, message: &str) {
        warn(message);
    }
}
