//! Search criteria and flag validation.
//!
//! The selection-mode flags (`--term`, `--max-results`, `--no-limit`,
//! `--all`) are checked here in one place instead of as per-flag clap
//! metadata, so the rules can be tested without parsing a command line.

use tracing::debug;

use crate::error::{Error, Result};

/// How far a search follows the store's continuation cursors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// One page only
    Scoped,
    /// Every page matching the term
    Unlimited,
    /// Every entry in the region, no term
    All,
}

impl Scope {
    /// Whether the accumulator keeps paging while a cursor is returned.
    pub fn follows_cursor(self) -> bool {
        matches!(self, Scope::Unlimited | Scope::All)
    }
}

/// Raw selection-mode flags as parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub term: Option<String>,
    pub max_results: Option<i32>,
    pub no_limit: bool,
    pub all: bool,
}

/// Validated search criteria.
///
/// Invariant: `scope == All` implies `term` is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    term: Option<String>,
    scope: Scope,
    limit: Option<i32>,
}

impl SearchCriteria {
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn limit(&self) -> Option<i32> {
        self.limit
    }

    /// True when the operator still has to supply a term.
    pub fn needs_term(&self) -> bool {
        self.term.is_none() && self.scope != Scope::All
    }

    /// Criteria with an interactively supplied term.
    ///
    /// Ignored for `Scope::All`, which never carries a term.
    pub fn with_term(self, term: impl Into<String>) -> Self {
        if self.scope == Scope::All {
            return self;
        }
        Self {
            term: Some(term.into()),
            ..self
        }
    }

    /// Page size sent with every query.
    pub fn page_size(&self, default: i32) -> i32 {
        self.limit.unwrap_or(default)
    }

    /// Check the page size against a store's per-call maximum.
    ///
    /// # Errors
    ///
    /// Returns `Error::PageSizeTooLarge` when the store would reject it.
    pub fn check_page_size(&self, default: i32, max: i32) -> Result<()> {
        let requested = self.page_size(default);
        if requested > max {
            return Err(Error::PageSizeTooLarge { requested, max });
        }
        Ok(())
    }
}

/// Pairs of flags that cannot be combined, in reporting order.
const CONFLICTS: &[(&str, &str)] = &[
    ("term", "all"),
    ("max-results", "no-limit"),
    ("max-results", "all"),
    ("no-limit", "all"),
];

/// Validate raw flags into search criteria.
///
/// # Errors
///
/// Returns `Error::ConflictingOptions` naming the first conflicting pair.
pub fn validate(flags: Flags) -> Result<SearchCriteria> {
    let present = |name: &str| match name {
        "term" => flags.term.is_some(),
        "max-results" => flags.max_results.is_some(),
        "no-limit" => flags.no_limit,
        "all" => flags.all,
        _ => false,
    };

    if let Some(&(first, second)) = CONFLICTS
        .iter()
        .find(|(first, second)| present(first) && present(second))
    {
        return Err(Error::ConflictingOptions { first, second });
    }

    let scope = if flags.all {
        Scope::All
    } else if flags.no_limit {
        Scope::Unlimited
    } else {
        Scope::Scoped
    };

    let criteria = SearchCriteria {
        term: flags.term,
        scope,
        limit: flags.max_results,
    };
    debug!(?criteria, "validated search criteria");

    Ok(criteria)
}
