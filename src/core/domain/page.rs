//! Search queries and result pages.

use super::EntryRef;

/// One query against a store.
///
/// `term` is only set when the store filters by name server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query<'a> {
    pub term: Option<&'a str>,
    pub page_size: i32,
}

/// One page of search results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub entries: Vec<EntryRef>,
    /// Continuation cursor; `None` once the store is exhausted.
    pub next: Option<String>,
}

impl Page {
    pub fn new(entries: Vec<EntryRef>, next: Option<String>) -> Self {
        Self { entries, next }
    }

    /// A final page with no cursor.
    pub fn last(entries: Vec<EntryRef>) -> Self {
        Self::new(entries, None)
    }
}
