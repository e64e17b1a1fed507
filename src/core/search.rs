//! Result accumulation.
//!
//! Pages through a store until it runs out of cursors or the criteria stop
//! following them, collecting entry names in the order the store returns
//! them.

use tracing::{debug, trace};

use crate::core::criteria::SearchCriteria;
use crate::core::domain::{EntryRef, Query};
use crate::core::store::Store;
use crate::error::Result;

/// Collect every entry matching `criteria`.
///
/// The term is sent to stores that filter server-side and applied here as a
/// substring match for the rest. Only `Unlimited` and `All` searches follow
/// continuation cursors. No deduplication beyond what the store does.
///
/// # Errors
///
/// Returns the first store error; nothing collected so far is returned.
pub fn accumulate<S: Store + ?Sized>(
    store: &S,
    criteria: &SearchCriteria,
    default_page_size: i32,
) -> Result<Vec<EntryRef>> {
    let server_side = store.filters_server_side();
    let term = criteria.term();
    let query = Query {
        term: if server_side { term } else { None },
        page_size: criteria.page_size(default_page_size),
    };

    let mut entries = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = store.search(&query, cursor.as_deref())?;
        pages += 1;
        trace!(page = pages, returned = page.entries.len(), "received page");

        match (server_side, term) {
            (false, Some(term)) => entries.extend(
                page.entries
                    .into_iter()
                    .filter(|entry| entry.name().contains(term)),
            ),
            _ => entries.extend(page.entries),
        }

        match page.next {
            Some(next) if criteria.scope().follows_cursor() => cursor = Some(next),
            _ => break,
        }
    }

    debug!(pages, found = entries.len(), "search complete");
    Ok(entries)
}
