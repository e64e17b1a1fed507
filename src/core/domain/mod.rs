//! Domain types.

mod column;
mod entry;
mod page;

pub use column::{Column, Noun};
pub use entry::{EntryRef, ResolvedEntry};
pub use page::{Page, Query};
