//! Backing stores.
//!
//! A `Store` is the capability the workflow runs against: paginated search
//! by name plus value lookup for a set of names. Two AWS implementations
//! exist, one for SSM Parameter Store and one for Secrets Manager.
//!
//! ## Adding a New Store
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module and wire a subcommand in `cli`

use std::future::Future;

use futures::future;

use crate::core::domain::{Column, Noun, Page, Query, ResolvedEntry};
use crate::error::Result;

mod parameters;
mod secrets;
mod session;

pub use parameters::{ParameterStore, PARAMETER_COLUMNS};
pub use secrets::{SecretsStore, SECRET_COLUMNS};
pub use session::Session;

/// Search and fetch capability of a key-value configuration store.
pub trait Store {
    /// How entries are named in messages.
    fn noun(&self) -> Noun;

    /// Columns available for rendering, extended ones included.
    fn columns(&self) -> &'static [Column];

    /// Whether `search` applies `Query::term` itself.
    ///
    /// When `false` the term is never sent and the caller filters names.
    fn filters_server_side(&self) -> bool;

    /// Fetch one page of entry names.
    ///
    /// # Arguments
    ///
    /// * `query` - Term (server-side stores only) and page size
    /// * `cursor` - Continuation cursor from the previous page
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Search` if the store call fails.
    fn search(&self, query: &Query<'_>, cursor: Option<&str>) -> Result<Page>;

    /// Resolve names to values.
    ///
    /// Names the store does not know may be missing from the result.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fetch` if any store call fails; no partial
    /// result is returned.
    fn fetch(&self, names: &[String]) -> Result<Vec<ResolvedEntry>>;
}

/// Run every future to completion, then fail if any of them failed.
///
/// Unlike `try_join_all` this never drops in-flight calls on the first
/// error, and it never hands back a partial result. The first error in
/// input order wins.
pub async fn join_all<T, F>(calls: impl IntoIterator<Item = F>) -> Result<Vec<T>>
where
    F: Future<Output = Result<T>>,
{
    future::join_all(calls).await.into_iter().collect()
}
