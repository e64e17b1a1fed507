//! Secrets Manager backend.
//!
//! `ListSecrets` has no substring filter, so names are filtered by the
//! caller. Values are fetched with one `GetSecretValue` call per name, all in
//! flight at once and joined before anything is returned.

use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueOutput;
use aws_sdk_secretsmanager::Client;
use base64::Engine;
use tracing::{debug, trace};

use super::session::{timestamp, Session};
use super::{join_all, Store};
use crate::core::domain::{Column, EntryRef, Noun, Page, Query, ResolvedEntry};
use crate::error::{Result, StoreError};

/// Secret table columns. `SecretString` is shown as `Value`.
pub const SECRET_COLUMNS: &[Column] = &[
    Column::new("Name", "Name"),
    Column::new("Value", "Value"),
    Column::extended("SecretBinary", "SecretBinary"),
    Column::extended("ARN", "ARN"),
    Column::extended("VersionId", "VersionId"),
    Column::extended("CreatedDate", "CreatedDate"),
];

/// AWS Secrets Manager.
pub struct SecretsStore {
    session: Session,
    client: Client,
}

impl SecretsStore {
    /// Largest page `ListSecrets` returns per call.
    pub const MAX_PAGE_SIZE: i32 = 100;

    /// Create a store on an authenticated session.
    pub fn new(session: Session) -> Self {
        let client = Client::new(session.config());
        Self { session, client }
    }

    async fn get_secret(&self, name: &str) -> Result<ResolvedEntry> {
        trace!(name, "getting secret value");

        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|e| {
                StoreError::Fetch(format!(
                    "GetSecretValue {}: {}",
                    name,
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(resolve(name, &output))
    }
}

impl Store for SecretsStore {
    fn noun(&self) -> Noun {
        Noun::SECRETS
    }

    fn columns(&self) -> &'static [Column] {
        SECRET_COLUMNS
    }

    fn filters_server_side(&self) -> bool {
        false
    }

    fn search(&self, query: &Query<'_>, cursor: Option<&str>) -> Result<Page> {
        trace!(?query, cursor, "listing secrets");

        let output = self
            .session
            .block_on(
                self.client
                    .list_secrets()
                    .max_results(query.page_size)
                    .set_next_token(cursor.map(str::to_string))
                    .send(),
            )
            .map_err(|e| StoreError::Search(format!("ListSecrets: {}", DisplayErrorContext(&e))))?;

        let entries = output
            .secret_list()
            .iter()
            .filter_map(|s| s.name())
            .map(EntryRef::new)
            .collect();

        Ok(Page::new(entries, output.next_token().map(str::to_string)))
    }

    fn fetch(&self, names: &[String]) -> Result<Vec<ResolvedEntry>> {
        debug!(count = names.len(), "getting secret values");
        let calls = names.iter().map(|name| self.get_secret(name));
        self.session.block_on(join_all(calls))
    }
}

fn resolve(requested: &str, output: &GetSecretValueOutput) -> ResolvedEntry {
    let binary = output
        .secret_binary()
        .map(|blob| base64::engine::general_purpose::STANDARD.encode(blob.as_ref()));

    ResolvedEntry::new(
        output.name().unwrap_or(requested),
        output.secret_string().unwrap_or_default(),
    )
    .with("SecretBinary", binary)
    .with("ARN", output.arn())
    .with("VersionId", output.version_id())
    .with("CreatedDate", output.created_date().and_then(timestamp))
}
