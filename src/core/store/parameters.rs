//! SSM Parameter Store backend.
//!
//! Searches with `DescribeParameters` using a server-side `Name contains`
//! filter and resolves values with `GetParameters`.

use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::{Parameter, ParameterStringFilter};
use aws_sdk_ssm::Client;
use tracing::{debug, trace};

use super::session::{timestamp, Session};
use super::Store;
use crate::core::domain::{Column, EntryRef, Noun, Page, Query, ResolvedEntry};
use crate::error::{Result, StoreError};

/// `GetParameters` accepts at most this many names per call.
const BATCH_LIMIT: usize = 10;

/// Parameter table columns; extended ones need `--extended`.
pub const PARAMETER_COLUMNS: &[Column] = &[
    Column::new("Name", "Name"),
    Column::new("Value", "Value"),
    Column::extended("ARN", "ARN"),
    Column::extended("Type", "Type"),
    Column::extended("Version", "Version"),
    Column::extended("LastModifiedDate", "LastModifiedDate"),
];

/// AWS SSM Parameter Store.
pub struct ParameterStore {
    session: Session,
    client: Client,
    decrypt: bool,
}

impl ParameterStore {
    /// Largest page `DescribeParameters` returns per call.
    pub const MAX_PAGE_SIZE: i32 = 50;

    /// Create a store on an authenticated session.
    ///
    /// `decrypt` controls decryption of `SecureString` values.
    pub fn new(session: Session, decrypt: bool) -> Self {
        let client = Client::new(session.config());
        Self {
            session,
            client,
            decrypt,
        }
    }
}

impl Store for ParameterStore {
    fn noun(&self) -> Noun {
        Noun::PARAMETERS
    }

    fn columns(&self) -> &'static [Column] {
        PARAMETER_COLUMNS
    }

    fn filters_server_side(&self) -> bool {
        true
    }

    fn search(&self, query: &Query<'_>, cursor: Option<&str>) -> Result<Page> {
        trace!(?query, cursor, "describing parameters");

        let mut request = self
            .client
            .describe_parameters()
            .max_results(query.page_size)
            .set_next_token(cursor.map(str::to_string));

        if let Some(term) = query.term {
            let filter = ParameterStringFilter::builder()
                .key("Name")
                .option("Contains")
                .values(term)
                .build()
                .map_err(|e| StoreError::InvalidRequest(e.to_string()))?;
            request = request.parameter_filters(filter);
        }

        let output = self.session.block_on(request.send()).map_err(|e| {
            StoreError::Search(format!("DescribeParameters: {}", DisplayErrorContext(&e)))
        })?;

        let entries = output
            .parameters()
            .iter()
            .filter_map(|p| p.name())
            .map(EntryRef::new)
            .collect();

        Ok(Page::new(entries, output.next_token().map(str::to_string)))
    }

    fn fetch(&self, names: &[String]) -> Result<Vec<ResolvedEntry>> {
        let mut resolved = Vec::with_capacity(names.len());

        for batch in names.chunks(BATCH_LIMIT) {
            debug!(count = batch.len(), decrypt = self.decrypt, "getting parameters");

            let output = self
                .session
                .block_on(
                    self.client
                        .get_parameters()
                        .set_names(Some(batch.to_vec()))
                        .with_decryption(self.decrypt)
                        .send(),
                )
                .map_err(|e| {
                    StoreError::Fetch(format!("GetParameters: {}", DisplayErrorContext(&e)))
                })?;

            for name in output.invalid_parameters() {
                debug!(name = %name, "parameter not returned by store");
            }

            resolved.extend(output.parameters().iter().map(resolve));
        }

        Ok(resolved)
    }
}

fn resolve(parameter: &Parameter) -> ResolvedEntry {
    ResolvedEntry::new(
        parameter.name().unwrap_or_default(),
        parameter.value().unwrap_or_default(),
    )
    .with("ARN", parameter.arn())
    .with("Type", parameter.r#type().map(|t| t.as_str()))
    .with("Version", Some(parameter.version().to_string()))
    .with(
        "LastModifiedDate",
        parameter.last_modified_date().and_then(timestamp),
    )
}
