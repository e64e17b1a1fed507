//! Authenticated AWS session.
//!
//! Loads the shared AWS config for a region and proves the default credential
//! chain yields credentials before any store is queried. The AWS SDK is
//! async; the session owns a current-thread runtime the stores block on.

use std::future::Future;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_ssm::primitives::{DateTime, DateTimeFormat};
use tokio::runtime::Runtime;
use tracing::debug;

use crate::error::{Error, Result, StoreError};

/// AWS config plus the runtime used to drive SDK calls.
pub struct Session {
    runtime: Runtime,
    config: SdkConfig,
}

impl Session {
    /// Load AWS config for `region` and verify credentials.
    ///
    /// # Errors
    ///
    /// Returns `Error::AuthenticationMissing` if no credentials resolve, or
    /// `StoreError::Runtime` if the runtime cannot be created.
    pub fn connect(region: &str) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(StoreError::Runtime)?;

        debug!(region, "loading AWS config");
        let config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load(),
        );

        let provider = config
            .credentials_provider()
            .ok_or(Error::AuthenticationMissing)?;
        runtime
            .block_on(provider.provide_credentials())
            .map_err(|e| {
                debug!(error = %e, "no credentials resolved");
                Error::AuthenticationMissing
            })?;

        Ok(Self { runtime, config })
    }

    pub(crate) fn config(&self) -> &SdkConfig {
        &self.config
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

/// Render an SDK timestamp as RFC 3339.
pub(crate) fn timestamp(date: &DateTime) -> Option<String> {
    date.fmt(DateTimeFormat::DateTime).ok()
}
