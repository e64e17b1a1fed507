//! User configuration.
//!
//! Reads the optional `~/.asap/config.toml` (or `$ASAP_CONFIG`) and resolves
//! the effective region and default page size.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Optional defaults from the user config file.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Region used when neither `--region` nor `AWS_REGION` is set
    #[serde(default)]
    pub region: Option<String>,
    /// Page size used when `--max-results` is not given
    #[serde(default)]
    pub max_results: Option<i32>,
}

impl Config {
    /// Path of the user config file, if a home directory is known.
    pub fn path() -> Option<PathBuf> {
        std::env::var_os(constants::CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(constants::CONFIG_FILE)))
    }

    /// Load the user config file, or defaults if there is none.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed or validated.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(max) = self.max_results {
            if max < 1 {
                return Err(ConfigError::Invalid {
                    key: "max_results",
                    reason: format!("must be a positive integer, got {}", max),
                }
                .into());
            }
        }
        if matches!(self.region.as_deref(), Some(r) if r.trim().is_empty()) {
            return Err(ConfigError::Invalid {
                key: "region",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// Effective region: flag, then `AWS_REGION`, then config, then default.
    pub fn region(&self, flag: Option<&str>) -> String {
        let env = std::env::var(constants::REGION_ENV).ok();
        resolve_region(flag, env.as_deref(), self.region.as_deref())
    }

    /// Page size for queries without `--max-results`.
    pub fn page_size(&self) -> i32 {
        self.max_results.unwrap_or(constants::DEFAULT_PAGE_SIZE)
    }
}

fn resolve_region(flag: Option<&str>, env: Option<&str>, config: Option<&str>) -> String {
    [flag, env, config]
        .into_iter()
        .flatten()
        .find(|r| !r.is_empty())
        .unwrap_or(constants::DEFAULT_REGION)
        .to_string()
}
