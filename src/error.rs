//! Error types.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please authenticate against AWS to use this tool")]
    AuthenticationMissing,

    #[error("--{first} cannot be used together with --{second}")]
    ConflictingOptions {
        first: &'static str,
        second: &'static str,
    },

    #[error("page size {requested} is above the {max} results the store returns per call")]
    PageSizeTooLarge { requested: i32, max: i32 },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}: no terminal for interactive input")]
    NotInteractive(&'static str),

    #[error("selection cancelled")]
    Cancelled,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures talking to a backing store.
///
/// Unreachable endpoints and malformed responses are not told apart.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("search failed: {0}")]
    Search(String),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to create runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// User configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
