//! Constants used throughout asap.

/// Region used when neither the flag, the environment nor the config names one.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Environment variable consulted for the region when `--region` is absent.
pub const REGION_ENV: &str = "AWS_REGION";

/// Page size for store queries when no limit is given.
pub const DEFAULT_PAGE_SIZE: i32 = 50;

/// Environment variable overriding the user config file location.
pub const CONFIG_ENV: &str = "ASAP_CONFIG";

/// Config file relative to HOME (~/.asap/config.toml).
pub const CONFIG_FILE: &str = ".asap/config.toml";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "ASAP_LOG";

/// Line prompt shown when no search term was passed.
pub const TERM_PROMPT: &str = "What term do you want to search for?";
