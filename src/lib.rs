//! asap - search and retrieve AWS parameters and secrets from the terminal.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── search        # search-parameters / search-secrets handlers
//! │   ├── prompt        # dialoguer-backed Prompter
//! │   ├── output        # styled terminal messages
//! │   └── completions   # Shell completions
//! └── core/             # Library components
//!     ├── config        # region and user config resolution
//!     ├── criteria      # flag validation into SearchCriteria
//!     ├── domain/       # entries, pages, columns
//!     ├── search        # paginated result accumulation
//!     ├── select        # re-prompting checkbox selection
//!     ├── render        # table / CSV projection
//!     ├── store/        # Store trait and AWS backends
//!     └── workflow      # search-select-fetch pipeline
//! ```

pub mod cli;
pub mod core;
pub mod error;
