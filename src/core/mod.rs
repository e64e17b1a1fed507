//! Core library components.
//!
//! Everything needed to run the search-select-fetch workflow against any
//! `Store`, independent of the terminal.

pub mod config;
pub mod constants;
pub mod criteria;
pub mod domain;
pub mod prompt;
pub mod render;
pub mod search;
pub mod select;
pub mod store;
pub mod workflow;
