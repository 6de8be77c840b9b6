//! pagesplit CLI library
//!
//! This library provides the command-line interface for splitting HTML
//! documents at page breaks and reconstructing them from JSON records.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
