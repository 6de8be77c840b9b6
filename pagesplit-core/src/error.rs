//! Error types for splitting and reconstruction

use std::path::PathBuf;
use thiserror::Error;

/// Error type for pagesplit operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not exist
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Split input does not carry an `.html` or `.htm` extension
    #[error("Input file must be an HTML or HTM file: {}", .0.display())]
    InvalidExtension(PathBuf),

    /// Record file could not be parsed as a document record
    #[error("Malformed document record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    /// Input bytes are not valid UTF-8 under the strict decoding policy
    #[error("Invalid UTF-8 sequence at byte {offset}")]
    Decode {
        /// Byte offset of the first undecodable sequence
        offset: usize,
    },

    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern set configuration is unusable
    #[error("Invalid break patterns: {0}")]
    InvalidPatterns(String),

    /// A trigger or avoidance pattern failed to compile
    #[error("Pattern compilation failed: {0}")]
    Pattern(#[from] regex::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pagesplit operations
pub type Result<T> = std::result::Result<T, Error>;
