//! Persisted document record
//!
//! The record is the only artifact handed from a split to a later
//! reconstruction. Text fields are stored verbatim; serde_json escapes only
//! what JSON requires, so newlines, markup and non-ASCII text round-trip
//! unchanged.

use crate::api::config::defaults;
use crate::domain::{reconstruct, Segment};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_parsing_method() -> String {
    defaults::PARSING_METHOD.to_string()
}

/// Document-level metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Path of the split input, informational only
    pub original_file: String,
    /// Number of segments
    pub total_pages: usize,
    /// Character count of the decoded source
    pub file_size: usize,
    /// How break points were located
    #[serde(default = "default_parsing_method")]
    pub parsing_method: String,
    /// First `<head>` section of the source, informational only
    #[serde(default)]
    pub head_content: String,
}

/// A split document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Document-level metadata
    pub metadata: RecordMetadata,
    /// Pages in split order
    #[serde(rename = "chunks")]
    pub segments: Vec<Segment>,
}

impl DocumentRecord {
    /// Build a record from freshly split segments
    pub fn new(
        original_file: impl Into<String>,
        source: &str,
        head_content: impl Into<String>,
        segments: Vec<Segment>,
    ) -> Self {
        Self {
            metadata: RecordMetadata {
                original_file: original_file.into(),
                total_pages: segments.len(),
                file_size: source.chars().count(),
                parsing_method: default_parsing_method(),
                head_content: head_content.into(),
            },
            segments,
        }
    }

    /// Number of pages in the record
    pub fn total_pages(&self) -> usize {
        self.segments.len()
    }

    /// Rebuild the source text
    pub fn reconstruct(&self) -> String {
        if self.metadata.total_pages != self.segments.len() {
            log::warn!(
                "Record declares {} page(s) but holds {}",
                self.metadata.total_pages,
                self.segments.len()
            );
        }
        reconstruct(&self.segments)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a record from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::MalformedRecord)
    }

    /// Read and parse a record file
    pub fn read_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::InputNotFound(path.to_path_buf()));
        }
        let json = fs::read_to_string(path)?;
        let record = Self::from_json(&json)?;
        log::info!(
            "Loaded record for {} with {} page(s)",
            record.metadata.original_file,
            record.segments.len()
        );
        Ok(record)
    }
}
