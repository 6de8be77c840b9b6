//! Public API for splitting and reconstructing documents
//!
//! [`PageSplitter`] ties the domain pieces together: decode, locate breaks,
//! segment, and wrap the result in a [`DocumentRecord`]. Reconstruction only
//! needs the record.

mod config;
mod input;
mod record;

pub use config::{defaults, Config, ConfigBuilder};
pub use input::{ensure_exists, ensure_html_extension, read_html, DecodingPolicy, HTML_EXTENSIONS};
pub use record::{DocumentRecord, RecordMetadata};

use crate::domain::{head_excerpt, BreakIndicator, BreakLocator, Segment, Segmenter};
use crate::error::Result;
use std::path::Path;

/// Splits HTML documents into page records
#[derive(Debug, Clone, Default)]
pub struct PageSplitter {
    config: Config,
}

impl PageSplitter {
    /// Create a splitter with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a splitter with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Find valid break points in `text`
    pub fn locate(&self, text: &str) -> Vec<BreakIndicator> {
        BreakLocator::new(self.config.patterns()).locate(text)
    }

    /// Cut `text` at previously located break points
    pub fn segment(&self, text: &str, breaks: &[BreakIndicator]) -> Vec<Segment> {
        Segmenter::new(self.config.preview_chars()).segment(text, breaks)
    }

    /// Split in-memory text into a record
    pub fn split_text(&self, text: &str, original_file: impl Into<String>) -> DocumentRecord {
        let breaks = self.locate(text);
        let segments = self.segment(text, &breaks);
        DocumentRecord::new(original_file, text, head_excerpt(text), segments)
    }

    /// Read, decode and split an HTML file
    pub fn split_file(&self, path: &Path) -> Result<DocumentRecord> {
        let text = read_html(path, self.config.decoding())?;
        let record = self.split_text(&text, path.to_string_lossy());
        log::info!(
            "Split {} into {} page(s)",
            path.display(),
            record.total_pages()
        );
        Ok(record)
    }

    /// Load a record file and rebuild its source text
    pub fn reconstruct_file(&self, path: &Path) -> Result<(DocumentRecord, String)> {
        let record = DocumentRecord::read_from(path)?;
        let text = record.reconstruct();
        Ok((record, text))
    }
}

/// Split text with the default configuration
pub fn split_text(text: &str, original_file: impl Into<String>) -> DocumentRecord {
    PageSplitter::new().split_text(text, original_file)
}

/// Rebuild the source text of a record
pub fn reconstruct(record: &DocumentRecord) -> String {
    record.reconstruct()
}
