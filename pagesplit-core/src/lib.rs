//! Page-break splitting for HTML documents
//!
//! This crate cuts an HTML document into pages at elements whose inline
//! style requests a page break (`page-break-before: always`,
//! `break-after: page`, ...), unless the same tag also declares a break
//! avoidance. The pages are stored in a [`DocumentRecord`] that can be
//! serialized to JSON and later turned back into the original text, byte for
//! byte.
//!
//! # Architecture
//!
//! - **Domain layer**: break location, segmentation and reconstruction as
//!   pure functions over text
//! - **API layer**: configuration, input decoding, the persisted record and
//!   the [`PageSplitter`] facade
//!
//! # Example
//!
//! ```rust
//! use pagesplit_core::{split_text, DocumentRecord};
//!
//! let html = "<p>one</p>\n<div style=\"page-break-before: always\">two</div>";
//! let record = split_text(html, "doc.html");
//! assert_eq!(record.total_pages(), 2);
//!
//! let json = record.to_json_pretty().unwrap();
//! let restored = DocumentRecord::from_json(&json).unwrap();
//! assert_eq!(restored.reconstruct(), html);
//! ```

pub mod api;
pub mod domain;
pub mod error;

pub use api::{
    reconstruct, split_text, Config, ConfigBuilder, DecodingPolicy, DocumentRecord, PageSplitter,
    RecordMetadata,
};
pub use domain::{BreakIndicator, BreakInfo, BreakLocator, PatternSet, Segment, Segmenter};
pub use error::{Error, Result};
