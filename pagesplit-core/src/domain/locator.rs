//! Break locator
//!
//! Scans raw markup for opening tags whose inline style requests a page break.
//! Matching is purely textual: tag nesting, comments and script blocks are not
//! taken into account.

use super::patterns::PatternSet;
use super::types::BreakIndicator;
use regex::Regex;
use std::sync::OnceLock;

static HEAD_SECTION: OnceLock<Regex> = OnceLock::new();

/// Locates valid break points in a document
#[derive(Debug, Clone, Copy)]
pub struct BreakLocator<'p> {
    patterns: &'p PatternSet,
}

impl<'p> BreakLocator<'p> {
    /// Create a locator over a pattern set
    pub fn new(patterns: &'p PatternSet) -> Self {
        Self { patterns }
    }

    /// Find every break indicator, ordered by position
    pub fn locate(&self, text: &str) -> Vec<BreakIndicator> {
        let mut breaks = Vec::new();
        let mut counted_bytes = 0;
        let mut counted_chars = 0;

        for tag in self.patterns.tag_regex().find_iter(text) {
            let matched = tag.as_str();
            // Strip the surrounding '<' and '>'
            let content = &matched[1..matched.len() - 1];

            if self.patterns.is_avoided(content) {
                log::debug!(
                    "Skipping break candidate at byte {}: avoidance declared",
                    tag.start()
                );
                continue;
            }

            counted_chars += text[counted_bytes..tag.start()].chars().count();
            counted_bytes = tag.start();

            breaks.push(BreakIndicator::new(
                tag.start(),
                counted_chars,
                matched.to_string(),
            ));
        }

        breaks.sort_by_key(BreakIndicator::byte_offset);
        log::debug!("Located {} break point(s)", breaks.len());
        breaks
    }
}

impl Default for BreakLocator<'static> {
    fn default() -> Self {
        Self::new(PatternSet::builtin())
    }
}

/// First `<head ... </head>` span of the document, or an empty string
pub fn head_excerpt(text: &str) -> &str {
    let head = HEAD_SECTION
        .get_or_init(|| Regex::new(r"(?is)<head.*?</head>").expect("head pattern must compile"));

    head.find(text).map_or("", |m| m.as_str())
}
