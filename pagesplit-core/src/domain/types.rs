//! Core value types shared by the locator, segmenter and reconstructor

use serde::{Deserialize, Serialize};

/// A located page-break trigger
///
/// Indicators are only produced by the break locator and are never mutated
/// afterwards. Both offsets point at the `<` that opens the element's tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakIndicator {
    byte_offset: usize,
    char_offset: usize,
    matched_text: String,
}

impl BreakIndicator {
    pub(crate) fn new(byte_offset: usize, char_offset: usize, matched_text: String) -> Self {
        Self {
            byte_offset,
            char_offset,
            matched_text,
        }
    }

    /// Byte offset of the opening `<` in the source text
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }

    /// Character offset of the opening `<` in the source text
    pub fn char_offset(&self) -> usize {
        self.char_offset
    }

    /// Verbatim opening tag, including the angle brackets
    pub fn matched_text(&self) -> &str {
        &self.matched_text
    }

    /// The matched tag truncated to at most `max_chars` characters
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.matched_text.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.matched_text[..idx],
            None => &self.matched_text,
        }
    }
}

/// Sentinels stored in place of element details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakMarker {
    /// The document contained no break points
    #[serde(rename = "No breaks found")]
    NoBreaks,
    /// The trailing segment after the last break point
    #[serde(rename = "Final chunk")]
    FinalChunk,
}

/// Preview of the element that ended a segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Leading characters of the triggering tag
    pub break_text: String,
    /// Character offset of the triggering tag
    pub position: usize,
}

/// What closed a segment: a located element or a sentinel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakInfo {
    /// Sentinel string
    Marker(BreakMarker),
    /// Triggering element preview
    Element(ElementInfo),
}

impl BreakInfo {
    /// Sentinel for a document without breaks
    pub fn no_breaks() -> Self {
        BreakInfo::Marker(BreakMarker::NoBreaks)
    }

    /// Sentinel for the remainder after the last break
    pub fn final_chunk() -> Self {
        BreakInfo::Marker(BreakMarker::FinalChunk)
    }

    /// Element details built from an indicator
    pub fn from_indicator(indicator: &BreakIndicator, preview_chars: usize) -> Self {
        BreakInfo::Element(ElementInfo {
            break_text: indicator.preview(preview_chars).to_string(),
            position: indicator.char_offset(),
        })
    }
}

/// One page of the split document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// 1-based page number
    #[serde(rename = "page")]
    pub page_number: usize,
    /// Exact slice of the source text
    pub content: String,
    /// True for every page except the first
    pub has_break_before: bool,
    /// What ended (or didn't end) this page
    #[serde(rename = "break_element_info")]
    pub break_info: BreakInfo,
}

impl Segment {
    /// Page content without the blank space that trails it before the next break
    pub fn body(&self) -> &str {
        let end = super::segmenter::trailing_whitespace_start(&self.content, 0, self.content.len());
        &self.content[..end]
    }

    /// Blank space between the page body and the next break marker
    pub fn trailing_whitespace(&self) -> &str {
        &self.content[self.body().len()..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_by_characters() {
        let indicator = BreakIndicator::new(0, 0, "<p style=\"é\">".to_string());
        assert_eq!(indicator.preview(10), "<p style=\"");
        assert_eq!(indicator.preview(11), "<p style=\"é");
        assert_eq!(indicator.preview(100), "<p style=\"é\">");
        assert_eq!(indicator.preview(0), "");
    }

    #[test]
    fn test_marker_serializes_as_plain_string() {
        let json = serde_json::to_string(&BreakInfo::no_breaks()).unwrap();
        assert_eq!(json, "\"No breaks found\"");

        let json = serde_json::to_string(&BreakInfo::final_chunk()).unwrap();
        assert_eq!(json, "\"Final chunk\"");
    }

    #[test]
    fn test_element_info_shape() {
        let indicator = BreakIndicator::new(12, 10, "<div style='break-after: page'>".into());
        let info = BreakInfo::from_indicator(&indicator, 200);
        let value = serde_json::to_value(&info).unwrap();

        assert_eq!(value["position"], 10);
        assert_eq!(value["break_text"], "<div style='break-after: page'>");
    }

    #[test]
    fn test_unknown_marker_is_rejected() {
        let result = serde_json::from_str::<BreakInfo>("\"Somewhere else\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_segment_body_and_trailing_whitespace() {
        let segment = Segment {
            page_number: 1,
            content: "<p>one</p>\r\n \t\n".to_string(),
            has_break_before: false,
            break_info: BreakInfo::no_breaks(),
        };

        assert_eq!(segment.body(), "<p>one</p>");
        assert_eq!(segment.trailing_whitespace(), "\r\n \t\n");
    }

    #[test]
    fn test_segment_field_names() {
        let segment = Segment {
            page_number: 2,
            content: "<p>x</p>\n".to_string(),
            has_break_before: true,
            break_info: BreakInfo::final_chunk(),
        };
        let value = serde_json::to_value(&segment).unwrap();

        assert_eq!(value["page"], 2);
        assert_eq!(value["content"], "<p>x</p>\n");
        assert_eq!(value["has_break_before"], true);
        assert_eq!(value["break_element_info"], "Final chunk");
    }
}
