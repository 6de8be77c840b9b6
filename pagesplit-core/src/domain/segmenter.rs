//! Segmenter
//!
//! Cuts the source text at located break points. Every segment is an exact
//! slice, and the slices tile the source with no gaps or overlaps.

use super::types::{BreakIndicator, BreakInfo, Segment};

/// Whitespace that is kept with the page before a break
fn is_boundary_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Start of the boundary whitespace run ending at `end`, not walking past `floor`
///
/// Only ASCII bytes are stepped over, so the result is always a char boundary.
pub(crate) fn trailing_whitespace_start(text: &str, floor: usize, end: usize) -> usize {
    let bytes = text.as_bytes();
    let mut pos = end;
    while pos > floor && is_boundary_whitespace(bytes[pos - 1]) {
        pos -= 1;
    }
    pos
}

/// Splits text into pages at break indicators
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    preview_chars: usize,
}

impl Segmenter {
    /// Create a segmenter storing at most `preview_chars` of each break tag
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    /// Split `text` at `breaks`
    ///
    /// `breaks` must come from locating breaks in the same text. A break that
    /// precedes the previous one or does not fall on a character boundary is
    /// treated as sitting at the previous break.
    pub fn segment(&self, text: &str, breaks: &[BreakIndicator]) -> Vec<Segment> {
        if breaks.is_empty() {
            return vec![Segment {
                page_number: 1,
                content: text.to_string(),
                has_break_before: false,
                break_info: BreakInfo::no_breaks(),
            }];
        }

        let mut segments = Vec::with_capacity(breaks.len() + 1);
        let mut last_pos = 0;

        for (index, indicator) in breaks.iter().enumerate() {
            let page_number = index + 1;
            let break_pos = Self::clamp_break(text, indicator.byte_offset(), last_pos);
            let trim_pos = trailing_whitespace_start(text, last_pos, break_pos);
            log::trace!(
                "Page {page_number}: bytes {last_pos}..{break_pos}, {} byte(s) of boundary whitespace",
                break_pos - trim_pos
            );

            // Blank space before the marker stays with the page it trails;
            // the next page starts exactly at the marker's '<'.
            segments.push(Segment {
                page_number,
                content: text[last_pos..break_pos].to_string(),
                has_break_before: page_number > 1,
                break_info: BreakInfo::from_indicator(indicator, self.preview_chars),
            });

            last_pos = break_pos;
        }

        if last_pos < text.len() {
            segments.push(Segment {
                page_number: breaks.len() + 1,
                content: text[last_pos..].to_string(),
                has_break_before: true,
                break_info: BreakInfo::final_chunk(),
            });
        }

        log::debug!(
            "Split {} bytes into {} segment(s)",
            text.len(),
            segments.len()
        );
        segments
    }

    fn clamp_break(text: &str, offset: usize, last_pos: usize) -> usize {
        if offset < last_pos || offset > text.len() || !text.is_char_boundary(offset) {
            log::warn!("Break offset {offset} is not usable in this text; merging with previous");
            last_pos
        } else {
            offset
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(crate::api::defaults::PREVIEW_CHARS)
    }
}
