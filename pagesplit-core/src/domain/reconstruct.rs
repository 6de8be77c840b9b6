//! Reconstructor

use super::types::Segment;

/// Concatenate segment contents in ascending page order
///
/// Input order does not matter; segments sharing a page number keep their
/// relative order.
pub fn reconstruct<'a, I>(segments: I) -> String
where
    I: IntoIterator<Item = &'a Segment>,
{
    let mut ordered: Vec<&Segment> = segments.into_iter().collect();
    ordered.sort_by_key(|segment| segment.page_number);

    if !is_contiguous(&ordered) {
        log::warn!(
            "Page numbers are not contiguous from 1; concatenating {} segment(s) in page order",
            ordered.len()
        );
    }

    let capacity = ordered.iter().map(|segment| segment.content.len()).sum();
    let mut text = String::with_capacity(capacity);
    for segment in ordered {
        text.push_str(&segment.content);
    }
    text
}

/// Whether sorted segments are numbered exactly 1..=K
fn is_contiguous(sorted: &[&Segment]) -> bool {
    sorted
        .iter()
        .enumerate()
        .all(|(index, segment)| segment.page_number == index + 1)
}
