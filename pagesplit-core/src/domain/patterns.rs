//! Trigger and avoidance pattern sets
//!
//! The built-in set is compiled once per process and shared read-only by
//! every split. Custom sets are compiled with the same shape.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Style declarations that request a page break
pub const TRIGGER_PATTERNS: &[&str] = &[
    r"page-break-before\s*:\s*always",
    r"page-break-after\s*:\s*always",
    r"break-before\s*:\s*page",
    r"break-after\s*:\s*page",
    r"break-before\s*:\s*always",
    r"break-after\s*:\s*always",
];

/// Style declarations that forbid a page break on the same element
pub const AVOIDANCE_PATTERNS: &[&str] = &[
    r"page-break-inside\s*:\s*avoid",
    r"break-inside\s*:\s*avoid",
    r"page-break-before\s*:\s*avoid",
    r"page-break-after\s*:\s*avoid",
    r"break-before\s*:\s*avoid",
    r"break-after\s*:\s*avoid",
];

static BUILTIN_PATTERNS: OnceLock<PatternSet> = OnceLock::new();

/// Compiled trigger and avoidance matchers
#[derive(Debug, Clone)]
pub struct PatternSet {
    /// Opening tag whose quoted `style` value contains a trigger
    tag: Regex,
    /// Any avoidance declaration; `None` when no avoidance patterns are set
    avoid: Option<Regex>,
    triggers: Vec<String>,
    avoidances: Vec<String>,
}

impl PatternSet {
    /// Compile a pattern set from trigger and avoidance regex fragments
    ///
    /// Fragments are matched case-insensitively. At least one trigger is
    /// required; an empty avoidance list disables avoidance.
    pub fn new<T, A>(triggers: &[T], avoidances: &[A]) -> Result<Self>
    where
        T: AsRef<str>,
        A: AsRef<str>,
    {
        let triggers: Vec<String> = triggers.iter().map(|p| p.as_ref().to_string()).collect();
        let avoidances: Vec<String> = avoidances
            .iter()
            .map(|p| p.as_ref().to_string())
            .collect();

        if triggers.is_empty() {
            return Err(Error::InvalidPatterns(
                "at least one trigger pattern is required".into(),
            ));
        }
        if let Some(empty) = triggers.iter().chain(&avoidances).find(|p| p.is_empty()) {
            return Err(Error::InvalidPatterns(format!(
                "empty pattern in set: {empty:?}"
            )));
        }

        let tag = Regex::new(&format!(
            r#"(?is)<([^>]*style\s*=\s*["'][^"']*(?:{})[^"']*["'][^>]*)>"#,
            triggers.join("|")
        ))?;

        let avoid = if avoidances.is_empty() {
            None
        } else {
            let alternation: Vec<String> = avoidances.iter().map(|p| format!("({p})")).collect();
            Some(Regex::new(&format!("(?i){}", alternation.join("|")))?)
        };

        Ok(Self {
            tag,
            avoid,
            triggers,
            avoidances,
        })
    }

    /// The built-in pattern set, compiled on first use
    pub fn builtin() -> &'static PatternSet {
        BUILTIN_PATTERNS.get_or_init(|| {
            Self::new(TRIGGER_PATTERNS, AVOIDANCE_PATTERNS)
                .expect("built-in break patterns must compile")
        })
    }

    /// Matcher for whole opening tags carrying a trigger
    pub(crate) fn tag_regex(&self) -> &Regex {
        &self.tag
    }

    /// Whether the tag content carries any avoidance declaration
    pub fn is_avoided(&self, tag_content: &str) -> bool {
        self.avoid
            .as_ref()
            .is_some_and(|avoid| avoid.is_match(tag_content))
    }

    /// Trigger fragments this set was built from
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Avoidance fragments this set was built from
    pub fn avoidances(&self) -> &[String] {
        &self.avoidances
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        let first = PatternSet::builtin();
        let second = PatternSet::builtin();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.triggers().len(), TRIGGER_PATTERNS.len());
        assert_eq!(first.avoidances().len(), AVOIDANCE_PATTERNS.len());
    }

    #[test]
    fn test_avoidance_is_case_insensitive_and_spacing_flexible() {
        let patterns = PatternSet::builtin();
        assert!(patterns.is_avoided(r#"p style="PAGE-BREAK-INSIDE :   Avoid""#));
        assert!(patterns.is_avoided("div style='break-after:avoid'"));
        assert!(!patterns.is_avoided(r#"div style="page-break-before: always""#));
    }

    #[test]
    fn test_tag_regex_requires_style_attribute() {
        let tag = PatternSet::builtin().tag_regex();
        assert!(tag.is_match(r#"<div style="page-break-before: always">"#));
        assert!(tag.is_match("<DIV STYLE='Break-After : Page; color: red'>"));
        assert!(!tag.is_match(r#"<div class="page-break-before: always">"#));
        assert!(!tag.is_match(r#"<div style="page-break-before: auto">"#));
    }

    #[test]
    fn test_empty_trigger_list_is_rejected() {
        let result = PatternSet::new::<&str, &str>(&[], AVOIDANCE_PATTERNS);
        assert!(matches!(result, Err(Error::InvalidPatterns(_))));
    }

    #[test]
    fn test_empty_fragment_is_rejected() {
        let result = PatternSet::new(&["break-before\\s*:\\s*page", ""], AVOIDANCE_PATTERNS);
        assert!(matches!(result, Err(Error::InvalidPatterns(_))));
    }

    #[test]
    fn test_invalid_regex_is_reported() {
        let result = PatternSet::new(&["break-before(:"], AVOIDANCE_PATTERNS);
        assert!(matches!(result, Err(Error::Pattern(_))));
    }

    #[test]
    fn test_no_avoidances_never_avoids() {
        let patterns = PatternSet::new::<_, &str>(TRIGGER_PATTERNS, &[]).unwrap();
        assert!(!patterns.is_avoided(r#"p style="page-break-inside: avoid""#));
    }
}
