//! Configuration API for splitting

use crate::api::input::DecodingPolicy;
use crate::domain::PatternSet;
use crate::error::{Error, Result};

/// Default configuration constants
pub mod defaults {
    /// Characters of the triggering tag stored with each page
    pub const PREVIEW_CHARS: usize = 200;

    /// Parsing method recorded in document metadata
    pub const PARSING_METHOD: &str = "regex";

    /// Suffix appended to the input stem for split output
    pub const RECORD_SUFFIX: &str = "_chunks.json";

    /// Suffix appended to the original stem for reconstructed output
    pub const RECONSTRUCTED_SUFFIX: &str = "_reconstructed.html";
}

/// Splitting configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) preview_chars: usize,
    pub(crate) decoding: DecodingPolicy,
    pub(crate) patterns: PatternSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_chars: defaults::PREVIEW_CHARS,
            decoding: DecodingPolicy::default(),
            patterns: PatternSet::default(),
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Characters of each break tag kept in the record
    pub fn preview_chars(&self) -> usize {
        self.preview_chars
    }

    /// How undecodable input bytes are handled
    pub fn decoding(&self) -> DecodingPolicy {
        self.decoding
    }

    /// Trigger and avoidance patterns in use
    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    preview_chars: Option<usize>,
    decoding: Option<DecodingPolicy>,
    triggers: Option<Vec<String>>,
    avoidances: Option<Vec<String>>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many characters of each break tag are stored
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.preview_chars = Some(chars);
        self
    }

    /// Set the decoding policy for file input
    pub fn decoding(mut self, policy: DecodingPolicy) -> Self {
        self.decoding = Some(policy);
        self
    }

    /// Replace the trigger patterns
    pub fn triggers<S: Into<String>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        self.triggers = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Replace the avoidance patterns
    pub fn avoidances<S: Into<String>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        self.avoidances = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(chars) = self.preview_chars {
            if chars == 0 {
                return Err(Error::Configuration(
                    "preview_chars must be greater than 0".into(),
                ));
            }
            config.preview_chars = chars;
        }

        if let Some(policy) = self.decoding {
            config.decoding = policy;
        }

        if self.triggers.is_some() || self.avoidances.is_some() {
            let builtin = PatternSet::builtin();
            let triggers = self.triggers.unwrap_or_else(|| builtin.triggers().to_vec());
            let avoidances = self
                .avoidances
                .unwrap_or_else(|| builtin.avoidances().to_vec());
            config.patterns = PatternSet::new(&triggers[..], &avoidances[..])?;
        }

        Ok(config)
    }
}
