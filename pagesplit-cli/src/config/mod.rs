//! Configuration module

use crate::error::CliError;
use pagesplit_core::api::defaults;
use pagesplit_core::{Config, DecodingPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Split configuration
    #[serde(default)]
    pub split: SplitConfig,

    /// Reconstruct configuration
    #[serde(default)]
    pub reconstruct: ReconstructConfig,

    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Break pattern overrides
    #[serde(default)]
    pub patterns: PatternConfig,
}

/// Split-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    /// Suffix appended to the input stem for the default record name
    pub output_suffix: String,

    /// Characters of each break tag kept in the record
    pub preview_chars: usize,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            output_suffix: defaults::RECORD_SUFFIX.to_string(),
            preview_chars: defaults::PREVIEW_CHARS,
        }
    }
}

/// Reconstruct-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReconstructConfig {
    /// Suffix appended to the original file stem for the default output name
    pub output_suffix: String,
}

impl Default for ReconstructConfig {
    fn default() -> Self {
        Self {
            output_suffix: defaults::RECONSTRUCTED_SUFFIX.to_string(),
        }
    }
}

/// Input-related configuration
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Handling of bytes that are not valid UTF-8
    pub decoding: DecodingPolicy,
}

/// Trigger and avoidance overrides; empty lists keep the built-in set
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct PatternConfig {
    /// Regex fragments that request a page break
    pub triggers: Vec<String>,

    /// Regex fragments that cancel a break on the same tag
    pub avoidances: Vec<String>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;

        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("invalid {}: {e}", path.display())))
    }

    /// Build the core splitting configuration
    ///
    /// `decoding` overrides the file's decoding policy when set.
    pub fn core_config(&self, decoding: Option<DecodingPolicy>) -> Result<Config, CliError> {
        let mut builder = Config::builder()
            .preview_chars(self.split.preview_chars)
            .decoding(decoding.unwrap_or(self.input.decoding));

        if !self.patterns.triggers.is_empty() {
            builder = builder.triggers(self.patterns.triggers.iter().cloned());
        }
        if !self.patterns.avoidances.is_empty() {
            builder = builder.avoidances(self.patterns.avoidances.iter().cloned());
        }

        builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))
    }
}
