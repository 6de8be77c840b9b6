//! Reading and decoding document input

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Extensions accepted for split input, compared case-insensitively
pub const HTML_EXTENSIONS: &[&str] = &["html", "htm"];

/// How byte sequences that are not valid UTF-8 are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodingPolicy {
    /// Drop undecodable sequences
    #[default]
    Ignore,
    /// Substitute U+FFFD for undecodable sequences
    Replace,
    /// Fail on the first undecodable sequence
    Strict,
}

impl DecodingPolicy {
    /// Decode raw bytes under this policy
    pub fn decode(self, bytes: Vec<u8>) -> Result<String> {
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => {
                let offset = err.utf8_error().valid_up_to();
                match self {
                    DecodingPolicy::Strict => Err(Error::Decode { offset }),
                    DecodingPolicy::Replace => {
                        log::warn!("Replacing undecodable bytes starting at byte {offset}");
                        Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
                    }
                    DecodingPolicy::Ignore => {
                        log::warn!("Dropping undecodable bytes starting at byte {offset}");
                        let bytes = err.as_bytes();
                        let mut text = String::with_capacity(bytes.len());
                        for chunk in bytes.utf8_chunks() {
                            text.push_str(chunk.valid());
                        }
                        Ok(text)
                    }
                }
            }
        }
    }

    /// Name used in configuration files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            DecodingPolicy::Ignore => "ignore",
            DecodingPolicy::Replace => "replace",
            DecodingPolicy::Strict => "strict",
        }
    }
}

impl FromStr for DecodingPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "ignore" => Ok(DecodingPolicy::Ignore),
            "replace" => Ok(DecodingPolicy::Replace),
            "strict" => Ok(DecodingPolicy::Strict),
            other => Err(Error::Configuration(format!(
                "unknown decoding policy '{other}' (expected ignore, replace or strict)"
            ))),
        }
    }
}

/// Fail unless `path` exists
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::InputNotFound(path.to_path_buf()))
    }
}

/// Fail unless `path` ends in `.html` or `.htm`
pub fn ensure_html_extension(path: &Path) -> Result<()> {
    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            HTML_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        });

    if is_html {
        Ok(())
    } else {
        Err(Error::InvalidExtension(path.to_path_buf()))
    }
}

/// Validate and read an HTML document
///
/// Existence and extension are checked before any bytes are read.
pub fn read_html(path: &Path, policy: DecodingPolicy) -> Result<String> {
    ensure_exists(path)?;
    ensure_html_extension(path)?;

    let bytes = fs::read(path)?;
    log::info!("Read {} bytes from {}", bytes.len(), path.display());
    policy.decode(bytes)
}
