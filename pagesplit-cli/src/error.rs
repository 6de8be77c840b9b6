//! Error handling for the CLI application

use std::fmt;
use std::path::PathBuf;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file unreadable or invalid
    ConfigError(String),
    /// No file stem to derive a default output name from
    MissingStem(PathBuf),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::MissingStem(path) => write!(
                f,
                "Cannot derive an output name from '{}'; pass --output",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_missing_stem_display() {
        let error = CliError::MissingStem(PathBuf::from(""));
        assert_eq!(
            error.to_string(),
            "Cannot derive an output name from ''; pass --output"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::ConfigError("bad".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("ConfigError"));
        assert!(debug_str.contains("bad"));
    }

    #[test]
    fn test_cli_result_carries_cli_error() {
        let failure: CliResult<()> = Err(CliError::MissingStem(PathBuf::from("..")).into());
        let err = failure.unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::ConfigError("ファイル/設定 文件.toml".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: ファイル/設定 文件.toml"
        );
    }
}
