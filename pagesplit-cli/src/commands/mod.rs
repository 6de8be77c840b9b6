//! CLI command implementations

use crate::config::CliConfig;
use anyhow::Result;
use clap::Parser;
use pagesplit_core::DecodingPolicy;
use std::path::PathBuf;

pub mod reconstruct;
pub mod split;

/// Split HTML documents at CSS page breaks and rebuild them exactly
#[derive(Debug, Parser)]
#[command(name = "pagesplit", version, about, long_about = None)]
pub struct Cli {
    /// HTML/HTM input file, or a JSON record with --reconstruct
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output file (default: derived from the input name)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Reconstruct HTML from a JSON record
    #[arg(short, long)]
    pub reconstruct: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "PAGESPLIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Handling of input bytes that are not valid UTF-8
    #[arg(long, value_enum)]
    pub decoding: Option<Decoding>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Decoding policies selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Decoding {
    /// Drop undecodable bytes
    Ignore,
    /// Replace undecodable bytes with U+FFFD
    Replace,
    /// Fail on undecodable bytes
    Strict,
}

impl From<Decoding> for DecodingPolicy {
    fn from(value: Decoding) -> Self {
        match value {
            Decoding::Ignore => DecodingPolicy::Ignore,
            Decoding::Replace => DecodingPolicy::Replace,
            Decoding::Strict => DecodingPolicy::Strict,
        }
    }
}

impl Cli {
    /// Execute the selected mode and report the output path
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        if self.reconstruct {
            let written = reconstruct::run(&self.input, self.output.as_deref(), &config)?;
            println!("Reconstructed HTML file: {}", written.display());
        } else {
            let core = config.core_config(self.decoding.map(Into::into))?;
            let written = split::run(&self.input, self.output.as_deref(), &config, core)?;
            println!("Created JSON chunks file: {}", written.display());
        }

        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running under the test harness
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_split_is_default_mode() {
        let cli = Cli::try_parse_from(["pagesplit", "doc.html"]).unwrap();

        assert_eq!(cli.input, PathBuf::from("doc.html"));
        assert!(!cli.reconstruct);
        assert!(cli.output.is_none());
        assert!(cli.decoding.is_none());
    }

    #[test]
    fn test_reconstruct_flags() {
        let cli =
            Cli::try_parse_from(["pagesplit", "-r", "doc_chunks.json", "-o", "out.html", "-vv"])
                .unwrap();

        assert!(cli.reconstruct);
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_decoding_flag() {
        let cli = Cli::try_parse_from(["pagesplit", "--decoding", "strict", "a.htm"]).unwrap();
        assert_eq!(cli.decoding, Some(Decoding::Strict));
        assert_eq!(
            DecodingPolicy::from(cli.decoding.unwrap()),
            DecodingPolicy::Strict
        );

        assert!(Cli::try_parse_from(["pagesplit", "--decoding", "lossy", "a.htm"]).is_err());
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["pagesplit"]).is_err());
    }
}
