//! Split mode

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{derive_output_path, write_atomically};
use anyhow::Context;
use pagesplit_core::{Config, PageSplitter};
use std::path::{Path, PathBuf};

/// Split `input` and write its JSON record
///
/// Returns the path that was written.
pub fn run(
    input: &Path,
    output: Option<&Path>,
    config: &CliConfig,
    core: Config,
) -> CliResult<PathBuf> {
    let output = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input, &config.split.output_suffix)?,
    };

    let splitter = PageSplitter::with_config(core);
    let record = splitter
        .split_file(input)
        .with_context(|| format!("Failed to split {}", input.display()))?;

    let json = record.to_json_pretty()?;
    write_atomically(&output, json.as_bytes())?;

    log::info!(
        "Wrote {} page(s) from {} to {}",
        record.total_pages(),
        input.display(),
        output.display()
    );
    Ok(output)
}
