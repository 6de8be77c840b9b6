//! Output path resolution and writing
//!
//! Outputs are staged in a temporary file next to the destination and renamed
//! into place, so a failed run never leaves a truncated file behind.

use crate::error::CliError;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default output name: `<stem of source><suffix>` in the current directory
pub fn derive_output_path(source: &Path, suffix: &str) -> Result<PathBuf, CliError> {
    let stem = source
        .file_stem()
        .ok_or_else(|| CliError::MissingStem(source.to_path_buf()))?;

    Ok(PathBuf::from(format!("{}{suffix}", stem.to_string_lossy())))
}

/// Write `contents` to `path`, replacing any existing file
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    staged
        .write_all(contents)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    staged.flush()?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    staged
        .persist(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}
