//! Reconstruct mode

use crate::config::CliConfig;
use crate::error::CliResult;
use crate::output::{derive_output_path, write_atomically};
use anyhow::Context;
use pagesplit_core::PageSplitter;
use std::path::{Path, PathBuf};

/// Rebuild the document stored in the record at `input`
///
/// Without an explicit output, the name is derived from the record's
/// `original_file`. Returns the path that was written.
pub fn run(input: &Path, output: Option<&Path>, config: &CliConfig) -> CliResult<PathBuf> {
    let (record, text) = PageSplitter::new()
        .reconstruct_file(input)
        .with_context(|| format!("Failed to reconstruct from {}", input.display()))?;

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(
            Path::new(&record.metadata.original_file),
            &config.reconstruct.output_suffix,
        )?,
    };

    write_atomically(&output, text.as_bytes())?;

    log::info!(
        "Rebuilt {} page(s) into {}",
        record.total_pages(),
        output.display()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const RECORD: &str = r#"{
  "metadata": {"original_file": "doc.html", "total_pages": 2, "file_size": 6},
  "chunks": [
    {"page": 1, "content": "AAA", "has_break_before": false, "break_element_info": {"break_text": "<p>", "position": 3}},
    {"page": 2, "content": "BBB", "has_break_before": true, "break_element_info": "Final chunk"}
  ]
}"#;

    #[test]
    fn test_reconstruct_writes_text() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("doc_chunks.json");
        let output = temp_dir.path().join("out.html");
        fs::write(&input, RECORD).unwrap();

        run(&input, Some(&output), &CliConfig::default()).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "AAABBB");
    }

    #[test]
    fn test_malformed_record_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("doc_chunks.json");
        let output = temp_dir.path().join("out.html");
        fs::write(&input, "{\"metadata\": {}, \"chunks\": []}").unwrap();

        let err = run(&input, Some(&output), &CliConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Malformed document record"));
        assert!(!output.exists());
    }

    #[test]
    fn test_missing_record() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("absent_chunks.json");

        let err = run(&input, None, &CliConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Input file not found"));
    }
}
