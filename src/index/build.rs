use crate::index::suffix_array::{SuffixArrayBuilder, SuffixArrayWriter};
use crate::utils::AppConfig;
use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Build the index for `text_path` and persist it
///
/// Writes to `output` if given, otherwise next to the text file with the
/// configured extension. Returns the path written.
pub fn build_index(
    text_path: &Path,
    output: Option<&Path>,
    config: &AppConfig,
) -> Result<PathBuf> {
    let index_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.index_path_for(text_path));

    let text = fs::read(text_path)
        .with_context(|| format!("Failed to read {}", text_path.display()))?;
    info!("indexing {} ({} bytes)", text_path.display(), text.len());

    let built = SuffixArrayBuilder::new(text)
        .with_progress(config.progress)
        .build()
        .with_context(|| format!("Cannot index {}", text_path.display()))?;

    SuffixArrayWriter::write(&index_path, &built)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    Ok(index_path)
}
