//! Dataset extraction from CSV files

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// Load a CSV dataset into memory.
///
/// The input path is checked for existence before any read is attempted, so
/// a missing file fails fast without touching the output directory. Parse
/// errors from the CSV reader propagate with the file path as context.
///
/// # Arguments
/// * `path` - Input CSV file (first row is the header)
/// * `infer_schema_length` - Rows used for dtype inference; 0 scans the full file
///
/// # Returns
/// The loaded DataFrame together with its row count, column count and
/// estimated in-memory size in MB.
pub fn extract_dataset(
    path: &Path,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }

    let infer = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(infer)
        .finish()
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?
        .collect()
        .with_context(|| format!("Failed to parse CSV file: {}", path.display()))?;

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);

    Ok((df, rows, cols, memory_mb))
}
