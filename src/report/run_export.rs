//! JSON export of the preprocessing run
//!
//! The report records everything needed to audit a run: the fitted
//! statistics and category sets, the column routing, and the split sizes.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::{CategoryMap, NumericStats, TransformReport};

/// File name of the JSON run report, written next to the CSV outputs.
pub const REPORT_FILE: &str = "preprocess_report.json";

/// Metadata about the run
#[derive(Serialize)]
pub struct RunMetadata {
    /// Timestamp of the run (ISO 8601 format)
    pub timestamp: String,
    /// csvprep version
    pub csvprep_version: String,
    /// Input file path
    pub input_file: String,
    /// Target column name
    pub target_column: String,
}

/// Complete run report
#[derive(Serialize)]
pub struct RunExport<'a> {
    /// Metadata about the run
    pub metadata: RunMetadata,
    /// Input row count
    pub rows: usize,
    /// Rows in the train split
    pub train_rows: usize,
    /// Rows in the test split
    pub test_rows: usize,
    /// Column count of the feature matrix
    pub feature_width: usize,
    /// Fitted statistics per numeric column
    pub numeric: &'a [NumericStats],
    /// Fitted encodings per categorical column
    pub categorical: &'a [CategoryMap],
}

/// Write the run report as pretty-printed JSON into `output_dir`.
pub fn export_run_report(
    report: &TransformReport,
    input_file: &Path,
    target: &str,
    output_dir: &Path,
) -> Result<()> {
    let export = RunExport {
        metadata: RunMetadata {
            timestamp: Utc::now().to_rfc3339(),
            csvprep_version: env!("CARGO_PKG_VERSION").to_string(),
            input_file: input_file.display().to_string(),
            target_column: target.to_string(),
        },
        rows: report.rows,
        train_rows: report.train_rows,
        test_rows: report.test_rows,
        feature_width: report.feature_width,
        numeric: &report.numeric,
        categorical: &report.categorical,
    };

    let path = output_dir.join(REPORT_FILE);
    let json = serde_json::to_string_pretty(&export)
        .context("Failed to serialize run report to JSON")?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write run report: {}", path.display()))?;

    Ok(())
}
