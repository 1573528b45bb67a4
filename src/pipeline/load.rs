//! Loading stage: write the split datasets to CSV
//!
//! All four files use one serialization convention: no header row, no index
//! column. Existing files are overwritten.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::pipeline::split::SplitData;

/// File name of the train feature matrix.
pub const X_TRAIN_FILE: &str = "X_train.csv";
/// File name of the test feature matrix.
pub const X_TEST_FILE: &str = "X_test.csv";
/// File name of the train labels.
pub const Y_TRAIN_FILE: &str = "y_train.csv";
/// File name of the test labels.
pub const Y_TEST_FILE: &str = "y_test.csv";

/// Write the four split datasets into `output_dir`, creating the directory
/// and any missing parents first.
pub fn load_datasets(split: &mut SplitData, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    write_csv(&mut split.x_train, &output_dir.join(X_TRAIN_FILE))?;
    write_csv(&mut split.x_test, &output_dir.join(X_TEST_FILE))?;
    write_csv(&mut split.y_train, &output_dir.join(Y_TRAIN_FILE))?;
    write_csv(&mut split.y_test, &output_dir.join(Y_TEST_FILE))?;

    Ok(())
}

fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(false)
        .finish(df)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
    Ok(())
}
