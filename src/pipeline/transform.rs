//! Transformation stage: dtype routing, preprocessing and splitting
//!
//! Statistics are fit on the full feature set before the split, matching
//! the behavior of the original pipeline this tool replaces; the fitted
//! values are surfaced in the run report so they can be audited.

use polars::prelude::*;

use crate::pipeline::categorical::{apply_categorical, fit_categorical, CategoryMap};
use crate::pipeline::error::PrepError;
use crate::pipeline::numeric::{apply_numeric, fit_numeric, NumericStats};
use crate::pipeline::schema::{partition_columns, separate_target};
use crate::pipeline::split::{train_test_split, SplitData, SPLIT_SEED, TEST_FRACTION};

/// Everything the summary table and JSON export need to describe one run.
#[derive(Debug, Clone)]
pub struct TransformReport {
    /// Input row count
    pub rows: usize,
    /// Fitted statistics per numeric column
    pub numeric: Vec<NumericStats>,
    /// Fitted encodings per categorical column
    pub categorical: Vec<CategoryMap>,
    /// Column count of the assembled feature matrix
    pub feature_width: usize,
    /// Rows in the train split
    pub train_rows: usize,
    /// Rows in the test split
    pub test_rows: usize,
}

/// Run the full transformation: separate the target, preprocess both column
/// groups, assemble the feature matrix (numeric block first) and split.
pub fn transform_dataset(
    df: &DataFrame,
    target: &str,
) -> Result<(SplitData, TransformReport), PrepError> {
    if df.height() == 0 {
        return Err(PrepError::EmptyDataset);
    }

    let (features, labels) = separate_target(df, target)?;
    let partition = partition_columns(&features)?;

    let numeric_stats = fit_numeric(&features, &partition.numeric)?;
    let category_maps = fit_categorical(&features, &partition.categorical)?;

    // Numeric block first, then the one-hot block, matching the fitted
    // column order within each group.
    let mut columns = apply_numeric(&features, &numeric_stats)?;
    columns.extend(apply_categorical(&features, &category_maps)?);

    let matrix = DataFrame::new(columns)?;
    let feature_width = matrix.width();

    let split = train_test_split(&matrix, &labels, TEST_FRACTION, SPLIT_SEED)?;

    let report = TransformReport {
        rows: df.height(),
        numeric: numeric_stats,
        categorical: category_maps,
        feature_width,
        train_rows: split.x_train.height(),
        test_rows: split.x_test.height(),
    };

    Ok((split, report))
}
