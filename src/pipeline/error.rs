//! Error types for the preprocessing core.
//!
//! Extraction and loading use `anyhow` at the application layer; the
//! transformation core reports typed errors so callers and tests can match
//! on the exact failure mode.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while transforming a dataset.
#[derive(Debug, Error)]
pub enum PrepError {
    /// The requested column does not exist in the dataset.
    #[error("Target column '{name}' not found in dataset. Available columns: {available:?}")]
    MissingColumn {
        /// Column that was looked up
        name: String,
        /// Columns actually present
        available: Vec<String>,
    },

    /// A column contains no non-missing values, so no fill statistic exists.
    #[error("Cannot impute column '{name}': all values are missing")]
    EmptyColumn {
        /// Offending column
        name: String,
    },

    /// A feature column has a dtype the pipeline does not route.
    #[error("Unsupported dtype '{dtype}' for column '{name}' (expected numeric, string or boolean)")]
    UnsupportedDtype {
        /// Offending column
        name: String,
        /// Rendered dtype
        dtype: String,
    },

    /// The dataset has no feature columns besides the target.
    #[error("Dataset has no feature columns besides the target")]
    EmptyFeatureSet,

    /// The dataset has no rows.
    #[error("Dataset contains no rows")]
    EmptyDataset,

    /// Error propagated from the DataFrame engine.
    #[error(transparent)]
    Polars(#[from] PolarsError),
}
