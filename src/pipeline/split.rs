//! Reproducible train/test row splitting
//!
//! One seeded Fisher-Yates shuffle of the row indices drives both the
//! feature matrix and the label column, so row `i` of the train features
//! always lines up with row `i` of the train labels.

use polars::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::pipeline::error::PrepError;

/// Fraction of rows assigned to the test set.
pub const TEST_FRACTION: f64 = 0.2;

/// Seed for the split shuffle; fixed so identical inputs produce identical
/// row assignments across runs.
pub const SPLIT_SEED: u64 = 42;

/// The four datasets produced by one split.
#[derive(Debug)]
pub struct SplitData {
    pub x_train: DataFrame,
    pub x_test: DataFrame,
    pub y_train: DataFrame,
    pub y_test: DataFrame,
}

/// Partition rows of `features` and `labels` into train and test sets.
///
/// The test set receives `ceil(test_fraction * n)` rows; the remainder goes
/// to the train set. Both frames are gathered with the same shuffled index
/// list, preserving row alignment between features and labels.
pub fn train_test_split(
    features: &DataFrame,
    labels: &DataFrame,
    test_fraction: f64,
    seed: u64,
) -> Result<SplitData, PrepError> {
    let n = features.height();
    if n == 0 {
        return Err(PrepError::EmptyDataset);
    }
    debug_assert_eq!(n, labels.height());

    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    let n_test = n_test.min(n);
    let n_train = n - n_test;

    let mut indices: Vec<IdxSize> = (0..n as IdxSize).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let train_idx = IdxCa::from_vec("idx".into(), indices[..n_train].to_vec());
    let test_idx = IdxCa::from_vec("idx".into(), indices[n_train..].to_vec());

    Ok(SplitData {
        x_train: features.take(&train_idx)?,
        x_test: features.take(&test_idx)?,
        y_train: labels.take(&train_idx)?,
        y_test: labels.take(&test_idx)?,
    })
}
