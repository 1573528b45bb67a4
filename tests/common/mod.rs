//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create the canonical mixed-type test DataFrame: one numeric feature with
/// a missing value, one categorical feature with a missing value, and an
/// integer target. 10 rows, 3 distinct cities.
pub fn create_mixed_dataframe() -> DataFrame {
    df! {
        "age" => [Some(22i64), Some(38), None, Some(35), Some(28),
                  Some(54), Some(41), Some(19), Some(63), Some(30)],
        "city" => [Some("London"), Some("Paris"), Some("London"), None, Some("Tokyo"),
                   Some("Paris"), Some("London"), Some("Tokyo"), Some("Paris"), Some("London")],
        "target" => [0i64, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    }
    .unwrap()
}

/// Create an all-numeric DataFrame with no missing values
pub fn create_numeric_dataframe() -> DataFrame {
    df! {
        "a" => [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
        "b" => [10.0f64, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0],
        "target" => [0i64, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(
        rows, expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows, rows
    );
    assert_eq!(
        cols, expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols, cols
    );
}

/// Collect a column of a DataFrame as `f64` values (panics on nulls)
pub fn column_values(df: &DataFrame, name: &str) -> Vec<f64> {
    df.column(name)
        .unwrap()
        .f64()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}
