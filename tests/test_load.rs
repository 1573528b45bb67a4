//! Unit tests for the loading stage

use csvprep::pipeline::{
    load_datasets, SplitData, X_TEST_FILE, X_TRAIN_FILE, Y_TEST_FILE, Y_TRAIN_FILE,
};
use polars::prelude::*;
use tempfile::TempDir;

fn toy_split() -> SplitData {
    SplitData {
        x_train: df! {
            "f1" => [1.0f64, 2.0, 3.0],
            "f2" => [0.0f64, 1.0, 0.0],
        }
        .unwrap(),
        x_test: df! {
            "f1" => [4.0f64],
            "f2" => [1.0f64],
        }
        .unwrap(),
        y_train: df! {
            "target" => [0i64, 1, 0],
        }
        .unwrap(),
        y_test: df! {
            "target" => [1i64],
        }
        .unwrap(),
    }
}

#[test]
fn test_load_writes_four_files() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("processed_data");

    let mut split = toy_split();
    load_datasets(&mut split, &out).unwrap();

    for file in [X_TRAIN_FILE, X_TEST_FILE, Y_TRAIN_FILE, Y_TEST_FILE] {
        assert!(out.join(file).exists(), "Missing output file: {}", file);
    }
}

#[test]
fn test_load_creates_nested_directories() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("deeply").join("nested").join("out");

    let mut split = toy_split();
    load_datasets(&mut split, &out).unwrap();

    assert!(out.join(X_TRAIN_FILE).exists());
}

#[test]
fn test_load_outputs_have_no_header() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    let mut split = toy_split();
    load_datasets(&mut split, &out).unwrap();

    // Row counts equal data rows exactly: no header line is written.
    let x_train = std::fs::read_to_string(out.join(X_TRAIN_FILE)).unwrap();
    assert_eq!(x_train.lines().count(), 3);

    // First line is data, not column names
    let fields: Vec<f64> = x_train
        .lines()
        .next()
        .unwrap()
        .split(',')
        .map(|v| v.parse().unwrap())
        .collect();
    assert_eq!(fields, vec![1.0, 0.0]);

    let y_test = std::fs::read_to_string(out.join(Y_TEST_FILE)).unwrap();
    assert_eq!(y_test.lines().count(), 1);
    assert_eq!(y_test.trim(), "1");
}

#[test]
fn test_load_overwrites_existing_files() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");
    std::fs::create_dir_all(&out).unwrap();
    std::fs::write(out.join(X_TRAIN_FILE), "stale contents").unwrap();

    let mut split = toy_split();
    load_datasets(&mut split, &out).unwrap();

    let contents = std::fs::read_to_string(out.join(X_TRAIN_FILE)).unwrap();
    assert!(!contents.contains("stale"));
    assert_eq!(contents.lines().count(), 3);
}

#[test]
fn test_load_roundtrip_preserves_values() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("out");

    let mut split = toy_split();
    load_datasets(&mut split, &out).unwrap();

    let df = CsvReadOptions::default()
        .with_has_header(false)
        .try_into_reader_with_file_path(Some(out.join(X_TEST_FILE)))
        .unwrap()
        .finish()
        .unwrap();

    assert_eq!(df.shape(), (1, 2));
    let first: f64 = df.get_columns()[0].f64().unwrap().get(0).unwrap();
    assert!((first - 4.0).abs() < 1e-12);
}
