//! Target separation and dtype-based column routing
//!
//! Feature columns are routed purely by their stored dtype: integer and
//! float dtypes form the numeric group, string and boolean dtypes the
//! categorical group. Any other dtype is rejected rather than silently
//! dropped.

use polars::prelude::*;

use crate::pipeline::error::PrepError;

/// Feature column names grouped by preprocessing route, in original order.
#[derive(Debug, Clone, Default)]
pub struct ColumnPartition {
    /// Columns routed to impute-mean + standardize
    pub numeric: Vec<String>,
    /// Columns routed to impute-mode + one-hot encode
    pub categorical: Vec<String>,
}

/// Split a dataset into its feature columns and the label column.
///
/// Returns the features (all columns except `target`) and a single-column
/// DataFrame holding the label, carried through the pipeline unchanged.
pub fn separate_target(
    df: &DataFrame,
    target: &str,
) -> Result<(DataFrame, DataFrame), PrepError> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    if !column_names.contains(&target.to_string()) {
        return Err(PrepError::MissingColumn {
            name: target.to_string(),
            available: column_names,
        });
    }

    let labels = df.select([target])?;
    let features = df.drop(target)?;

    Ok((features, labels))
}

/// Partition feature columns into numeric and categorical groups by dtype.
///
/// Boolean columns are routed to the categorical group (their values encode
/// as the "true"/"false" categories). Dtypes that match neither group, such
/// as dates, are an explicit error.
pub fn partition_columns(features: &DataFrame) -> Result<ColumnPartition, PrepError> {
    if features.width() == 0 {
        return Err(PrepError::EmptyFeatureSet);
    }

    let mut partition = ColumnPartition::default();

    for col in features.get_columns() {
        let name = col.name().to_string();
        match col.dtype() {
            dtype if dtype.is_primitive_numeric() => partition.numeric.push(name),
            DataType::String | DataType::Boolean => partition.categorical.push(name),
            other => {
                return Err(PrepError::UnsupportedDtype {
                    name,
                    dtype: other.to_string(),
                })
            }
        }
    }

    Ok(partition)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separate_target() {
        let df = df! {
            "age" => [30i32, 40, 50],
            "target" => [0i32, 1, 0],
        }
        .unwrap();

        let (features, labels) = separate_target(&df, "target").unwrap();

        assert_eq!(features.get_column_names(), &["age"]);
        assert_eq!(labels.get_column_names(), &["target"]);
        assert_eq!(labels.height(), 3);
    }

    #[test]
    fn test_separate_target_missing() {
        let df = df! {
            "age" => [30i32, 40, 50],
        }
        .unwrap();

        let result = separate_target(&df, "target");
        match result {
            Err(PrepError::MissingColumn { name, available }) => {
                assert_eq!(name, "target");
                assert_eq!(available, vec!["age".to_string()]);
            }
            _ => panic!("Expected MissingColumn"),
        }
    }

    #[test]
    fn test_partition_mixed_dtypes() {
        let df = df! {
            "age" => [30i32, 40],
            "height" => [1.7f64, 1.8],
            "city" => ["Paris", "Lyon"],
            "active" => [true, false],
        }
        .unwrap();

        let partition = partition_columns(&df).unwrap();

        assert_eq!(partition.numeric, vec!["age", "height"]);
        assert_eq!(partition.categorical, vec!["city", "active"]);
    }

    #[test]
    fn test_partition_preserves_column_order() {
        let df = df! {
            "b" => [1i32, 2],
            "a" => [3i32, 4],
        }
        .unwrap();

        let partition = partition_columns(&df).unwrap();
        assert_eq!(partition.numeric, vec!["b", "a"]);
    }

    #[test]
    fn test_partition_rejects_unsupported_dtype() {
        let mut df = df! {
            "days" => [1i32, 2],
        }
        .unwrap();
        df.apply("days", |c| c.cast(&DataType::Date).unwrap())
            .unwrap();

        let result = partition_columns(&df);
        assert!(matches!(
            result,
            Err(PrepError::UnsupportedDtype { .. })
        ));
    }

    #[test]
    fn test_partition_empty_feature_set() {
        let df = DataFrame::empty();
        let result = partition_columns(&df);
        assert!(matches!(result, Err(PrepError::EmptyFeatureSet)));
    }
}
