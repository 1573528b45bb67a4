//! Numeric preprocessing: mean imputation + standardization
//!
//! Fitting computes per-column statistics (fill value, mean, population
//! standard deviation); applying produces `(x - mean) / std` columns with
//! missing values replaced by the fill value first. NaN values are treated
//! as missing, matching the CSV reader's null semantics.

use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use crate::pipeline::error::PrepError;

/// Fitted statistics for one numeric column.
#[derive(Debug, Clone, Serialize)]
pub struct NumericStats {
    /// Source column name
    pub name: String,
    /// Fill value for missing entries (mean of the observed values)
    pub fill: f64,
    /// Mean of the imputed column
    pub mean: f64,
    /// Population standard deviation of the imputed column; 1.0 when the
    /// column is constant so scaling maps it to all zeros
    pub std: f64,
}

/// Fit imputation and scaling statistics for the given numeric columns.
///
/// Columns are fit independently and in parallel; results come back in the
/// input column order. A column with no observed values is an error.
pub fn fit_numeric(df: &DataFrame, columns: &[String]) -> Result<Vec<NumericStats>, PrepError> {
    columns
        .par_iter()
        .map(|name| fit_column(df, name))
        .collect()
}

/// Apply fitted statistics, producing one standardized `f64` column per stat.
pub fn apply_numeric(df: &DataFrame, stats: &[NumericStats]) -> Result<Vec<Column>, PrepError> {
    stats
        .iter()
        .map(|stat| {
            let values = column_to_f64(df.column(&stat.name)?)?;
            let scaled: Vec<f64> = values
                .into_iter()
                .map(|v| (v.unwrap_or(stat.fill) - stat.mean) / stat.std)
                .collect();
            Ok(Column::new(stat.name.as_str().into(), scaled))
        })
        .collect()
}

fn fit_column(df: &DataFrame, name: &str) -> Result<NumericStats, PrepError> {
    let values = column_to_f64(df.column(name)?)?;

    let observed: Vec<f64> = values.iter().filter_map(|v| *v).collect();
    if observed.is_empty() {
        return Err(PrepError::EmptyColumn {
            name: name.to_string(),
        });
    }

    let fill = observed.iter().sum::<f64>() / observed.len() as f64;

    // Statistics are computed over the imputed column, so the fill value
    // itself contributes to mean and std.
    let imputed: Vec<f64> = values.iter().map(|v| v.unwrap_or(fill)).collect();
    let n = imputed.len() as f64;
    let mean = imputed.iter().sum::<f64>() / n;
    let variance = imputed.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std = variance.sqrt();
    let std = if std == 0.0 { 1.0 } else { std };

    Ok(NumericStats {
        name: name.to_string(),
        fill,
        mean,
        std,
    })
}

/// Read a column as `f64` values, mapping nulls and NaN to `None`.
fn column_to_f64(col: &Column) -> Result<Vec<Option<f64>>, PrepError> {
    let cast = col.cast(&DataType::Float64)?;
    let values = cast
        .f64()?
        .into_iter()
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect();
    Ok(values)
}
