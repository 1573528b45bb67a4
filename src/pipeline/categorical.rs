//! Categorical preprocessing: most-frequent imputation + one-hot encoding
//!
//! Fitting records the most frequent value (ties broken by lexicographic
//! order, so runs are deterministic) and the sorted set of categories
//! observed after imputation. Applying emits one 0/1 indicator column per
//! category; a value unseen at fit time encodes as all zeros.

use std::collections::{BTreeSet, HashMap};

use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

use crate::pipeline::error::PrepError;

/// Fitted encoding for one categorical column.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryMap {
    /// Source column name
    pub name: String,
    /// Fill value for missing entries (most frequent observed value)
    pub fill: String,
    /// Distinct categories observed after imputation, sorted
    pub categories: Vec<String>,
}

/// Fit imputation and encoding for the given categorical columns.
///
/// Columns are fit independently and in parallel; results come back in the
/// input column order. A column with no observed values is an error.
pub fn fit_categorical(
    df: &DataFrame,
    columns: &[String],
) -> Result<Vec<CategoryMap>, PrepError> {
    columns
        .par_iter()
        .map(|name| fit_column(df, name))
        .collect()
}

/// Apply fitted encodings, producing `f64` indicator columns named
/// `{column}_{category}`, grouped per source column.
pub fn apply_categorical(
    df: &DataFrame,
    maps: &[CategoryMap],
) -> Result<Vec<Column>, PrepError> {
    let mut out = Vec::with_capacity(encoded_width(maps));

    for map in maps {
        let values = column_to_strings(df.column(&map.name)?)?;
        let imputed: Vec<&str> = values
            .iter()
            .map(|v| v.as_deref().unwrap_or(map.fill.as_str()))
            .collect();

        for category in &map.categories {
            let indicator: Vec<f64> = imputed
                .iter()
                .map(|v| if *v == category { 1.0 } else { 0.0 })
                .collect();
            out.push(Column::new(
                format!("{}_{}", map.name, category).into(),
                indicator,
            ));
        }
    }

    Ok(out)
}

/// Total number of indicator columns the fitted maps produce.
pub fn encoded_width(maps: &[CategoryMap]) -> usize {
    maps.iter().map(|m| m.categories.len()).sum()
}

fn fit_column(df: &DataFrame, name: &str) -> Result<CategoryMap, PrepError> {
    let values = column_to_strings(df.column(name)?)?;

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values.iter().flatten() {
        *counts.entry(value.as_str()).or_insert(0) += 1;
    }

    if counts.is_empty() {
        return Err(PrepError::EmptyColumn {
            name: name.to_string(),
        });
    }

    // Most frequent value; on a tie the lexicographically smallest wins.
    let mut fill: &str = "";
    let mut best = 0usize;
    for (value, count) in &counts {
        if *count > best || (*count == best && *value < fill) {
            fill = value;
            best = *count;
        }
    }
    // The fill value is itself an observed value, so the category set is
    // exactly the distinct observed values.
    let categories: BTreeSet<&str> = counts.keys().copied().collect();

    Ok(CategoryMap {
        name: name.to_string(),
        fill: fill.to_string(),
        categories: categories.into_iter().map(|s| s.to_string()).collect(),
    })
}

/// Read a column as strings, mapping nulls to `None`.
///
/// Boolean columns render as "true"/"false"; any other non-string dtype is
/// cast through the engine's string representation.
fn column_to_strings(col: &Column) -> Result<Vec<Option<String>>, PrepError> {
    let values = match col.dtype() {
        DataType::String => col
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.to_string()))
            .collect(),
        DataType::Boolean => col
            .bool()?
            .into_iter()
            .map(|v| v.map(|b| b.to_string()))
            .collect(),
        _ => {
            let cast = col.cast(&DataType::String)?;
            cast.str()?
                .into_iter()
                .map(|v| v.map(|s| s.to_string()))
                .collect()
        }
    };

    Ok(values)
}
