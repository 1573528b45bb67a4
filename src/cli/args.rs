//! Command-line argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

/// csvprep - Prepare a CSV dataset for machine learning
#[derive(Parser, Debug)]
#[command(name = "csvprep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file path (first row is the header)
    #[arg(short, long, default_value = "sample_data.csv")]
    pub input: PathBuf,

    /// Target column name. Carried through as the label; excluded from
    /// imputation, scaling and encoding.
    #[arg(short, long, default_value = "target")]
    pub target: String,

    /// Output directory for the processed datasets.
    /// Created (with parents) if absent; existing files are overwritten.
    #[arg(short, long, default_value = "processed_data")]
    pub output_dir: PathBuf,

    /// Number of rows to use for schema inference.
    /// Higher values improve type detection for ambiguous columns but may be slower.
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,
}
