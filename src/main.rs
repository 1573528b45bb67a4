//! csvprep: Dataset Preparation CLI Tool
//!
//! A command-line tool that prepares a CSV dataset for machine learning:
//! missing values are imputed, numeric columns standardized, categorical
//! columns one-hot encoded, and the rows split into reproducible train and
//! test sets written back to CSV.

mod cli;
mod pipeline;
mod report;
mod utils;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use console::style;

use cli::Cli;
use pipeline::{extract_dataset, load_datasets, transform_dataset, SPLIT_SEED, TEST_FRACTION};
use report::{export_run_report, RunSummary, REPORT_FILE};
use utils::{
    create_spinner, finish_with_success, print_banner, print_completion, print_config,
    print_count, print_info, print_step_header, print_step_time, print_success,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Print styled banner
    print_banner(env!("CARGO_PKG_VERSION"));

    // Print configuration card
    print_config(
        &cli.input,
        &cli.target,
        &cli.output_dir,
        TEST_FRACTION,
        SPLIT_SEED,
    );

    // Step 1: Extract the dataset
    print_step_header(1, "Data Extraction");

    let step_start = Instant::now();
    let spinner = create_spinner("Reading input file...");
    let (df, rows, cols, memory_mb) =
        extract_dataset(&cli.input, cli.infer_schema_length)?;
    finish_with_success(&spinner, "Input file parsed");
    print_success("Data extracted successfully");

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let mut summary = RunSummary::new(rows);
    let extract_elapsed = step_start.elapsed();
    summary.set_extract_time(extract_elapsed);
    print_step_time(extract_elapsed);

    // Step 2: Transform - impute, scale, encode and split
    print_step_header(2, "Transformation & Preprocessing");

    let step_start = Instant::now();
    let spinner = create_spinner("Fitting and applying transformations...");
    let (mut split, transform_report) = transform_dataset(&df, &cli.target)?;
    finish_with_success(&spinner, "Transformations applied");
    print_success("Data transformation & preprocessing completed");

    print_count("numeric feature(s)", transform_report.numeric.len(), None);
    print_count(
        "categorical feature(s)",
        transform_report.categorical.len(),
        Some(&format!(
            "(encoding to {} columns)",
            transform_report.feature_width - transform_report.numeric.len()
        )),
    );
    print_info(&format!(
        "Split: {} train rows / {} test rows",
        transform_report.train_rows, transform_report.test_rows
    ));

    summary.numeric_features = transform_report.numeric.len();
    summary.categorical_features = transform_report.categorical.len();
    summary.feature_width = transform_report.feature_width;
    summary.train_rows = transform_report.train_rows;
    summary.test_rows = transform_report.test_rows;

    let transform_elapsed = step_start.elapsed();
    summary.set_transform_time(transform_elapsed);
    print_step_time(transform_elapsed);

    // Step 3: Load - write the four datasets and the run report
    print_step_header(3, "Save Results");

    let step_start = Instant::now();
    let spinner = create_spinner("Writing output files...");
    load_datasets(&mut split, &cli.output_dir)?;
    export_run_report(&transform_report, &cli.input, &cli.target, &cli.output_dir)?;
    finish_with_success(&spinner, "Output files written");
    print_success(&format!(
        "Processed data saved in directory: {}",
        cli.output_dir.display()
    ));
    print_info(&format!("Run report: {}", cli.output_dir.join(REPORT_FILE).display()));

    let save_elapsed = step_start.elapsed();
    summary.set_save_time(save_elapsed);
    print_step_time(save_elapsed);

    // Display summary
    summary.display();

    // Final completion message
    print_completion();

    Ok(())
}
