//! Run summary report generation

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

/// Summary of one preprocessing run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub rows: usize,
    pub numeric_features: usize,
    pub categorical_features: usize,
    pub feature_width: usize,
    pub train_rows: usize,
    pub test_rows: usize,
    extract_time: Duration,
    transform_time: Duration,
    save_time: Duration,
}

impl RunSummary {
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    pub fn set_extract_time(&mut self, elapsed: Duration) {
        self.extract_time = elapsed;
    }

    pub fn set_transform_time(&mut self, elapsed: Duration) {
        self.transform_time = elapsed;
    }

    pub fn set_save_time(&mut self, elapsed: Duration) {
        self.save_time = elapsed;
    }

    pub fn total_time(&self) -> Duration {
        self.extract_time + self.transform_time + self.save_time
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("RUN SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![Cell::new("📁 Input Rows"), Cell::new(self.rows)]);

        table.add_row(vec![
            Cell::new("🔢 Numeric Features"),
            Cell::new(self.numeric_features),
        ]);

        table.add_row(vec![
            Cell::new("🏷️  Categorical Features"),
            Cell::new(self.categorical_features),
        ]);

        table.add_row(vec![
            Cell::new("📐 Encoded Width"),
            Cell::new(self.feature_width)
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("🏋️  Train Rows"),
            Cell::new(self.train_rows).fg(Color::Green),
        ]);

        table.add_row(vec![
            Cell::new("🧪 Test Rows"),
            Cell::new(self.test_rows).fg(Color::Yellow),
        ]);

        table.add_row(vec![
            Cell::new("⏱  Total Time"),
            Cell::new(format!("{:.2}s", self.total_time().as_secs_f64())),
        ]);

        // Indent the table
        for line in table.to_string().lines() {
            println!("    {}", line);
        }
    }
}
