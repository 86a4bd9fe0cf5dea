//! Report Formatter Module
//! Renders dataset metadata and analysis results as text or JSON.

use crate::data::{Dataset, Row};
use crate::stats::{StatisticsResult, TrendResult};
use serde::Serialize;
use std::fmt::Write;

/// Width of the `=` banner around the summary report
pub const BANNER_WIDTH: usize = 60;
/// Width of the `-` rule under section titles
pub const RULE_WIDTH: usize = 40;
/// Number of leading records shown in the summary
pub const SAMPLE_ROWS: usize = 3;

pub const NO_DATA_MESSAGE: &str = "No data loaded. Please load data first.";

/// Output rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Text,
    Json,
}

#[derive(Serialize)]
struct DatasetSummary<'a> {
    total_records: usize,
    columns: Vec<String>,
    sample: &'a [Row],
}

/// Stateless renderer for every report section.
pub struct ReportFormatter;

impl ReportFormatter {
    /// Summary of the loaded dataset. `generated` is the timestamp printed in the header.
    pub fn summary(dataset: Option<&Dataset>, generated: &str) -> String {
        let Some(dataset) = dataset.filter(|d| !d.is_empty()) else {
            return NO_DATA_MESSAGE.to_string();
        };

        let banner = "=".repeat(BANNER_WIDTH);
        let mut lines = vec![
            banner.clone(),
            "BUSINESS ANALYSIS SUMMARY REPORT".to_string(),
            banner.clone(),
            format!("Generated: {generated}"),
            format!("Total Records: {}", dataset.len()),
            String::new(),
            "Available Columns:".to_string(),
        ];

        for (i, column) in dataset.columns().iter().enumerate() {
            lines.push(format!("  {}. {}", i + 1, column));
        }
        lines.push(String::new());

        lines.push(format!("Sample Data (first {SAMPLE_ROWS} records):"));
        for (i, row) in dataset.sample(SAMPLE_ROWS).iter().enumerate() {
            lines.push(format!("\nRecord {}:", i + 1));
            for (key, value) in row.iter() {
                lines.push(format!("  {key}: {value}"));
            }
        }

        lines.push(String::new());
        lines.push(banner);
        lines.join("\n")
    }

    pub fn analysis(result: &StatisticsResult) -> String {
        let mut out = Self::section_header("Numerical Analysis", &result.column);
        // fmt::Write into a String cannot fail
        let _ = writeln!(out, "Count: {}", result.count);
        for (label, value) in [
            ("Mean", result.mean),
            ("Median", result.median),
            ("Min", result.min),
            ("Max", result.max),
        ] {
            let _ = writeln!(out, "{label}: {value:.2}");
        }
        // A single value has no spread; its zero is printed bare
        if result.count > 1 {
            let _ = writeln!(out, "Stdev: {:.2}", result.stdev);
        } else {
            let _ = writeln!(out, "Stdev: 0");
        }
        let _ = writeln!(out, "Sum: {:.2}", result.sum);
        out
    }

    pub fn trend(result: &TrendResult) -> String {
        let mut out = Self::section_header("Trend Analysis", &result.column);
        let _ = writeln!(out, "Trend: {}", result.trend);
        let _ = writeln!(out, "Growth rate: {}", result.growth_rate_display());
        let _ = writeln!(out, "First half avg: {:?}", result.first_half_avg);
        let _ = writeln!(out, "Second half avg: {:?}", result.second_half_avg);
        out
    }

    pub fn summary_json(dataset: Option<&Dataset>) -> Result<String, serde_json::Error> {
        let Some(dataset) = dataset.filter(|d| !d.is_empty()) else {
            return Ok(NO_DATA_MESSAGE.to_string());
        };

        serde_json::to_string_pretty(&DatasetSummary {
            total_records: dataset.len(),
            columns: dataset.columns(),
            sample: dataset.sample(SAMPLE_ROWS),
        })
    }

    pub fn analysis_json(result: &StatisticsResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(result)
    }

    pub fn trend_json(result: &TrendResult) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(result)
    }

    fn section_header(title: &str, column: &str) -> String {
        format!("\n{title} for '{column}':\n{}\n", "-".repeat(RULE_WIDTH))
    }
}
