//! Statistics Calculator Module
//! Descriptive statistics over a single numeric column.

use serde::Serialize;
use statrs::statistics::Statistics;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("No numeric values found in column '{0}'")]
    EmptySeries(String),
}

/// Descriptive statistics for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsResult {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub stdev: f64,
    pub sum: f64,
}

/// Handles statistical calculations.
pub struct StatsCalculator;

impl StatsCalculator {
    /// Compute descriptive statistics for an array of values.
    ///
    /// `stdev` is the sample standard deviation (n - 1 divisor) and is exactly
    /// zero for a single value.
    pub fn describe(column: &str, values: &[f64]) -> Result<StatisticsResult, StatsError> {
        let n = values.len();
        if n == 0 {
            return Err(StatsError::EmptySeries(column.to_string()));
        }

        let stdev = if n > 1 { values.iter().std_dev() } else { 0.0 };

        Ok(StatisticsResult {
            column: column.to_string(),
            count: n,
            mean: values.iter().mean(),
            median: Self::median(values),
            min: Statistics::min(values.iter()),
            max: Statistics::max(values.iter()),
            stdev,
            sum: values.iter().sum(),
        })
    }

    /// Middle value, averaging the two central elements for an even count.
    pub fn median(values: &[f64]) -> f64 {
        let n = values.len();
        if n == 0 {
            return f64::NAN;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        } else {
            sorted[n / 2]
        }
    }
}
