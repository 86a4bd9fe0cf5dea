//! Trend Module
//! Two-window comparison of a numeric series.

use serde::Serialize;
use statrs::statistics::Statistics;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Growth above this percentage is an increase
pub const TREND_INCREASE_THRESHOLD: f64 = 5.0;
/// Growth below this percentage is a decrease
pub const TREND_DECREASE_THRESHOLD: f64 = -5.0;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendError {
    #[error("No data loaded")]
    NoData,
    #[error("Insufficient data for trend analysis")]
    InsufficientData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

impl TrendDirection {
    /// Classify a growth rate against the fixed thresholds (both strict).
    pub fn classify(growth_rate: f64) -> Self {
        if growth_rate > TREND_INCREASE_THRESHOLD {
            TrendDirection::Increasing
        } else if growth_rate < TREND_DECREASE_THRESHOLD {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Stable => "Stable",
        };
        f.write_str(label)
    }
}

/// Result of comparing the first and second halves of a column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendResult {
    pub column: String,
    pub trend: TrendDirection,
    /// Percentage, unrounded
    pub growth_rate: f64,
    pub first_half_avg: f64,
    pub second_half_avg: f64,
}

impl TrendResult {
    /// Growth rate as shown in reports, e.g. `133.33%`.
    pub fn growth_rate_display(&self) -> String {
        format!("{:.2}%", self.growth_rate)
    }
}

/// Computes simple half-over-half trends.
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    pub fn analyze(column: &str, values: &[f64]) -> Result<TrendResult, TrendError> {
        if values.len() < 2 {
            return Err(TrendError::InsufficientData);
        }

        let (first_half, second_half) = Self::split_halves(values);
        debug!(
            column,
            first = first_half.len(),
            second = second_half.len(),
            "split series for trend"
        );

        let first_half_avg = first_half.iter().mean();
        let second_half_avg = second_half.iter().mean();
        let growth_rate = Self::growth_rate(first_half_avg, second_half_avg);

        Ok(TrendResult {
            column: column.to_string(),
            trend: TrendDirection::classify(growth_rate),
            growth_rate,
            first_half_avg,
            second_half_avg,
        })
    }

    /// Split at `len / 2`; an odd element lands in the second half.
    pub fn split_halves(values: &[f64]) -> (&[f64], &[f64]) {
        values.split_at(values.len() / 2)
    }

    /// Percentage change between the two averages. A zero baseline reports 0.
    pub fn growth_rate(first_avg: f64, second_avg: f64) -> f64 {
        if first_avg == 0.0 {
            return 0.0;
        }
        (second_avg - first_avg) / first_avg * 100.0
    }
}
