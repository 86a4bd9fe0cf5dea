//! Stats module - descriptive statistics and trends

mod calculator;
mod trend;

pub use calculator::{StatisticsResult, StatsCalculator, StatsError};
pub use trend::{
    TrendAnalyzer, TrendDirection, TrendError, TrendResult, TREND_DECREASE_THRESHOLD,
    TREND_INCREASE_THRESHOLD,
};
