//! Property-based tests for the statistics and trend engines.
//!
//! Quantified properties checked here:
//! - a single-value series always has a zero standard deviation
//! - the mean agrees with `sum / count`
//! - the trend split is order-preserving and puts the odd element last
//! - a zero first-half average always reports zero growth
//! - classification matches the strict ±5% thresholds

use bat_assistant::data::{DataProcessor, Dataset, Row};
use bat_assistant::stats::{
    StatsCalculator, TrendAnalyzer, TrendDirection, TREND_DECREASE_THRESHOLD,
    TREND_INCREASE_THRESHOLD,
};
use proptest::prelude::*;

fn finite_series(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..max_len)
}

proptest! {
    #[test]
    fn single_value_stdev_is_exactly_zero(x in -1.0e12..1.0e12f64) {
        let stats = StatsCalculator::describe("x", &[x]).unwrap();
        prop_assert_eq!(stats.stdev, 0.0);
        prop_assert_eq!(stats.count, 1);
    }

    #[test]
    fn mean_agrees_with_sum_over_count(values in finite_series(200)) {
        let stats = StatsCalculator::describe("x", &values).unwrap();
        let direct = stats.sum / stats.count as f64;
        let scale = values.iter().fold(0.0f64, |acc, v| acc.max(v.abs()));
        let tolerance = 1e-9 * (1.0 + scale);
        prop_assert!((stats.mean - direct).abs() <= tolerance,
            "mean {} vs sum/count {}", stats.mean, direct);
    }

    #[test]
    fn extrema_bound_mean_and_median(values in finite_series(100)) {
        let stats = StatsCalculator::describe("x", &values).unwrap();
        prop_assert!(stats.min <= stats.median && stats.median <= stats.max);
        prop_assert!(stats.min <= stats.mean + 1e-6 && stats.mean <= stats.max + 1e-6);
    }

    #[test]
    fn split_is_order_preserving(values in prop::collection::vec(any::<f64>(), 0..100)) {
        let (first, second) = TrendAnalyzer::split_halves(&values);
        prop_assert_eq!(first.len(), values.len() / 2);
        prop_assert!(second.len() >= first.len());

        let rejoined: Vec<f64> = first.iter().chain(second).copied().collect();
        prop_assert_eq!(
            rejoined.iter().map(|v| v.to_bits()).collect::<Vec<_>>(),
            values.iter().map(|v| v.to_bits()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn zero_baseline_means_zero_growth(second in any::<f64>()) {
        prop_assert_eq!(TrendAnalyzer::growth_rate(0.0, second), 0.0);
    }

    #[test]
    fn classification_follows_thresholds(rate in -1000.0..1000.0f64) {
        let expected = if rate > TREND_INCREASE_THRESHOLD {
            TrendDirection::Increasing
        } else if rate < TREND_DECREASE_THRESHOLD {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        };
        prop_assert_eq!(TrendDirection::classify(rate), expected);
    }

    #[test]
    fn extractor_count_matches_parsable_cells(
        cells in prop::collection::vec(
            prop_oneof![
                (-1.0e6..1.0e6f64).prop_map(|v| v.to_string()),
                "[a-z]{1,6}",
                Just(String::new()),
            ],
            0..50,
        )
    ) {
        let dataset = Dataset::from_rows(
            cells.iter().map(|c| Row::from_iter([("value", c.as_str())])).collect(),
        );
        let expected = cells
            .iter()
            .filter(|c| DataProcessor::parse_numeric(c).is_some())
            .count();
        prop_assert_eq!(DataProcessor::extract_numeric(&dataset, "value").len(), expected);
    }
}

#[test]
fn five_percent_boundaries_are_stable() {
    assert_eq!(TrendDirection::classify(5.00), TrendDirection::Stable);
    assert_eq!(TrendDirection::classify(-5.00), TrendDirection::Stable);
}
