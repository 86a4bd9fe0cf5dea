//! Data Processor Module
//! Pulls numeric series out of text columns.

use super::loader::Dataset;
use tracing::debug;

/// Handles column extraction and numeric coercion.
pub struct DataProcessor;

impl DataProcessor {
    /// Extract the numeric values of `column`, in row order.
    ///
    /// Rows without the column and cells that do not parse as a number are
    /// skipped. A column that does not exist at all yields an empty series.
    pub fn extract_numeric(dataset: &Dataset, column: &str) -> Vec<f64> {
        let mut values = Vec::new();
        let mut absent = 0usize;
        let mut unparsable = 0usize;

        for row in dataset.rows() {
            match row.get(column) {
                Some(cell) => match Self::parse_numeric(cell) {
                    Some(v) => values.push(v),
                    None => unparsable += 1,
                },
                None => absent += 1,
            }
        }

        debug!(
            column,
            parsed = values.len(),
            unparsable,
            absent,
            "extracted numeric series"
        );
        values
    }

    /// Parse a single cell as `f64`, ignoring surrounding whitespace.
    ///
    /// Single underscores between digits are accepted as separators (`1_000`).
    pub fn parse_numeric(cell: &str) -> Option<f64> {
        let cell = cell.trim();
        if !cell.contains('_') {
            return cell.parse::<f64>().ok();
        }

        let bytes = cell.as_bytes();
        let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
            b != b'_'
                || (i > 0
                    && bytes[i - 1].is_ascii_digit()
                    && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
        });
        if !separators_ok {
            return None;
        }
        cell.replace('_', "").parse::<f64>().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Row;

    fn revenue_dataset(cells: &[&str]) -> Dataset {
        Dataset::from_rows(
            cells
                .iter()
                .map(|c| Row::from_iter([("revenue", *c)]))
                .collect(),
        )
    }

    #[test]
    fn skips_unparsable_cells_and_keeps_order() {
        let ds = revenue_dataset(&["100", "200", "abc", "300"]);
        assert_eq!(
            DataProcessor::extract_numeric(&ds, "revenue"),
            vec![100.0, 200.0, 300.0]
        );
    }

    #[test]
    fn skips_rows_without_the_column() {
        let ds = Dataset::from_rows(vec![
            Row::from_iter([("revenue", "5")]),
            Row::from_iter([("cost", "7")]),
            Row::from_iter([("revenue", "9"), ("cost", "1")]),
        ]);
        assert_eq!(DataProcessor::extract_numeric(&ds, "revenue"), vec![5.0, 9.0]);
    }

    #[test]
    fn missing_column_yields_empty_series() {
        let ds = revenue_dataset(&["1", "2"]);
        assert!(DataProcessor::extract_numeric(&ds, "profit").is_empty());
    }

    #[test]
    fn parse_numeric_accepts_common_forms() {
        assert_eq!(DataProcessor::parse_numeric(" 42 "), Some(42.0));
        assert_eq!(DataProcessor::parse_numeric("-1.5e2"), Some(-150.0));
        assert_eq!(DataProcessor::parse_numeric(""), None);
        assert_eq!(DataProcessor::parse_numeric("12abc"), None);
        assert_eq!(DataProcessor::parse_numeric("true"), None);
    }

    #[test]
    fn parse_numeric_accepts_digit_separators() {
        assert_eq!(DataProcessor::parse_numeric("1_000"), Some(1000.0));
        assert_eq!(DataProcessor::parse_numeric("1_000.2_5"), Some(1000.25));
        assert_eq!(DataProcessor::parse_numeric("_1000"), None);
        assert_eq!(DataProcessor::parse_numeric("1000_"), None);
        assert_eq!(DataProcessor::parse_numeric("1__000"), None);
        assert_eq!(DataProcessor::parse_numeric("1_.5"), None);
    }
}
