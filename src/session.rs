//! Analysis Session
//! Owns the loaded dataset and runs column operations against it.

use crate::data::{DataFormat, DataLoader, DataProcessor, Dataset, LoaderError};
use crate::stats::{StatisticsResult, StatsCalculator, StatsError, TrendAnalyzer, TrendError, TrendResult};
use std::path::Path;

/// Holds at most one dataset. Each successful load replaces it.
#[derive(Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a file, replacing the current dataset. Returns the record count.
    ///
    /// On failure the previous dataset is left untouched.
    pub fn load(&mut self, path: &Path, format: DataFormat) -> Result<usize, LoaderError> {
        let dataset = DataLoader::load(path, format)?;
        let count = dataset.len();
        self.dataset = Some(dataset);
        Ok(count)
    }

    /// Install an already-built dataset.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn has_data(&self) -> bool {
        self.dataset.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// Numeric values of `column`; empty when nothing is loaded.
    pub fn series(&self, column: &str) -> Vec<f64> {
        self.dataset
            .as_ref()
            .map(|d| DataProcessor::extract_numeric(d, column))
            .unwrap_or_default()
    }

    pub fn analyze(&self, column: &str) -> Result<StatisticsResult, StatsError> {
        StatsCalculator::describe(column, &self.series(column))
    }

    pub fn trends(&self, column: &str) -> Result<TrendResult, TrendError> {
        if !self.has_data() {
            return Err(TrendError::NoData);
        }
        TrendAnalyzer::analyze(column, &self.series(column))
    }
}
