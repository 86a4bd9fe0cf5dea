//! Data Loader Module
//! Handles CSV/JSON file loading into an in-memory row store.

use polars::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("{0}")]
    IoError(#[from] std::io::Error),
    #[error("Expected a JSON array of objects, found {0}")]
    UnexpectedJsonShape(&'static str),
}

/// Input file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DataFormat {
    /// Header row followed by data rows
    #[default]
    Csv,
    /// Array of objects
    Json,
}

/// A single record: column name to text value, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, String)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing the value in place if the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Ordered, fully materialized sequence of rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names, taken from the first record.
    pub fn columns(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|row| row.keys().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Up to `limit` leading records.
    pub fn sample(&self, limit: usize) -> &[Row] {
        &self.rows[..self.rows.len().min(limit)]
    }
}

/// Reads CSV and JSON files into a [`Dataset`].
pub struct DataLoader;

impl DataLoader {
    pub fn load(path: &Path, format: DataFormat) -> Result<Dataset, LoaderError> {
        let dataset = match format {
            DataFormat::Csv => Self::load_csv(path)?,
            DataFormat::Json => Self::load_json(path)?,
        };
        info!(path = %path.display(), rows = dataset.len(), ?format, "dataset loaded");
        Ok(dataset)
    }

    /// Load a CSV file using Polars. Every column is read as text.
    ///
    /// A zero-byte file is an empty dataset. Short rows leave their trailing
    /// cells empty and extra fields beyond the header are dropped.
    pub fn load_csv(path: &Path) -> Result<Dataset, LoaderError> {
        if fs::metadata(path)?.len() == 0 {
            return Ok(Dataset::default());
        }

        // Schema inference is disabled so every column stays a string
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_truncate_ragged_lines(true)
            .finish()?
            .collect()?;

        Self::dataframe_to_dataset(&df)
    }

    /// Turn a column-major DataFrame into row-major records. Nulls become empty text.
    pub fn dataframe_to_dataset(df: &DataFrame) -> Result<Dataset, LoaderError> {
        let mut rows: Vec<Row> = (0..df.height()).map(|_| Row::new()).collect();

        for column in df.get_columns() {
            let name = column.name().to_string();
            let text = column.cast(&DataType::String)?;
            for (row, cell) in rows.iter_mut().zip(text.str()?.into_iter()) {
                row.insert(name.clone(), cell.unwrap_or_default());
            }
        }

        Ok(Dataset::from_rows(rows))
    }

    pub fn load_json(path: &Path) -> Result<Dataset, LoaderError> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parse an array of JSON objects, coercing every value to text.
    pub fn parse_json(content: &str) -> Result<Dataset, LoaderError> {
        let items = match serde_json::from_str::<Value>(content)? {
            Value::Array(items) => items,
            other => return Err(LoaderError::UnexpectedJsonShape(json_kind(&other))),
        };

        let rows = items
            .into_iter()
            .map(|item| match item {
                Value::Object(fields) => Ok(fields
                    .into_iter()
                    .map(|(k, v)| (k, json_cell_text(v)))
                    .collect::<Row>()),
                other => Err(LoaderError::UnexpectedJsonShape(json_kind(&other))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Dataset::from_rows(rows))
    }
}

fn json_cell_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        // Booleans count as 1 and 0
        Value::Bool(b) => u8::from(b).to_string(),
        other => other.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
