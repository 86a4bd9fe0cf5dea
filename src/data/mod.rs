//! Data module - file loading and column extraction

mod loader;
mod processor;

pub use loader::{DataFormat, DataLoader, Dataset, LoaderError, Row};
pub use processor::DataProcessor;
