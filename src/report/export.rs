//! Report Export Module
//! Writes the combined report text to disk.

use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

/// Blank line between report sections in an exported file
pub const SECTION_SEPARATOR: &str = "\n\n";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Writes report sections verbatim to a file.
pub struct ReportExporter;

impl ReportExporter {
    pub fn combine(sections: &[String]) -> String {
        sections.join(SECTION_SEPARATOR)
    }

    pub fn export(path: &Path, content: &str) -> Result<(), ExportError> {
        fs::write(path, content).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "report export failed");
        })?;
        info!(path = %path.display(), bytes = content.len(), "report exported");
        Ok(())
    }
}
