//! Report module - text rendering and export

mod export;
mod formatter;

pub use export::{ExportError, ReportExporter, SECTION_SEPARATOR};
pub use formatter::{RenderMode, ReportFormatter, NO_DATA_MESSAGE, SAMPLE_ROWS};
