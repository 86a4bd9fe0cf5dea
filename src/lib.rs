//! BAT - Business Analysis Tool
//!
//! Loads tabular data from CSV or JSON, computes descriptive statistics and
//! half-over-half trends on numeric columns, and renders text reports.

pub mod app;
pub mod cli;
pub mod data;
pub mod report;
pub mod session;
pub mod stats;

pub use app::{BatApp, RunOutcome};
pub use cli::Cli;
pub use session::Session;
