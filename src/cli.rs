//! BAT command line structure
//!
//! Flag-driven interface: every requested operation runs in a fixed order
//! (load, summary, analyze, trends, export).

use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::data::DataFormat;
use crate::report::RenderMode;

const EXAMPLES: &str = "\
Examples:
  # Load data and generate summary report
  bat --load data.csv --summary

  # Analyze a specific numeric column
  bat --load data.csv --analyze revenue

  # Find trends in data
  bat --load data.csv --trends sales

  # Export report to file
  bat --load data.csv --summary --export report.txt";

/// Business Analysis Tool (BAT) Assistant - Analyze business data and generate insights
#[derive(Parser, Debug, Clone)]
#[command(name = "bat")]
#[command(long_about = None, disable_version_flag = true)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Load data from file (CSV or JSON)
    #[arg(long, value_name = "FILE")]
    pub load: Option<PathBuf>,

    /// Data format
    #[arg(long, value_enum, default_value_t = DataFormat::Csv)]
    pub format: DataFormat,

    /// Generate summary report
    #[arg(long)]
    pub summary: bool,

    /// Analyze numeric column
    #[arg(long, value_name = "COLUMN")]
    pub analyze: Option<String>,

    /// Find trends in column
    #[arg(long, value_name = "COLUMN")]
    pub trends: Option<String>,

    /// Export report to file
    #[arg(long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Render report sections as JSON
    #[arg(long)]
    pub json: bool,

    /// Print version information and exit
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Version banner printed by `--version`.
    pub fn version_line() -> String {
        format!("BAT {}", env!("CARGO_PKG_VERSION"))
    }

    pub fn render_mode(&self) -> RenderMode {
        if self.json {
            RenderMode::Json
        } else {
            RenderMode::Text
        }
    }

    /// Default tracing filter for the verbosity count.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
