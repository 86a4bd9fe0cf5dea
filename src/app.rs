//! BAT Application Runner
//! Drives one invocation: load, render the requested sections, export.

use crate::cli::Cli;
use crate::report::{RenderMode, ReportExporter, ReportFormatter};
use crate::session::Session;
use crate::stats::{StatisticsResult, TrendResult};
use std::io::{self, Write};

/// How an invocation ended. Only a failed load is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    LoadFailed,
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Completed => 0,
            RunOutcome::LoadFailed => 1,
        }
    }
}

/// Main application: owns the session and writes console output to `out`.
pub struct BatApp<W: Write> {
    session: Session,
    mode: RenderMode,
    out: W,
}

impl<W: Write> BatApp<W> {
    pub fn new(out: W, mode: RenderMode) -> Self {
        Self {
            session: Session::new(),
            mode,
            out,
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    /// Run every operation requested on the command line.
    pub fn run(&mut self, cli: &Cli) -> io::Result<RunOutcome> {
        if cli.version {
            writeln!(self.out, "{}", Cli::version_line())?;
            return Ok(RunOutcome::Completed);
        }

        if let Some(path) = &cli.load {
            match self.session.load(path, cli.format) {
                Ok(count) => writeln!(
                    self.out,
                    "Successfully loaded {count} records from {}",
                    path.display()
                )?,
                Err(e) => {
                    writeln!(self.out, "Error loading data: {e}")?;
                    return Ok(RunOutcome::LoadFailed);
                }
            }
        }

        let mut sections: Vec<String> = Vec::new();

        if cli.summary {
            let report = self.render_summary()?;
            self.emit(report, &mut sections)?;
        }

        if let Some(column) = &cli.analyze {
            match self.session.analyze(column) {
                Ok(stats) => {
                    let report = self.render_analysis(&stats)?;
                    self.emit(report, &mut sections)?;
                }
                Err(e) => writeln!(self.out, "Error: {e}")?,
            }
        }

        if let Some(column) = &cli.trends {
            match self.session.trends(column) {
                Ok(trend) => {
                    let report = self.render_trend(&trend)?;
                    self.emit(report, &mut sections)?;
                }
                Err(e) => writeln!(self.out, "Error: {e}")?,
            }
        }

        if let Some(path) = &cli.export {
            if !sections.is_empty() {
                let content = ReportExporter::combine(&sections);
                match ReportExporter::export(path, &content) {
                    Ok(()) => writeln!(self.out, "Report exported to {}", path.display())?,
                    Err(e) => writeln!(self.out, "Error exporting report: {e}")?,
                }
            }
        }

        Ok(RunOutcome::Completed)
    }

    fn emit(&mut self, report: String, sections: &mut Vec<String>) -> io::Result<()> {
        writeln!(self.out, "{report}")?;
        sections.push(report);
        Ok(())
    }

    fn render_summary(&self) -> io::Result<String> {
        let dataset = self.session.dataset();
        Ok(match self.mode {
            RenderMode::Text => {
                let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
                ReportFormatter::summary(dataset, &generated)
            }
            RenderMode::Json => ReportFormatter::summary_json(dataset)?,
        })
    }

    fn render_analysis(&self, stats: &StatisticsResult) -> io::Result<String> {
        Ok(match self.mode {
            RenderMode::Text => ReportFormatter::analysis(stats),
            RenderMode::Json => ReportFormatter::analysis_json(stats)?,
        })
    }

    fn render_trend(&self, trend: &TrendResult) -> io::Result<String> {
        Ok(match self.mode {
            RenderMode::Text => ReportFormatter::trend(trend),
            RenderMode::Json => ReportFormatter::trend_json(trend)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(args: &[&str]) -> (RunOutcome, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut app = BatApp::new(Vec::new(), cli.render_mode());
        let outcome = app.run(&cli).unwrap();
        (outcome, String::from_utf8(app.into_output()).unwrap())
    }

    #[test]
    fn summary_without_load_asks_for_data() {
        let (outcome, out) = run(&["bat", "--summary"]);
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(out, "No data loaded. Please load data first.\n");
    }

    #[test]
    fn operations_without_load_print_errors() {
        let (outcome, out) = run(&["bat", "--analyze", "revenue", "--trends", "revenue"]);
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            out,
            "Error: No numeric values found in column 'revenue'\nError: No data loaded\n"
        );
    }

    #[test]
    fn version_short_circuits_other_operations() {
        let (outcome, out) = run(&["bat", "--version", "--load", "/nonexistent/x.csv"]);
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(out, "BAT 1.0.0\n");
    }

    #[test]
    fn failed_load_stops_the_run() {
        let (outcome, out) = run(&["bat", "--load", "/nonexistent/x.csv", "--summary"]);
        assert_eq!(outcome, RunOutcome::LoadFailed);
        assert_eq!(outcome.exit_code(), 1);
        assert!(out.starts_with("Error loading data: "));
        assert!(!out.contains("No data loaded"));
    }
}
