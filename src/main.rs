//! BAT - Business Analysis Tool
//!
//! Command-line entry point.

use anyhow::Result;
use bat_assistant::{BatApp, Cli};
use clap::{CommandFactory, Parser};
use std::io;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<ExitCode> {
    // No arguments at all: show help and succeed
    if std::env::args_os().len() <= 1 {
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::SUCCESS);
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdout = io::stdout();
    let mut app = BatApp::new(stdout.lock(), cli.render_mode());
    let outcome = app.run(&cli)?;

    Ok(ExitCode::from(outcome.exit_code()))
}
