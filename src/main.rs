//! tictactoe - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::{Settings, evaluate_board, play, tui};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Command::Tui => {
            init_file_logging(&settings)?;
            tui::run(&settings)
        }
        Command::Play { moves, json } => {
            init_stderr_logging(&settings);
            let report = play(&moves);
            print_report(&report, json, &settings)
        }
        Command::Evaluate { board, json } => {
            init_stderr_logging(&settings);
            let report = evaluate_board(&board)?;
            print_report(&report, json, &settings)
        }
    }
}

fn env_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(settings.log_filter()))
}

/// Logs to stderr so stdout stays clean for reports.
fn init_stderr_logging(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::io::stderr)
        .init();
    debug!("Logging to stderr");
}

/// Logs to a file so log lines don't corrupt the terminal UI.
fn init_file_logging(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    info!(log_file = %settings.log_file().display(), "Logging to file");
    Ok(())
}

fn print_report(report: &tictactoe::Report, json: bool, settings: &Settings) -> Result<()> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        println!("{}", report.render(settings));
    }
    Ok(())
}
