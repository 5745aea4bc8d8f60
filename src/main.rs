//! userpath - Main entry point
//!
//! Adds the UrBackup client directory to the current user's PATH.

use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use userpath_lib::engine::{
    cli::{formatter::CliFormatter, Cli, OutputFormat},
    config::Config,
    store,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            match cli.format {
                OutputFormat::Text => CliFormatter::failure(format!("{:#}", e)),
                OutputFormat::Json => {
                    let error = serde_json::json!({ "error": format!("{:#}", e) });
                    CliFormatter::json(&error).ok();
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    let store = store::open(&config)?;

    if cli.check {
        let status = userpath_lib::check_urbackup_in_path(store)?;
        match cli.format {
            OutputFormat::Text => CliFormatter::status(&status),
            OutputFormat::Json => CliFormatter::json(&status)?,
        }
        return Ok(());
    }

    let report = userpath_lib::ensure_urbackup_in_path(store)?;
    match cli.format {
        OutputFormat::Text => CliFormatter::outcome(report.outcome),
        OutputFormat::Json => CliFormatter::json(&report)?,
    }
    Ok(())
}
