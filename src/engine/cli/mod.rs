//! userpath CLI Module
//! Command-line interface for the user PATH setup

pub mod formatter;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "userpath")]
#[command(version)]
#[command(about = "Ensure the UrBackup directory is on the per-user PATH", long_about = None)]
pub struct Cli {
    /// Output format (json for scripting)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Only report whether the entry is present; never write
    #[arg(long)]
    pub check: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Default tracing filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
