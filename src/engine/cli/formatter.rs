//! CLI Output Formatting Module
//! One status line on stdout per run

use crate::engine::installer::{PathOutcome, PathStatus};
use colored::Colorize;
use std::fmt::Display;

pub const FAILURE_PREFIX: &str = "Failed to modify the system PATH: ";

pub struct CliFormatter;

impl CliFormatter {
    /// Print the outcome of an ensure run
    pub fn outcome(outcome: PathOutcome) {
        let line = outcome.to_string();
        match outcome {
            PathOutcome::Added => println!("{}", line.green()),
            PathOutcome::AlreadyPresent => println!("{}", line),
        }
    }

    /// Print the result of a read-only check
    pub fn status(status: &PathStatus) {
        let line = status_line(status);
        if status.in_path {
            println!("{}", line);
        } else {
            println!("{}", line.yellow());
        }
    }

    /// Print a failure. Goes to stdout so a run always yields exactly one line there.
    pub fn failure(err: impl Display) {
        println!("{}", failure_line(err).red());
    }

    /// Print a value as a single JSON line
    pub fn json<T: serde::Serialize>(value: &T) -> serde_json::Result<()> {
        println!("{}", serde_json::to_string(value)?);
        Ok(())
    }
}

pub fn status_line(status: &PathStatus) -> &'static str {
    if status.in_path {
        "Already in PATH"
    } else {
        "Not in PATH"
    }
}

pub fn failure_line(err: impl Display) -> String {
    format!("{}{}", FAILURE_PREFIX, err)
}
