//! User PATH Setup
//!
//! Ensures a directory is listed in the per-user persistent PATH.
//!
//! Membership is an exact, case-sensitive match against the `;`-separated
//! segments of the stored value. The entry is compared and appended
//! literally, trailing `\` included. An absent entry is appended after a
//! single `;`, except on an empty value where it becomes the whole value.
//! Existing segments (order, duplicates, empty ones) are never touched.

use crate::engine::store::{EnvStore, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// UrBackup client install directory
pub const URBACKUP_DIR: &str = r"C:\Program Files\UrBackup\";

pub const DELIMITER: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathOutcome {
    AlreadyPresent,
    Added,
}

impl fmt::Display for PathOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOutcome::AlreadyPresent => write!(f, "Already in PATH"),
            PathOutcome::Added => write!(f, "Added to PATH"),
        }
    }
}

/// Result of one ensure run, with the value before and after
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathReport {
    pub entry: String,
    pub outcome: PathOutcome,
    pub previous: String,
    pub current: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathStatus {
    pub entry: String,
    pub in_path: bool,
    pub segments: Vec<String>,
}

pub fn segments(value: &str) -> impl Iterator<Item = &str> {
    value.split(DELIMITER)
}

pub fn contains_segment(value: &str, entry: &str) -> bool {
    segments(value).any(|segment| segment == entry)
}

/// `value` with `entry` appended as a new last segment
pub fn append_segment(value: &str, entry: &str) -> String {
    if value.is_empty() {
        entry.to_string()
    } else {
        format!("{}{}{}", value, DELIMITER, entry)
    }
}

pub struct PathSetup<S> {
    store: S,
}

impl<S: EnvStore> PathSetup<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Add `entry` to the user PATH unless it is already a segment.
    pub fn ensure_in_path(&self, entry: &str) -> Result<PathOutcome> {
        self.ensure_with_report(entry).map(|report| report.outcome)
    }

    pub fn ensure_with_report(&self, entry: &str) -> Result<PathReport> {
        let previous = self.store.read_user_path()?;

        if contains_segment(&previous, entry) {
            tracing::info!(entry, store = self.store.name(), "entry already in user PATH");
            return Ok(PathReport {
                entry: entry.to_string(),
                outcome: PathOutcome::AlreadyPresent,
                current: previous.clone(),
                previous,
            });
        }

        let current = append_segment(&previous, entry);
        self.store.write_user_path(&current)?;
        tracing::info!(entry, store = self.store.name(), "added entry to user PATH");

        Ok(PathReport {
            entry: entry.to_string(),
            outcome: PathOutcome::Added,
            previous,
            current,
        })
    }

    /// Read-only membership check
    pub fn check(&self, entry: &str) -> Result<PathStatus> {
        let value = self.store.read_user_path()?;
        Ok(PathStatus {
            entry: entry.to_string(),
            in_path: contains_segment(&value, entry),
            segments: segments(&value).map(str::to_string).collect(),
        })
    }
}
