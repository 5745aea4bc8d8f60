//! Installer Module
//!
//! Handles installation tasks like PATH setup

pub mod path_setup;

pub use path_setup::{PathOutcome, PathReport, PathSetup, PathStatus, URBACKUP_DIR};
