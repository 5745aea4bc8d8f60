//! userpath - keep the UrBackup client directory on the per-user PATH

pub mod engine;

use engine::installer::{PathReport, PathSetup, PathStatus, URBACKUP_DIR};
use engine::store::{EnvStore, Result};

/// Add the UrBackup directory to the user PATH if missing
pub fn ensure_urbackup_in_path<S: EnvStore>(store: S) -> Result<PathReport> {
    PathSetup::new(store).ensure_with_report(URBACKUP_DIR)
}

/// Read-only check for the UrBackup directory
pub fn check_urbackup_in_path<S: EnvStore>(store: S) -> Result<PathStatus> {
    PathSetup::new(store).check(URBACKUP_DIR)
}
