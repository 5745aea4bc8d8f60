//! Environment Store
//!
//! Access to the per-user persistent PATH variable. The updater only ever
//! talks to an [`EnvStore`]; how the value is physically read and written
//! (registry, automation shell, memory) is chosen here.

pub mod memory;
pub mod powershell;
pub mod registry;

pub use memory::MemoryStore;
pub use powershell::PowerShellStore;
pub use registry::RegistryStore;

use crate::engine::config::{Backend, Config};
use std::io;
use thiserror::Error;

/// Failure to access the per-user environment store.
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("Registry error")]
    Registry(#[from] io::Error),

    #[error("Failed to launch {program}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Command failed (exit code {}): {stderr}", code.map(|c| c.to_string()).unwrap_or_else(|| "none".to_string()))]
    CommandFailed { code: Option<i32>, stderr: String },

    #[error("PowerShell executable not found")]
    ShellNotFound,

    #[error("Unsupported platform")]
    UnsupportedPlatform,

    #[error("Injected failure: {0}")]
    Injected(String),
}

pub type Result<T> = std::result::Result<T, EnvError>;

/// Read/write access to the user-scoped PATH variable.
pub trait EnvStore {
    /// Current value, or an empty string when the variable is unset.
    fn read_user_path(&self) -> Result<String>;

    /// Replace the stored value.
    fn write_user_path(&self, value: &str) -> Result<()>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

impl<S: EnvStore + ?Sized> EnvStore for Box<S> {
    fn read_user_path(&self) -> Result<String> {
        (**self).read_user_path()
    }

    fn write_user_path(&self, value: &str) -> Result<()> {
        (**self).write_user_path(value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<S: EnvStore + ?Sized> EnvStore for &S {
    fn read_user_path(&self) -> Result<String> {
        (**self).read_user_path()
    }

    fn write_user_path(&self, value: &str) -> Result<()> {
        (**self).write_user_path(value)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Open the store selected by the configuration.
pub fn open(config: &Config) -> Result<Box<dyn EnvStore>> {
    let store: Box<dyn EnvStore> = match config.backend {
        Backend::Registry => Box::new(RegistryStore::open(config.broadcast)?),
        Backend::PowerShell => Box::new(PowerShellStore::locate(config.shell.as_deref())?),
    };
    tracing::debug!(backend = store.name(), "opened environment store");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_failed_display() {
        let err = EnvError::CommandFailed {
            code: Some(1),
            stderr: "Access denied".to_string(),
        };
        assert_eq!(err.to_string(), "Command failed (exit code 1): Access denied");

        let err = EnvError::CommandFailed {
            code: None,
            stderr: "killed".to_string(),
        };
        assert_eq!(err.to_string(), "Command failed (exit code none): killed");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_open_refuses_every_backend_off_windows() {
        for backend in [Backend::Registry, Backend::PowerShell] {
            let config = Config {
                backend,
                ..Config::default()
            };
            assert!(matches!(open(&config), Err(EnvError::UnsupportedPlatform)));
        }
    }

    #[test]
    fn test_boxed_store_delegates() {
        let store: Box<dyn EnvStore> = Box::new(MemoryStore::with_value("C:\\A"));
        assert_eq!(store.read_user_path().unwrap(), "C:\\A");
        store.write_user_path("C:\\B").unwrap();
        assert_eq!(store.read_user_path().unwrap(), "C:\\B");
        assert_eq!(store.name(), "memory");
    }
}
