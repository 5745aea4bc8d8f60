//! Compatibility backend: shells out to PowerShell and uses
//! `[Environment]::GetEnvironmentVariable` / `SetEnvironmentVariable` with
//! `User` scope.
//!
//! Windows only: on other platforms .NET accepts the `User` target but never
//! persists it, so `locate` refuses to run there. Unlike the registry
//! backend, .NET returns `%VAR%` segments already expanded and writes the
//! value back as REG_SZ, so expandable entries lose their variables.

use super::{EnvError, EnvStore, Result};
use std::path::PathBuf;
use std::process::Command;

#[cfg(windows)]
const CANDIDATES: [&str; 2] = ["powershell", "pwsh"];

pub struct PowerShellStore {
    program: PathBuf,
}

impl PowerShellStore {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the shell executable: the configured one if given, otherwise
    /// Windows PowerShell, then PowerShell Core.
    #[cfg(windows)]
    pub fn locate(configured: Option<&str>) -> Result<Self> {
        if let Some(shell) = configured {
            let program = which::which(shell).map_err(|_| EnvError::ShellNotFound)?;
            return Ok(Self::new(program));
        }

        CANDIDATES
            .iter()
            .find_map(|name| which::which(name).ok())
            .map(Self::new)
            .ok_or(EnvError::ShellNotFound)
    }

    #[cfg(not(windows))]
    pub fn locate(_configured: Option<&str>) -> Result<Self> {
        Err(EnvError::UnsupportedPlatform)
    }

    fn run(&self, script: &str) -> Result<String> {
        tracing::debug!(program = %self.program.display(), "running PowerShell");

        let output = Command::new(&self.program)
            .args(["-NoProfile", "-NonInteractive", "-Command", script])
            .output()
            .map_err(|source| EnvError::Spawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EnvError::CommandFailed {
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl EnvStore for PowerShellStore {
    fn read_user_path(&self) -> Result<String> {
        let stdout = self.run(&read_script())?;
        Ok(parse_read_output(&stdout))
    }

    fn write_user_path(&self, value: &str) -> Result<()> {
        self.run(&write_script(value))?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "powershell"
    }
}

/// Single-quoted PowerShell string literal; `'` is escaped by doubling.
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// Value printed by the read script, minus the line terminator
/// `Write-Output` adds. An unset variable prints nothing.
pub fn parse_read_output(stdout: &str) -> String {
    stdout.trim_end_matches(['\r', '\n']).to_string()
}

pub fn read_script() -> String {
    "[Console]::OutputEncoding = [System.Text.Encoding]::UTF8; \
     [Environment]::GetEnvironmentVariable('PATH', 'User')"
        .to_string()
}

pub fn write_script(value: &str) -> String {
    format!(
        "[Environment]::SetEnvironmentVariable('PATH', {}, 'User')",
        quote(value)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_doubles_single_quotes() {
        assert_eq!(quote("C:\\Program Files\\UrBackup\\"), "'C:\\Program Files\\UrBackup\\'");
        assert_eq!(quote("C:\\O'Brien"), "'C:\\O''Brien'");
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn test_write_script_embeds_value() {
        let script = write_script("C:\\A;C:\\B\\");
        assert_eq!(
            script,
            "[Environment]::SetEnvironmentVariable('PATH', 'C:\\A;C:\\B\\', 'User')"
        );
    }

    #[test]
    fn test_read_script_targets_user_scope() {
        let script = read_script();
        assert!(script.contains("GetEnvironmentVariable('PATH', 'User')"));
    }

    #[test]
    fn test_missing_program_is_spawn_error() {
        let store = PowerShellStore::new("/nonexistent/userpath-test-shell");
        match store.read_user_path() {
            Err(err @ EnvError::Spawn { .. }) => {
                // the io cause is left to the source chain
                assert_eq!(
                    err.to_string(),
                    "Failed to launch /nonexistent/userpath-test-shell"
                );
                assert!(std::error::Error::source(&err).is_some());
            }
            other => panic!("expected spawn error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_read_output() {
        assert_eq!(parse_read_output("C:\\A;C:\\B\\\r\n"), "C:\\A;C:\\B\\");
        assert_eq!(parse_read_output("C:\\A\n"), "C:\\A");
        assert_eq!(parse_read_output(""), "");
        assert_eq!(parse_read_output("\r\n"), "");
        // separators and spaces inside the value are kept
        assert_eq!(parse_read_output(" C:\\A ;\r\n"), " C:\\A ;");
    }

    #[cfg(windows)]
    #[test]
    fn test_locate_unknown_configured_shell() {
        assert!(matches!(
            PowerShellStore::locate(Some("userpath-no-such-shell")),
            Err(EnvError::ShellNotFound)
        ));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_locate_refused_off_windows() {
        assert!(matches!(
            PowerShellStore::locate(Some("pwsh")),
            Err(EnvError::UnsupportedPlatform)
        ));
        assert!(matches!(PowerShellStore::locate(None), Err(EnvError::UnsupportedPlatform)));
    }
}
