//! Native backend: `HKEY_CURRENT_USER\Environment`, value `Path`.

use super::{EnvError, EnvStore, Result};

#[cfg(windows)]
const ENVIRONMENT_KEY: &str = "Environment";
#[cfg(windows)]
const PATH_VALUE: &str = "Path";

pub struct RegistryStore {
    #[cfg(windows)]
    key: winreg::RegKey,
    #[cfg_attr(not(windows), allow(dead_code))]
    broadcast: bool,
}

impl RegistryStore {
    /// Open the per-user environment key for reading and writing.
    #[cfg(windows)]
    pub fn open(broadcast: bool) -> Result<Self> {
        use winreg::enums::*;
        use winreg::RegKey;

        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = hkcu.open_subkey_with_flags(ENVIRONMENT_KEY, KEY_READ | KEY_WRITE)?;
        Ok(Self { key, broadcast })
    }

    #[cfg(not(windows))]
    pub fn open(_broadcast: bool) -> Result<Self> {
        Err(EnvError::UnsupportedPlatform)
    }

    /// Tell running programs (Explorer in particular) that the environment
    /// changed, so newly launched processes pick up the new PATH.
    #[cfg(windows)]
    fn broadcast_change(&self) {
        use winapi::shared::minwindef::LPARAM;
        use winapi::um::winuser::{
            SendMessageTimeoutA, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_SETTINGCHANGE,
        };

        let area = b"Environment\0";
        let mut result = 0;
        let sent = unsafe {
            SendMessageTimeoutA(
                HWND_BROADCAST,
                WM_SETTINGCHANGE,
                0,
                area.as_ptr() as LPARAM,
                SMTO_ABORTIFHUNG,
                5000,
                &mut result,
            )
        };
        if sent == 0 {
            tracing::warn!("WM_SETTINGCHANGE broadcast did not complete");
        }
    }
}

/// Value type for the rewritten `Path`: REG_SZ stays REG_SZ, anything else
/// (or a missing value) becomes REG_EXPAND_SZ so `%VAR%` segments still expand.
#[cfg(windows)]
fn write_type(existing: Option<&winreg::enums::RegType>) -> winreg::enums::RegType {
    use winreg::enums::RegType;

    match existing {
        Some(RegType::REG_SZ) => RegType::REG_SZ,
        _ => RegType::REG_EXPAND_SZ,
    }
}

impl EnvStore for RegistryStore {
    #[cfg(windows)]
    fn read_user_path(&self) -> Result<String> {
        use winreg::types::FromRegValue;

        match self.key.get_raw_value(PATH_VALUE) {
            Ok(raw) => Ok(String::from_reg_value(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("user Path value is not set");
                Ok(String::new())
            }
            Err(e) => Err(EnvError::Registry(e)),
        }
    }

    #[cfg(not(windows))]
    fn read_user_path(&self) -> Result<String> {
        Err(EnvError::UnsupportedPlatform)
    }

    #[cfg(windows)]
    fn write_user_path(&self, value: &str) -> Result<()> {
        use winreg::types::ToRegValue;

        let existing = match self.key.get_raw_value(PATH_VALUE) {
            Ok(raw) => Some(raw.vtype),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(EnvError::Registry(e)),
        };
        let vtype = write_type(existing.as_ref());

        tracing::debug!(?vtype, "writing user Path value");
        let mut raw = value.to_reg_value();
        raw.vtype = vtype;
        self.key.set_raw_value(PATH_VALUE, &raw)?;

        if self.broadcast {
            self.broadcast_change();
        }
        Ok(())
    }

    #[cfg(not(windows))]
    fn write_user_path(&self, _value: &str) -> Result<()> {
        Err(EnvError::UnsupportedPlatform)
    }

    fn name(&self) -> &'static str {
        "registry"
    }
}
