//! Steam root lookup
//!
//! Windows keeps the Steam install location in the registry, first under the
//! current user and then machine-wide. Elsewhere steamlocate finds the
//! directory and there is no machine scope.

use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryScope {
    CurrentUser,
    LocalMachine,
}

impl RegistryScope {
    pub fn name(&self) -> &'static str {
        match self {
            RegistryScope::CurrentUser => "current user",
            RegistryScope::LocalMachine => "local machine",
        }
    }
}

/// Find the Steam root, preferring an explicit override
pub fn locate_steam_root(override_root: Option<&Path>) -> Result<PathBuf, Box<dyn Error>> {
    match override_root {
        Some(root) => Ok(root.to_path_buf()),
        None => locate_with(read_steam_root),
    }
}

/// Try the current-user scope, then the machine scope
///
/// Fails only when both lookups fail, naming both errors.
pub fn locate_with<F>(read: F) -> Result<PathBuf, Box<dyn Error>>
where
    F: Fn(RegistryScope) -> Result<PathBuf, Box<dyn Error>>,
{
    let user_err = match read(RegistryScope::CurrentUser) {
        Ok(path) => return Ok(path),
        Err(e) => e,
    };
    log::info!(
        "[steam] {} lookup failed ({}), trying {}",
        RegistryScope::CurrentUser.name(),
        user_err,
        RegistryScope::LocalMachine.name()
    );

    read(RegistryScope::LocalMachine).map_err(|machine_err| {
        format!(
            "error while getting steam path: {}: {}; {}: {}",
            RegistryScope::CurrentUser.name(),
            user_err,
            RegistryScope::LocalMachine.name(),
            machine_err
        )
        .into()
    })
}

#[cfg(windows)]
pub fn read_steam_root(scope: RegistryScope) -> Result<PathBuf, Box<dyn Error>> {
    use crate::paths::{STEAM_REG_KEY, STEAM_REG_KEY_WOW64, STEAM_REG_VALUE, STEAM_REG_VALUE_WOW64};
    use winreg::RegKey;
    use winreg::enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE};

    let (root, lookups): (_, &[(&str, &str)]) = match scope {
        RegistryScope::CurrentUser => (
            RegKey::predef(HKEY_CURRENT_USER),
            &[(STEAM_REG_KEY, STEAM_REG_VALUE)],
        ),
        RegistryScope::LocalMachine => (
            RegKey::predef(HKEY_LOCAL_MACHINE),
            &[
                (STEAM_REG_KEY, STEAM_REG_VALUE),
                (STEAM_REG_KEY_WOW64, STEAM_REG_VALUE_WOW64),
            ],
        ),
    };

    let mut last_err: Box<dyn Error> = "no registry keys to read".into();
    for (subkey, value) in lookups {
        let key = match root.open_subkey(subkey) {
            Ok(key) => key,
            Err(e) => {
                last_err = format!("error open key {}: {}", subkey, e).into();
                continue;
            }
        };
        match key.get_value::<String, _>(value) {
            Ok(path) => return Ok(PathBuf::from(path)),
            Err(e) => last_err = format!("error get string value {}: {}", value, e).into(),
        }
    }

    Err(last_err)
}

#[cfg(not(windows))]
pub fn read_steam_root(scope: RegistryScope) -> Result<PathBuf, Box<dyn Error>> {
    match scope {
        RegistryScope::CurrentUser => {
            let steam_dir = steamlocate::SteamDir::locate()?;
            Ok(steam_dir.path().to_path_buf())
        }
        RegistryScope::LocalMachine => {
            Err("no machine-wide Steam registry on this platform".into())
        }
    }
}
