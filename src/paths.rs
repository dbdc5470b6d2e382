use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Registry key Steam writes its install location under (both HKCU and HKLM)
#[cfg(windows)]
pub const STEAM_REG_KEY: &str = r"SOFTWARE\Valve\Steam";
#[cfg(windows)]
pub const STEAM_REG_VALUE: &str = "SteamPath";

/// 32-bit view used by the machine-wide Steam installer
#[cfg(windows)]
pub const STEAM_REG_KEY_WOW64: &str = r"SOFTWARE\WOW6432Node\Valve\Steam";
#[cfg(windows)]
pub const STEAM_REG_VALUE_WOW64: &str = "InstallPath";

pub const INTRO_FILES: [&str; 2] = [
    "DRG_LogoIntro_720p30.mp4",
    "DRG_LogoIntro_Lower_Sound_720p30.mp4",
];

/// Companion listing relative to the Steam root
pub static PATH_LIBRARY_FOLDERS: LazyLock<PathBuf> =
    LazyLock::new(|| Path::new("steamapps").join("libraryfolders.vdf"));

/// Intro movie directory relative to a library root
pub static PATH_MOVIES: LazyLock<PathBuf> = LazyLock::new(|| {
    ["steamapps", "common", "Deep Rock Galactic", "FSD", "Content", "Movies"]
        .iter()
        .collect()
});
