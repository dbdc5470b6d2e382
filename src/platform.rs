//! Platform abstraction - WHERE the game is installed
//!
//! - Steam: registry lookup plus the libraryfolders.vdf listing
//! - Manual: direct movie directory specification

use std::error::Error;
use std::path::PathBuf;

/// Resolves the directory holding the intro movies
pub trait Platform {
    /// Platform name for identification
    fn name(&self) -> &str;

    /// Get the game's movie directory path
    fn movies_dir(&self) -> Result<PathBuf, Box<dyn Error>>;
}

/// How a run should locate the game
#[derive(Clone, Debug, PartialEq)]
pub enum PlatformConfig {
    Steam {
        steam_root: Option<PathBuf>,
        format: ListingFormat,
    },
    Manual {
        path_movies: PathBuf,
    },
}

impl PlatformConfig {
    /// Convert platform config enum to a trait object
    pub fn as_platform(&self) -> Box<dyn Platform> {
        match self {
            PlatformConfig::Steam { steam_root, format } => {
                Box::new(SteamPlatform::new(steam_root.clone(), *format))
            }
            PlatformConfig::Manual { path_movies } => {
                Box::new(ManualPlatform::new(path_movies.clone()))
            }
        }
    }
}

mod manual;
mod steam;

pub use manual::ManualPlatform;
pub use steam::{ListingFormat, SteamPlatform};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_platform_picks_implementation() {
        let steam = PlatformConfig::Steam {
            steam_root: None,
            format: ListingFormat::Structured,
        };
        assert_eq!(steam.as_platform().name(), "steam");

        let dir = tempfile::tempdir().unwrap();
        let manual = PlatformConfig::Manual {
            path_movies: dir.path().to_path_buf(),
        };
        let platform = manual.as_platform();
        assert_eq!(platform.name(), "manual");
        assert_eq!(platform.movies_dir().unwrap(), dir.path());
    }

    #[test]
    fn test_manual_platform_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let platform = ManualPlatform::new(dir.path().join("nope"));
        assert!(platform.movies_dir().is_err());
    }
}
