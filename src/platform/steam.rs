//! Steam platform implementation
//!
//! Resolves the Deep Rock Galactic movie directory from the Steam root,
//! the library listing next to it, and a probe of each library.

use super::Platform;
use std::error::Error;
use std::path::PathBuf;

mod library;
mod locate;
mod registry;

pub use library::ListingFormat;
use library::library_paths;
use locate::find_movies_dir;
use registry::locate_steam_root;

/// Steam platform implementation
pub struct SteamPlatform {
    /// Skips the registry lookup when set
    pub steam_root: Option<PathBuf>,
    pub format: ListingFormat,
}

impl SteamPlatform {
    pub fn new(steam_root: Option<PathBuf>, format: ListingFormat) -> Self {
        Self { steam_root, format }
    }
}

impl Platform for SteamPlatform {
    fn name(&self) -> &str {
        "steam"
    }

    fn movies_dir(&self) -> Result<PathBuf, Box<dyn Error>> {
        let steam_root = locate_steam_root(self.steam_root.as_deref())?;
        log::info!("[steam] Steam root: {}", steam_root.display());

        let libraries = library_paths(&steam_root, self.format)?;
        log::info!("[steam] {} library candidate(s)", libraries.len());

        find_movies_dir(&libraries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::{PATH_LIBRARY_FOLDERS, PATH_MOVIES};
    use std::fs;

    #[test]
    fn test_movies_dir_from_steam_root_override() {
        let steam = tempfile::tempdir().unwrap();
        let library = tempfile::tempdir().unwrap();

        let listing = steam.path().join(&*PATH_LIBRARY_FOLDERS);
        fs::create_dir_all(listing.parent().unwrap()).unwrap();
        fs::write(
            &listing,
            format!(
                "\"libraryfolders\"\n{{\n\t\"0\"\n\t{{\n\t\t\"path\"\t\t\"{}\"\n\t}}\n\t\"1\"\n\t{{\n\t\t\"path\"\t\t\"{}\"\n\t}}\n}}\n",
                steam.path().display(),
                library.path().display()
            ),
        )
        .unwrap();

        let movies = library.path().join(&*PATH_MOVIES);
        fs::create_dir_all(&movies).unwrap();

        let platform = SteamPlatform::new(Some(steam.path().to_path_buf()), ListingFormat::Structured);
        assert_eq!(platform.movies_dir().unwrap(), movies);
    }

    #[test]
    fn test_movies_dir_missing_listing_fails() {
        let steam = tempfile::tempdir().unwrap();
        let platform = SteamPlatform::new(Some(steam.path().to_path_buf()), ListingFormat::Structured);
        assert!(platform.movies_dir().is_err());
    }
}
