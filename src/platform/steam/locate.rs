//! Deep Rock Galactic path resolution
//!
//! Probes each Steam library root for the game's movie directory.

use crate::paths::PATH_MOVIES;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Return the first library whose movie directory exists on disk
pub fn find_movies_dir<P: AsRef<Path>>(libraries: &[P]) -> Result<PathBuf, Box<dyn Error>> {
    let mut last_probed = None;

    for library in libraries {
        let path = library.as_ref().join(&*PATH_MOVIES);
        log::debug!("[steam] probing {}", path.display());
        if path.exists() {
            return Ok(path);
        }
        last_probed = Some(path);
    }

    match last_probed {
        Some(path) => Err(format!("drg path does not exist: {}", path.display()).into()),
        None => Err("drg path does not exist: no Steam libraries listed".into()),
    }
}
