//! Manual path platform (no store lookup)

use super::Platform;
use std::error::Error;
use std::path::PathBuf;

pub struct ManualPlatform {
    pub path: PathBuf,
}

impl ManualPlatform {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Platform for ManualPlatform {
    fn name(&self) -> &str {
        "manual"
    }

    fn movies_dir(&self) -> Result<PathBuf, Box<dyn Error>> {
        if !self.path.is_dir() {
            return Err(format!("movie directory does not exist: {}", self.path.display()).into());
        }
        Ok(self.path.clone())
    }
}
