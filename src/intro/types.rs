//! Intro module type definitions

use std::io;
use std::path::PathBuf;

/// One intro video and where its backup goes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntroFile {
    pub source: PathBuf,
    pub backup: PathBuf,
}

/// Result of renaming one intro to its backup
#[derive(Debug)]
pub struct BackupOutcome {
    pub file: IntroFile,
    pub result: io::Result<()>,
}

#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("bad status: {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to write body: {0}")]
    Copy(#[source] io::Error),
}

/// Result of downloading the replacement to one destination
#[derive(Debug)]
pub struct DownloadOutcome {
    pub dest: PathBuf,
    /// Bytes written on success
    pub result: Result<u64, TransferError>,
}

/// Everything a swap run did, step by step
#[derive(Debug, Default)]
pub struct SwapReport {
    /// `None` when the game could not be located
    pub movies_dir: Option<PathBuf>,
    pub backups: Vec<BackupOutcome>,
    pub url: Option<String>,
    pub downloads: Vec<DownloadOutcome>,
}

impl SwapReport {
    pub fn failed_backups(&self) -> usize {
        self.backups.iter().filter(|b| b.result.is_err()).count()
    }

    pub fn failed_downloads(&self) -> usize {
        self.downloads.iter().filter(|d| d.result.is_err()).count()
    }

    /// True when the game was found, both intros were backed up and both
    /// replacements were downloaded
    pub fn succeeded(&self) -> bool {
        self.movies_dir.is_some()
            && self.url.is_some()
            && !self.backups.is_empty()
            && !self.downloads.is_empty()
            && self.failed_backups() == 0
            && self.failed_downloads() == 0
    }
}
