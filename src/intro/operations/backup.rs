//! Timestamped backups of the original intros

use crate::intro::types::{BackupOutcome, IntroFile};
use std::fs;

/// Rename every intro to its backup path
///
/// A failed rename is recorded and the remaining files are still attempted.
pub fn backup_intros(files: &[IntroFile]) -> Vec<BackupOutcome> {
    files
        .iter()
        .map(|file| {
            let result = fs::rename(&file.source, &file.backup);
            match &result {
                Ok(()) => log::info!(
                    "[intro] {} -> {}",
                    file.source.display(),
                    file.backup.display()
                ),
                Err(e) => log::warn!("[intro] failed to back up {}: {}", file.source.display(), e),
            }
            BackupOutcome {
                file: file.clone(),
                result,
            }
        })
        .collect()
}
