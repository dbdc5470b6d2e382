//! Pure functions for the intro module
//!
//! These functions have no side effects and are deterministic.

use super::types::IntroFile;
use crate::paths::INTRO_FILES;
use std::path::Path;

/// Backup name for an intro: the original name behind a unix timestamp
pub fn backup_file_name(name: &str, timestamp: u64) -> String {
    format!("{}_{}", timestamp, name)
}

/// Both intros in `dir`, regular first, sharing one backup timestamp
pub fn intro_files(dir: &Path, timestamp: u64) -> Vec<IntroFile> {
    INTRO_FILES
        .iter()
        .map(|name| IntroFile {
            source: dir.join(name),
            backup: dir.join(backup_file_name(name, timestamp)),
        })
        .collect()
}

/// Trim pasted input; empty input means no URL was given
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_backup_file_name() {
        assert_eq!(
            backup_file_name("DRG_LogoIntro_720p30.mp4", 1700000000),
            "1700000000_DRG_LogoIntro_720p30.mp4"
        );
    }

    #[test]
    fn test_intro_files_order_and_shared_timestamp() {
        let dir = PathBuf::from("Movies");
        let files = intro_files(&dir, 42);
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].source, dir.join("DRG_LogoIntro_720p30.mp4"));
        assert_eq!(files[0].backup, dir.join("42_DRG_LogoIntro_720p30.mp4"));
        assert_eq!(files[1].source, dir.join("DRG_LogoIntro_Lower_Sound_720p30.mp4"));
        assert_eq!(
            files[1].backup,
            dir.join("42_DRG_LogoIntro_Lower_Sound_720p30.mp4")
        );
    }

    #[test]
    fn test_normalize_url() {
        assert_eq!(
            normalize_url("  https://cdn.example/intro.mp4 \n"),
            Some("https://cdn.example/intro.mp4".to_string())
        );
        assert_eq!(normalize_url(""), None);
        assert_eq!(normalize_url(" \t"), None);
    }
}
