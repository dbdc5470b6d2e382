//! Intro swap pipeline
//!
//! Locate the movie directory, back up both intros, ask for a video link and
//! download it over each intro. Failures are reported on the console and the
//! run moves on to the next step; only a missing game directory ends it early.

use crate::console::Console;
use crate::intro::operations::{Downloader, backup_intros};
use crate::intro::pure::{intro_files, normalize_url};
use crate::intro::types::{DownloadOutcome, SwapReport};
use crate::platform::Platform;

pub const PROMPT_URL: &str = "paste a fetchable video link to be downloaded for new DRG intro: ";

/// Run the whole swap and report what happened at each step
pub fn swap_intros(
    platform: &dyn Platform,
    downloader: &dyn Downloader,
    console: &mut dyn Console,
    preset_url: Option<&str>,
    timestamp: u64,
) -> SwapReport {
    let mut report = SwapReport::default();

    if platform.name() == "steam" {
        console.say("getting steam path");
    }
    console.say("getting drg path");
    let movies_dir = match platform.movies_dir() {
        Ok(dir) => dir,
        Err(e) => {
            console.say(&format!("error while getting drg path: {}", e));
            console.pause();
            return report;
        }
    };
    log::info!("[intro] movie directory: {}", movies_dir.display());

    let files = intro_files(&movies_dir, timestamp);
    report.movies_dir = Some(movies_dir);

    console.say("renaming old intro");
    report.backups = backup_intros(&files);
    for outcome in &report.backups {
        if let Err(e) = &outcome.result {
            console.say(&format!(
                "failed to rename {}: {}",
                outcome.file.source.display(),
                e
            ));
            console.pause();
        }
    }

    report.url = match preset_url.and_then(normalize_url) {
        Some(url) => Some(url),
        None => prompt_url(console),
    };
    let Some(url) = report.url.clone() else {
        console.say("no video link given, skipping download");
        console.pause();
        return finish(console, report);
    };

    console.say("downloading new intro");
    for file in &files {
        let result = downloader.download(&url, &file.source);
        if let Err(e) = &result {
            console.say(&format!("failed to download media {}", e));
            console.pause();
        }
        report.downloads.push(DownloadOutcome {
            dest: file.source.clone(),
            result,
        });
    }

    finish(console, report)
}

fn prompt_url(console: &mut dyn Console) -> Option<String> {
    match console.prompt(PROMPT_URL) {
        Ok(Some(line)) => normalize_url(&line),
        Ok(None) => None,
        Err(e) => {
            console.say(&e.to_string());
            None
        }
    }
}

fn finish(console: &mut dyn Console, report: SwapReport) -> SwapReport {
    if report.succeeded() {
        console.say("success");
    } else {
        console.say(&format!(
            "finished with {} failed rename(s) and {} failed download(s)",
            report.failed_backups(),
            report.failed_downloads()
        ));
        for outcome in report.downloads.iter().filter(|d| d.result.is_err()) {
            console.say(&format!("  not replaced: {}", outcome.dest.display()));
        }
    }
    console.pause();
    report
}
