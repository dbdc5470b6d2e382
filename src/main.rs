mod cli;
mod console;
mod intro;
mod paths;
mod platform;

use crate::cli::Settings;
use crate::console::{Console, StdConsole};
use crate::intro::{HttpDownloader, swap_intros};
use clap::Parser;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    let settings = Settings::parse();

    env_logger::Builder::new()
        .filter_level(settings.log_level())
        .parse_default_env()
        .init();

    let mut console = StdConsole::terminal().with_pause(!settings.no_pause);

    let downloader = match HttpDownloader::new() {
        Ok(d) => d,
        Err(e) => {
            console.say(&format!("failed to set up http client {}", e));
            console.pause();
            return;
        }
    };

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let platform = settings.platform_config().as_platform();
    log::info!("[drg-intro-swap] using {} platform", platform.name());

    let report = swap_intros(
        platform.as_ref(),
        &downloader,
        &mut console,
        settings.url.as_deref(),
        timestamp,
    );
    log::debug!("[drg-intro-swap] {:?}", report);
}
