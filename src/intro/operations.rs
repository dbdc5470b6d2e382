//! Operations module (atomic side effects)

pub mod backup;
pub mod download;

pub use backup::backup_intros;
pub use download::{Downloader, HttpDownloader};
