//! Replacement video download

use crate::intro::types::TransferError;
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Fetches a URL into a local file
pub trait Downloader {
    /// Returns the number of bytes written to `dest`
    fn download(&self, url: &str, dest: &Path) -> Result<u64, TransferError>;
}

/// Blocking HTTP GET straight into the destination file
pub struct HttpDownloader {
    client: reqwest::blocking::Client,
}

impl HttpDownloader {
    /// Client with no overall timeout; large videos may take a while
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Downloader for HttpDownloader {
    /// The destination is created (or truncated) before the request is sent,
    /// so a failed request leaves an empty file behind.
    fn download(&self, url: &str, dest: &Path) -> Result<u64, TransferError> {
        let mut out = File::create(dest).map_err(|source| TransferError::Create {
            path: dest.to_path_buf(),
            source,
        })?;

        log::info!("[intro] GET {}", url);
        let mut response = self.client.get(url).send()?;

        if !response.status().is_success() {
            return Err(TransferError::Status(response.status()));
        }

        let written = io::copy(&mut response, &mut out).map_err(TransferError::Copy)?;
        log::info!("[intro] wrote {} bytes to {}", written, dest.display());
        Ok(written)
    }
}
