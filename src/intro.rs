//! Intro swap - back up the DRG intro videos and download replacements
//!
//! ## Module Structure
//! - `types.rs`: IntroFile, outcomes, TransferError, SwapReport
//! - `pure.rs`: Pure functions (backup names, URL input)
//! - `operations/`: Atomic side effects (rename, download)
//! - `pipelines/`: High-level orchestration (swap_intros)

mod operations;
mod pipelines;
mod pure;
mod types;

pub use operations::HttpDownloader;
pub use pipelines::swap_intros;
