//! Steam library listing (steamapps/libraryfolders.vdf)
//!
//! Every line mentioning `path` names one library root. The listing is
//! written by Steam; we only ever read it.

use crate::paths::PATH_LIBRARY_FOLDERS;
use regex::Regex;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

const PATH_MARKER: &str = "path";

/// Byte column where the value starts in a `\t\t"path"\t\t"..."` line
const FIXED_COLUMN: usize = 10;

static PATH_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"path"\s+"((?:[^"\\]|\\.)*)""#).unwrap());

/// How to pull a library root out of a matched line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ListingFormat {
    /// Parse `"path" "<value>"` pairs and unescape backslashes
    #[default]
    Structured,
    /// Take everything after column 10 and drop the quotes
    FixedColumn,
}

/// Extract library roots from listing content, in file order
pub fn parse_library_paths(content: &str, format: ListingFormat) -> Vec<String> {
    content
        .lines()
        .filter(|line| line.contains(PATH_MARKER))
        .filter_map(|line| match format {
            ListingFormat::FixedColumn => Some(fixed_column_value(line)),
            ListingFormat::Structured => {
                let value = structured_value(line);
                if value.is_none() {
                    log::debug!("[steam] skipping listing line: {}", line.trim());
                }
                value
            }
        })
        .collect()
}

fn fixed_column_value(line: &str) -> String {
    line.get(FIXED_COLUMN..).unwrap_or_default().replace('"', "")
}

fn structured_value(line: &str) -> Option<String> {
    let caps = PATH_ENTRY.captures(line)?;
    Some(unescape(&caps[1]))
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next @ ('\\' | '"')) => out.push(next),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Read the listing under `steam_root` and return its library roots
pub fn library_paths(steam_root: &Path, format: ListingFormat) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let listing = steam_root.join(&*PATH_LIBRARY_FOLDERS);
    let content = std::fs::read_to_string(&listing)
        .map_err(|e| format!("failed to read {}: {}", listing.display(), e))?;

    Ok(parse_library_paths(&content, format)
        .into_iter()
        .map(PathBuf::from)
        .collect())
}
