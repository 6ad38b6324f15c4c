//! Small helpers for dates, log formatting and output files.

use crate::error::ReviewError;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

/// Format a date the way it appears under the document title, e.g. `16 October 2026`.
pub fn format_review_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Today's date in the document's format.
pub fn review_date() -> String {
    let date = format_review_date(Local::now().date_naive());
    tracing::debug!(%date, "Computed review date");
    date
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut after `max` characters and get `"…(+N bytes)"`
/// appended. Never splits a multi-byte character.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}

/// Ensure the directory that will hold `path` exists and is writable.
///
/// Creates the directory if needed, then writes and removes a scratch file.
/// Run before any feed is fetched so an unwritable target fails fast.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_writable_parent(path: &Path) -> Result<(), ReviewError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let io_err = |source| ReviewError::Io {
        path: dir.clone(),
        source,
    };

    fs::create_dir_all(&dir).await.map_err(io_err)?;
    let scratch = dir.join("..__write_check__");
    fs::write(&scratch, b"").await.map_err(io_err)?;
    let _ = fs::remove_file(&scratch).await;
    info!("Output directory is writable");
    Ok(())
}

/// Replace `path` with `contents` without ever leaving a partial file.
///
/// The data goes to a sibling temporary file first, which is then renamed
/// over the target. Used for both the feed table and the LaTeX document.
#[instrument(level = "info", skip_all, fields(path = %path.display(), bytes = contents.len()))]
pub async fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), ReviewError> {
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);
    let io_err = |source| ReviewError::Io {
        path: path.to_path_buf(),
        source,
    };

    fs::write(&tmp, contents).await.map_err(io_err)?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(io_err(e));
    }
    info!("Replaced file");
    Ok(())
}
