//! Error types for the press review pipeline.
//!
//! Errors fall into two families:
//!
//! - [`ReviewError`]: fatal. Configuration problems (unknown country, an
//!   unreadable table) and output-write failures abort the run.
//! - [`FeedError`]: local to a single feed fetch. These never leave the
//!   fetch boundary; the caller logs them and carries on with zero articles.

use std::path::PathBuf;

/// Fatal errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    /// A roster row named a location that is neither Belgium nor Luxembourg.
    #[error("unknown country {value:?} (expected \"Belgium\" or \"Luxembourg\")")]
    UnknownCountry { value: String },

    /// A roster row could not be accepted; wraps the underlying cause with its position.
    #[error("invalid roster row {row}: {source}")]
    RosterRow {
        row: usize,
        #[source]
        source: Box<ReviewError>,
    },

    /// The input table could not be opened or parsed.
    #[error("failed to read table {path}: {source}")]
    TableRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The output table could not be written.
    #[error("failed to write table {path}: {source}")]
    TableWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors from fetching or parsing a single feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("unexpected status code: {0}")]
    HttpStatus(u16),
    #[error("feed parse error: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),
}
