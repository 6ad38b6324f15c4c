//! The company → feed URL table shared by both stages.
//!
//! The file is UTF-8 CSV with the header `Company,RSS Feed URL`. The query
//! builder writes it and the review renderer reads it back; rows are matched
//! by header name, not position.

use crate::error::ReviewError;
use crate::models::FeedEntry;
use crate::utils::write_atomically;
use std::path::Path;
use tracing::{info, instrument};

pub const TABLE_HEADER: [&str; 2] = ["Company", "RSS Feed URL"];

/// Serialize the feed table, header first, even when there are no rows.
pub fn render_feed_table(entries: &[FeedEntry]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(TABLE_HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Write the feed table, replacing any existing file.
///
/// The table is built in memory and swapped in with
/// [`write_atomically`], so a failed write leaves the previous table as it was.
///
/// # Returns
///
/// The number of data rows written.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_feed_table(path: &Path, entries: &[FeedEntry]) -> Result<usize, ReviewError> {
    let bytes = render_feed_table(entries).map_err(|source| ReviewError::TableWrite {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomically(path, &bytes).await?;

    info!(rows = entries.len(), "Wrote feed table");
    Ok(entries.len())
}

/// Read the feed table written by [`write_feed_table`].
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn read_feed_table(path: &Path) -> Result<Vec<FeedEntry>, ReviewError> {
    let read_err = |source| ReviewError::TableRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(read_err)?;
    let entries = reader
        .deserialize::<FeedEntry>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_err)?;

    info!(rows = entries.len(), "Read feed table");
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn entry(company: &str, url: &str) -> FeedEntry {
        FeedEntry {
            company: company.to_string(),
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_write_feed_table_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rss_feeds.csv");
        let rows = write_feed_table(
            &path,
            &[
                entry("Barco", "https://news.google.com/rss/search?q=%22Barco%22"),
                entry("Coca Cola", "https://news.google.com/rss/search?q=%22Coca+Cola%22"),
            ],
        )
        .await
        .unwrap();
        assert_eq!(rows, 2);

        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "Company,RSS Feed URL");
        assert_eq!(
            lines[1],
            "Barco,https://news.google.com/rss/search?q=%22Barco%22"
        );
        assert_eq!(lines.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_table_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        assert_eq!(write_feed_table(&path, &[]).await.unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "Company,RSS Feed URL\n");
        assert!(read_feed_table(&path).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_back_preserves_order_and_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rss_feeds.csv");
        let entries = vec![
            entry("Acme, Inc.", "http://example/feed?a=1"),
            entry("Acme, Inc.", "http://example/feed?a=2"),
            entry("Globex", "http://example/other"),
        ];
        write_feed_table(&path, &entries).await.unwrap();
        assert_eq!(read_feed_table(&path).unwrap(), entries);
    }

    #[tokio::test]
    async fn test_failed_table_write_keeps_previous_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rss_feeds.csv");
        let previous = vec![entry("Barco", "http://example/barco")];
        write_feed_table(&path, &previous).await.unwrap();
        let before = fs::read_to_string(&path).unwrap();

        // a directory squatting on the temporary name makes the write fail
        fs::create_dir(dir.path().join("rss_feeds.csv.tmp")).unwrap();
        let err = write_feed_table(&path, &[entry("Etex", "http://example/etex")])
            .await
            .unwrap_err();
        assert!(matches!(err, ReviewError::Io { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
        assert_eq!(read_feed_table(&path).unwrap(), previous);
    }

    #[test]
    fn test_render_feed_table_in_memory() {
        let bytes = render_feed_table(&[entry("Acme", "http://example/feed")]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Company,RSS Feed URL\nAcme,http://example/feed\n"
        );
    }

    #[test]
    fn test_read_matches_columns_by_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swapped.csv");
        fs::write(&path, "RSS Feed URL,Company\nhttp://example/feed,Acme\n").unwrap();
        assert_eq!(
            read_feed_table(&path).unwrap(),
            vec![entry("Acme", "http://example/feed")]
        );
    }

    #[test]
    fn test_read_missing_table_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_feed_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, ReviewError::TableRead { .. }));
    }

    #[test]
    fn test_read_table_without_url_column_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "Company\nAcme\n").unwrap();
        assert!(matches!(
            read_feed_table(&path).unwrap_err(),
            ReviewError::TableRead { .. }
        ));
    }
}
