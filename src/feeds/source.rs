//! Feed retrieval.
//!
//! [`FeedSource`] is the seam between the renderer and the network. The
//! production implementation, [`HttpFeedSource`], downloads the feed with
//! `reqwest` and parses RSS/Atom with `feed-rs`. Tests substitute an
//! in-memory source.
//!
//! Fetching is best-effort: [`fetch_items`] turns every [`FeedError`] into
//! an empty list so a dead feed never aborts the run.

use crate::error::FeedError;
use crate::models::FeedItem;
use feed_rs::model::Entry;
use tracing::{debug, info, instrument, warn};

/// Something that can turn a feed URL into a list of entries.
pub trait FeedSource {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>, FeedError>;
}

/// Fetch feeds over HTTP(S).
#[derive(Debug, Clone, Default)]
pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl FeedSource for HttpFeedSource {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<Vec<FeedItem>, FeedError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus(status.as_u16()));
        }
        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Downloaded feed");
        parse_feed(&body)
    }
}

/// Parse an RSS or Atom payload into feed items, in document order.
pub fn parse_feed(raw: &[u8]) -> Result<Vec<FeedItem>, FeedError> {
    let feed = feed_rs::parser::parse(raw)?;
    Ok(feed.entries.iter().map(item_from_entry).collect())
}

fn item_from_entry(entry: &Entry) -> FeedItem {
    FeedItem {
        title: entry
            .title
            .as_ref()
            .map(|text| text.content.clone())
            .unwrap_or_default(),
        summary: entry.summary.as_ref().map(|text| text.content.clone()),
        link: entry
            .links
            .first()
            .map(|link| link.href.clone())
            .unwrap_or_default(),
    }
}

/// Fetch a feed, degrading any failure to zero items.
#[instrument(level = "info", skip(source))]
pub async fn fetch_items<S: FeedSource>(source: &S, url: &str) -> Vec<FeedItem> {
    match source.fetch(url).await {
        Ok(items) => {
            info!(count = items.len(), "Fetched feed");
            items
        }
        Err(e) => {
            warn!(error = %e, "Feed fetch failed; treating as empty");
            Vec::new()
        }
    }
}
