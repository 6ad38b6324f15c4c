//! Geographic relevance filter.
//!
//! Google News honours the geo filter in the query only loosely, so items are
//! checked again locally: an item is relevant when its title or summary
//! mentions one of [`GEO_KEYWORDS`].

use crate::models::{Article, FeedItem};

/// Case-sensitive markers of Belgian or Luxembourg coverage.
pub const GEO_KEYWORDS: &[&str] = &["Belgium", "Brussels", "Luxembourg", "Betzdorf"];

/// Default number of articles kept per feed.
pub const DEFAULT_ARTICLE_LIMIT: usize = 5;

/// Whether `title + summary` contains at least one geographic keyword.
pub fn is_relevant(item: &FeedItem) -> bool {
    let text = format!("{}{}", item.title, item.summary.as_deref().unwrap_or(""));
    GEO_KEYWORDS.iter().any(|keyword| text.contains(keyword))
}

/// Keep the first `limit` relevant items, in feed order.
///
/// Items after the `limit`-th match are never inspected.
pub fn select_articles<I>(items: I, limit: usize) -> Vec<Article>
where
    I: IntoIterator<Item = FeedItem>,
{
    items
        .into_iter()
        .filter(is_relevant)
        .take(limit)
        .map(Article::from)
        .collect()
}
