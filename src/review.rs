//! Review assembly: fetch → filter → section, one company at a time.

use crate::feeds::filter::select_articles;
use crate::feeds::source::{FeedSource, fetch_items};
use crate::models::{CompanySection, FeedEntry};
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument};

/// Build one section per table row, in table order.
///
/// Companies are processed sequentially. A feed that cannot be fetched
/// yields a section with no articles.
#[instrument(level = "info", skip_all, fields(companies = entries.len(), limit = limit))]
pub async fn collect_sections<S: FeedSource>(
    source: &S,
    entries: &[FeedEntry],
    limit: usize,
) -> Vec<CompanySection> {
    let sections: Vec<CompanySection> = stream::iter(entries)
        .then(|entry| async move {
            let items = fetch_items(source, &entry.url).await;
            let fetched = items.len();
            let articles = select_articles(items, limit);
            for article in &articles {
                debug!(company = %entry.company, title = %truncate_for_log(&article.title, 80), "Kept article");
            }
            info!(
                company = %entry.company,
                fetched,
                kept = articles.len(),
                "Filtered feed"
            );
            CompanySection {
                company: entry.company.clone(),
                articles,
            }
        })
        .collect()
        .await;

    let empty = sections.iter().filter(|s| s.articles.is_empty()).count();
    info!(sections = sections.len(), empty, "Collected review sections");
    sections
}
