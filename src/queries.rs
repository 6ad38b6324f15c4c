//! Google News RSS query construction.
//!
//! Each company becomes one search URL of the form
//!
//! ```text
//! https://news.google.com/rss/search?q=%22<name>%22+<keywords>+<geo filter><locale>
//! ```
//!
//! where the keyword filter is a fixed OR over business topics and the geo
//! filter and locale suffix depend on the company's [`Country`].

use crate::models::{CompanyRecord, Country, FeedEntry};
use tracing::{debug, info, instrument};
use url::form_urlencoded;

pub const SEARCH_ENDPOINT: &str = "https://news.google.com/rss/search?q=";

/// Business topics OR'ed into every query, already plus-encoded.
pub const KEYWORDS: &str = "(innovation+OR+HR+OR+production+OR+business+OR+strategy+OR+leadership+\
OR+sustainability+OR+ESG+OR+digital+transformation+OR+AI+OR+mergers+OR+\
acquisitions+OR+finance+OR+operations+OR+supply+chain+OR+management)";

const BELGIUM_FILTER: &str = "(%22Belgium%22+OR+%22Brussels%22)";
const BELGIUM_REGION: &str = "&hl=en&gl=BE&ceid=BE:en";
const LUXEMBOURG_FILTER: &str = "(%22Luxembourg%22+OR+%22Betzdorf%22)";
const LUXEMBOURG_REGION: &str = "&hl=en&gl=LU&ceid=LU:en";

/// Geo filter fragment and locale suffix for a country.
pub fn geo_filter_and_region(country: Country) -> (&'static str, &'static str) {
    match country {
        Country::Belgium => (BELGIUM_FILTER, BELGIUM_REGION),
        Country::Luxembourg => (LUXEMBOURG_FILTER, LUXEMBOURG_REGION),
    }
}

/// Plus-encode a company name for use inside the `q` parameter.
///
/// Spaces become `+`; every other reserved byte is percent-encoded.
pub fn encode_company_name(name: &str) -> String {
    form_urlencoded::byte_serialize(name.as_bytes()).collect()
}

/// Build the search URL for one company.
pub fn build_company_query(record: &CompanyRecord) -> String {
    let (geo_filter, region) = geo_filter_and_region(record.country);
    format!(
        "{SEARCH_ENDPOINT}%22{}%22+{KEYWORDS}+{geo_filter}{region}",
        encode_company_name(&record.name)
    )
}

/// Build one feed table row per record, preserving input order.
#[instrument(level = "info", skip_all, fields(companies = records.len()))]
pub fn build_feed_entries(records: &[CompanyRecord]) -> Vec<FeedEntry> {
    let entries: Vec<FeedEntry> = records
        .iter()
        .map(|record| {
            let url = build_company_query(record);
            debug!(company = %record.name, country = %record.country, %url, "Built feed query");
            FeedEntry {
                company: record.name.clone(),
                url,
            }
        })
        .collect();

    info!(count = entries.len(), "Built feed queries");
    entries
}
