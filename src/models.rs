//! Data models shared by the query builder and the review renderer.
//!
//! - [`Country`] / [`CompanyRecord`]: the roster of companies to watch
//! - [`FeedEntry`]: one row of the company → feed URL table
//! - [`FeedItem`]: a raw entry as returned by the feed source
//! - [`Article`]: a relevant item kept for the document
//! - [`CompanySection`]: one company's articles, ready to render
//!
//! Everything here is created once, read once and discarded.

use crate::error::ReviewError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Countries the press review covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Country {
    Belgium,
    Luxembourg,
}

impl Country {
    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Belgium => "Belgium",
            Country::Luxembourg => "Luxembourg",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Country {
    type Err = ReviewError;

    /// Parse a roster location. Anything other than the two known names is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Belgium" => Ok(Country::Belgium),
            "Luxembourg" => Ok(Country::Luxembourg),
            other => Err(ReviewError::UnknownCountry {
                value: other.to_string(),
            }),
        }
    }
}

/// A company to search news for, and the country whose press we care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub name: String,
    pub country: Country,
}

impl CompanyRecord {
    pub fn new(name: impl Into<String>, country: Country) -> Self {
        Self {
            name: name.into(),
            country,
        }
    }
}

/// One row of the feed table: `Company,RSS Feed URL`.
///
/// Company names are not required to be unique; duplicates become
/// duplicate sections in the rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FeedEntry {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "RSS Feed URL")]
    pub url: String,
}

/// An entry as exposed by the feed source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub summary: Option<String>,
    pub link: String,
}

/// A relevant article selected for the press review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    pub link: String,
}

/// One company's part of the press review: its name and the articles kept
/// for it, possibly none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanySection {
    pub company: String,
    pub articles: Vec<Article>,
}

impl From<FeedItem> for Article {
    fn from(item: FeedItem) -> Self {
        Self {
            title: item.title,
            link: item.link,
        }
    }
}
