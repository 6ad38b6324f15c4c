//! Feed fetching and relevance filtering.
//!
//! - [`source`]: the [`source::FeedSource`] seam and its HTTP implementation
//! - [`filter`]: the geographic keyword filter and per-feed article cap

pub mod filter;
pub mod source;
