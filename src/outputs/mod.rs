//! Files produced and consumed by the pipeline.
//!
//! # Submodules
//!
//! - [`table`]: the `Company,RSS Feed URL` CSV written by `queries` and read by `review`
//! - [`latex`]: escaping and rendering of the LaTeX press review
//!
//! # Output Structure
//!
//! ```text
//! rss_feeds.csv       # $RSS_CSV_PATH, one row per company
//! press_review.tex    # overwritten on every `review` run
//! ```

pub mod latex;
pub mod table;
