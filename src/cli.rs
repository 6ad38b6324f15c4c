//! Command-line interface definitions.
//!
//! The two pipeline stages are separate subcommands so each can be run on
//! its own. Paths can be given as flags or through environment variables.

use crate::feeds::filter::DEFAULT_ARTICLE_LIMIT;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for the press review.
///
/// # Examples
///
/// ```sh
/// # Build the feed table, then render the review from it
/// belux_press_review queries
/// belux_press_review review
///
/// # Custom table location shared by both stages
/// RSS_CSV_PATH=/tmp/feeds.csv belux_press_review queries
/// RSS_CSV_PATH=/tmp/feeds.csv belux_press_review review -o /tmp/review.tex
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the company → RSS feed URL table
    Queries(QueriesArgs),
    /// Fetch the feeds in the table and render the LaTeX press review
    Review(ReviewArgs),
}

#[derive(Args, Debug)]
pub struct QueriesArgs {
    /// Where to write the feed table
    #[arg(short, long, env = "RSS_CSV_PATH", default_value = "rss_feeds.csv")]
    pub output: PathBuf,

    /// Optional `Company,Location` CSV replacing the built-in company list
    #[arg(short, long)]
    pub roster: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// Feed table produced by the `queries` subcommand
    #[arg(short, long, env = "RSS_CSV_PATH", default_value = "rss_feeds.csv")]
    pub input: PathBuf,

    /// Where to write the LaTeX document
    #[arg(short, long, default_value = "press_review.tex")]
    pub output: PathBuf,

    /// Maximum number of relevant articles kept per company
    #[arg(short, long, default_value_t = DEFAULT_ARTICLE_LIMIT)]
    pub limit: usize,
}
