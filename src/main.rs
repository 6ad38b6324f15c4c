//! # BeLux Press Review
//!
//! Builds Google News RSS queries for a roster of Belgian and Luxembourg
//! companies and turns the resulting feeds into a weekly LaTeX press review.
//!
//! ## Usage
//!
//! ```sh
//! belux_press_review queries          # writes rss_feeds.csv
//! belux_press_review review           # writes press_review.tex
//! ```
//!
//! ## Architecture
//!
//! Two independent stages connected by a CSV table:
//! 1. **Queries**: one search URL per company, with a business keyword filter
//!    and a country-specific geographic filter
//! 2. **Review**: for each row, fetch the feed, keep the first few entries
//!    that mention Belgium or Luxembourg, and render one LaTeX section
//!
//! A feed that cannot be fetched produces an empty section. Configuration
//! and output-write errors abort the run.

use clap::Parser;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod error;
mod feeds;
mod models;
mod outputs;
mod queries;
mod review;
mod roster;
mod utils;

use cli::{Cli, Command, QueriesArgs, ReviewArgs};
use error::ReviewError;
use feeds::source::HttpFeedSource;
use outputs::{latex, table};
use utils::{ensure_writable_parent, review_date, write_atomically};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args.command, "Parsed CLI arguments");

    let result = match args.command {
        Command::Queries(args) => run_queries(args).await,
        Command::Review(args) => run_review(args).await,
    };

    let elapsed = start_time.elapsed();
    match result {
        Ok(summary) => {
            info!(?elapsed, "Execution complete");
            println!("{summary}");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, ?elapsed, "Run aborted");
            Err(e.into())
        }
    }
}

/// Build the feed table and write it. Returns the confirmation line.
#[instrument(level = "info", skip_all)]
async fn run_queries(args: QueriesArgs) -> Result<String, ReviewError> {
    let records = match &args.roster {
        Some(path) => roster::load_roster(path)?,
        None => roster::default_roster(),
    };
    let entries = queries::build_feed_entries(&records);
    let rows = table::write_feed_table(&args.output, &entries).await?;
    Ok(format!(
        "[OK] Feed table written: {} ({} rows)",
        args.output.display(),
        rows
    ))
}

/// Fetch every feed in the table and write the LaTeX review. Returns the
/// confirmation line.
#[instrument(level = "info", skip_all)]
async fn run_review(args: ReviewArgs) -> Result<String, ReviewError> {
    let entries = table::read_feed_table(&args.input)?;
    ensure_writable_parent(&args.output).await?;

    let source = HttpFeedSource::default();
    let sections = review::collect_sections(&source, &entries, args.limit).await;
    let document = latex::render_document(&review_date(), &sections);
    write_atomically(&args.output, document.as_bytes()).await?;

    Ok(format!(
        "[OK] LaTeX file generated: {} ({} companies)",
        args.output.display(),
        sections.len()
    ))
}
