//! The roster of companies covered by the press review.
//!
//! The compiled-in [`COMPANIES`] list is the default. A roster can also be
//! loaded from a CSV file with a `Company,Location` header, in which case
//! every location must parse as a [`Country`].

use crate::error::ReviewError;
use crate::models::{CompanyRecord, Country};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, instrument};

/// Default roster: company name and the country whose press is searched.
pub const COMPANIES: &[(&str, Country)] = &[
    ("Barco", Country::Belgium),
    ("Husky", Country::Belgium),
    ("SES", Country::Luxembourg),
    ("Agfa Gevaert", Country::Belgium),
    ("Danone", Country::Belgium),
    ("Total", Country::Belgium),
    ("IMEC", Country::Belgium),
    ("Arval", Country::Belgium),
    ("Vinci", Country::Belgium),
    ("Coca Cola", Country::Belgium),
    ("Unilin", Country::Belgium),
    ("Etex", Country::Belgium),
    ("Sodexo", Country::Belgium),
    ("Ontex", Country::Belgium),
    ("Toyota", Country::Belgium),
];

pub fn default_roster() -> Vec<CompanyRecord> {
    COMPANIES
        .iter()
        .map(|(name, country)| CompanyRecord::new(*name, *country))
        .collect()
}

#[derive(Debug, Deserialize)]
struct RosterLine {
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Location")]
    location: String,
}

/// Load a roster from a `Company,Location` CSV file.
///
/// Fails on the first row whose location is not a known country; the error
/// carries the 1-based data row number.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn load_roster(path: &Path) -> Result<Vec<CompanyRecord>, ReviewError> {
    let table_err = |source| ReviewError::TableRead {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(path).map_err(table_err)?;

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<RosterLine>().enumerate() {
        let row = row.map_err(table_err)?;
        let country = row
            .location
            .parse::<Country>()
            .map_err(|e| ReviewError::RosterRow {
                row: i + 1,
                source: Box::new(e),
            })?;
        records.push(CompanyRecord::new(row.company, country));
    }

    info!(count = records.len(), "Loaded roster");
    Ok(records)
}
