// src/report/clean.rs
//
// Load-and-clean: persisted table -> numeric prices.

use std::path::Path;

use crate::core::sanitize::price_digits;
use crate::data::CatalogueEntry;
use crate::store;

use super::error::ReportError;

#[derive(Clone, Debug, PartialEq)]
pub struct CleanedRow {
    pub title: String,
    /// Always finite and >= 0.
    pub price: f64,
}

/// Persisted table with the price column converted. Never written back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CleanedTable {
    rows: Vec<CleanedRow>,
}

impl CleanedTable {
    pub fn rows(&self) -> &[CleanedRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn prices(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.price).collect()
    }
}

/// Strip everything but digits and `.`, then parse.
/// `"£12.3abc"` -> `12.3`; `"£"` -> `None`.
pub fn clean_price(raw: &str) -> Option<f64> {
    let digits = price_digits(raw);
    digits.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert every row; the first unparseable price fails the whole table.
pub fn clean_entries(entries: Vec<CatalogueEntry>) -> Result<CleanedTable, ReportError> {
    let rows = entries
        .into_iter()
        .enumerate()
        .map(|(i, e)| match clean_price(&e.price_text) {
            Some(price) => Ok(CleanedRow { title: e.title, price }),
            None => Err(ReportError::ParseFailure { row: i + 1, value: e.price_text }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CleanedTable { rows })
}

pub fn load_cleaned(path: &Path) -> Result<CleanedTable, ReportError> {
    let entries = store::load_table(path)?;
    let table = clean_entries(entries)?;
    log::info!("Report: loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}
