// src/data.rs
//
// Scraped records as they travel from the collector to the CSV table.
// Prices stay as raw text here; numeric cleaning is the reporter's job
// (see report::clean).

use serde::{Deserialize, Serialize};

/// One title/price pair from a catalogue page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    #[serde(rename = "Livros")]
    pub title: String,
    /// Verbatim price text, currency symbol included (e.g. `£51.77`).
    #[serde(rename = "Preços")]
    pub price_text: String,
}

impl CatalogueEntry {
    pub fn new(title: impl Into<String>, price_text: impl Into<String>) -> Self {
        Self { title: title.into(), price_text: price_text.into() }
    }
}

/// Entries in page-then-on-page order. Duplicates are allowed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryCollection {
    entries: Vec<CatalogueEntry>,
}

impl EntryCollection {
    pub fn new() -> Self { Self::default() }

    /// Append one page's entries, keeping their order.
    pub fn extend_page(&mut self, page: Vec<CatalogueEntry>) {
        self.entries.extend(page);
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn entries(&self) -> &[CatalogueEntry] { &self.entries }
}
