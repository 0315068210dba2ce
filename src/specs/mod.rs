//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec encodes *where the
//! ground truth lives in the markup* and *how to pull it out*.
//!
//! ## What lives here
//! - **Pure markup parsing** of already-fetched pages (no networking).
//! - **Selector choice** for each field.
//! - **Pairing rules** when one record is split across sibling nodes.
//!
//! ## What does **not** live here
//! - Fetching: `core::net`.
//! - Deciding which pages to visit, and writing results: `scrape` + `store`.
//! - Any numeric interpretation of the scraped text: `report::clean`.
//!
//! ## Typical call chain
//! ```text
//! scrape::collect_catalogue → PageSource::fetch(url)
//!                           → specs::catalogue::parse_page(body, pairing)
//!                           → EntryCollection
//! ```
//!
//! ## Testing notes
//! Specs are tested offline against captured fixtures (`tests/fixtures/`).
pub mod catalogue;
