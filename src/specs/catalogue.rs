//! Scraping *spec* for one catalogue listing page.
//!
//! Shape of the page (one `<article class="product_pod">` per book):
//! ```html
//! <h3><a href="..." title="A Light in the Attic">A Light in the ...</a></h3>
//! <div class="product_price"><p class="price_color">£51.77</p> ...</div>
//! ```
//! The full title only lives in the anchor's `title` attribute; the link text
//! is truncated by the site. Titles and prices are collected as two
//! independent lists in document order and then paired positionally.

use scraper::Html;
use thiserror::Error;

use crate::config::options::Pairing;
use crate::core::html::{first_attr, select_all, selector, text_of};
use crate::data::CatalogueEntry;

pub const TITLE_HEADING: &str = "h3";
pub const TITLE_ANCHOR: &str = "a[title]";
pub const PRICE_NODE: &str = "p.price_color";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("{titles} titles but {prices} prices on page")]
    ShapeMismatch { titles: usize, prices: usize },

    #[error("{0}")]
    Selector(String),
}

/// Raw per-page findings before pairing.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageNodes {
    pub titles: Vec<String>,
    pub prices: Vec<String>,
}

impl PageNodes {
    /// Upper bound on entries this page can contribute.
    pub fn pairable(&self) -> usize {
        self.titles.len().min(self.prices.len())
    }
}

/// Collect title and price nodes in document order.
/// Headings without a titled anchor are not titles and are skipped.
pub fn find_nodes(body: &str) -> Result<PageNodes, ParseError> {
    let heading = selector(TITLE_HEADING).map_err(ParseError::Selector)?;
    let anchor = selector(TITLE_ANCHOR).map_err(ParseError::Selector)?;
    let price = selector(PRICE_NODE).map_err(ParseError::Selector)?;

    let doc = Html::parse_document(body);

    let titles = select_all(&doc, &heading)
        .into_iter()
        .filter_map(|h| first_attr(h, &anchor, "title"))
        .map(str::to_string)
        .collect();

    let prices = select_all(&doc, &price)
        .into_iter()
        .map(text_of)
        .collect();

    Ok(PageNodes { titles, prices })
}

/// Parse one page into entries, pairing titles with prices per `pairing`.
pub fn parse_page(body: &str, pairing: Pairing) -> Result<Vec<CatalogueEntry>, ParseError> {
    let nodes = find_nodes(body)?;
    pair(nodes, pairing)
}

pub fn pair(nodes: PageNodes, pairing: Pairing) -> Result<Vec<CatalogueEntry>, ParseError> {
    let (titles, prices) = (nodes.titles.len(), nodes.prices.len());
    if titles != prices {
        match pairing {
            Pairing::Strict => return Err(ParseError::ShapeMismatch { titles, prices }),
            Pairing::Truncate => {
                log::warn!("Pairing: {titles} titles vs {prices} prices, keeping {}", titles.min(prices));
            }
        }
    }

    Ok(nodes.titles
        .into_iter()
        .zip(nodes.prices)
        .map(|(title, price)| CatalogueEntry::new(title, price))
        .collect())
}
