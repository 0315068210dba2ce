// src/params.rs
//
// Command-line surface for both binaries, mapped onto the option structs.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::consts::{DEFAULT_BASE_URL, DEFAULT_FILE, FIRST_PAGE, HISTOGRAM_BINS, LAST_PAGE, TOP_N};
use crate::config::options::{CollectOptions, Pairing, ReportOptions, TopNAxis};

/// Scrape book titles and prices from the catalogue into a CSV table.
#[derive(Debug, Parser)]
#[command(name = "collect", version, about)]
pub struct CollectParams {
    /// Page address template; `{}` is replaced by the page number
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, default_value_t = FIRST_PAGE)]
    pub first_page: u32,

    /// Last page to visit (inclusive)
    #[arg(long, default_value_t = LAST_PAGE)]
    pub last_page: u32,

    /// Output CSV (overwritten)
    #[arg(short, long, default_value = DEFAULT_FILE)]
    pub out: PathBuf,

    /// Keep pages whose title/price counts differ, dropping the unpaired tail
    #[arg(long)]
    pub truncate_mismatched: bool,

    /// Per-request timeout; the HTTP client default applies when omitted
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl CollectParams {
    pub fn to_options(&self) -> CollectOptions {
        CollectOptions {
            base_url: self.base_url.clone(),
            first_page: self.first_page,
            last_page: self.last_page,
            out_path: self.out.clone(),
            pairing: if self.truncate_mismatched { Pairing::Truncate } else { Pairing::Strict },
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Price dashboard for the scraped book table.
#[derive(Debug, Parser)]
#[command(name = "book_scrape", version, about)]
pub struct DashboardParams {
    /// CSV written by `collect`
    #[arg(short, long, default_value = DEFAULT_FILE)]
    pub file: PathBuf,

    /// Histogram bin count
    #[arg(long, default_value_t = HISTOGRAM_BINS)]
    pub bins: usize,

    /// Bars in the top-N chart
    #[arg(long, default_value_t = TOP_N)]
    pub top: usize,

    /// Fix the top-N value axis lower bound (needs --top-y-max)
    #[arg(long, requires = "top_y_max")]
    pub top_y_min: Option<f64>,

    /// Fix the top-N value axis upper bound (needs --top-y-min)
    #[arg(long, requires = "top_y_min")]
    pub top_y_max: Option<f64>,

    #[arg(short, long)]
    pub verbose: bool,
}

impl DashboardParams {
    pub fn to_options(&self) -> ReportOptions {
        let top_axis = match (self.top_y_min, self.top_y_max) {
            (Some(min), Some(max)) if min < max => TopNAxis::Fixed { min, max },
            (Some(_), Some(_)) => {
                log::warn!("Ignoring top-N axis window: min must be below max");
                TopNAxis::DataDriven
            }
            _ => TopNAxis::DataDriven,
        };
        ReportOptions {
            table_path: self.file.clone(),
            histogram_bins: self.bins.max(1),
            top_n: self.top,
            top_axis,
        }
    }
}
