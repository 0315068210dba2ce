// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;
use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppOptions {
    pub collect: CollectOptions,
    pub report: ReportOptions,
}

impl AppOptions {
    /// Point the collector at the file the dashboard reads.
    pub fn sync_paths(&mut self) {
        self.collect.out_path = self.report.table_path.clone();
    }
}

/// How titles and prices found on one page are paired up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Pairing {
    /// Unequal counts reject the page.
    #[default]
    Strict,
    /// Zip: stop at the shorter list, drop the rest.
    Truncate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectOptions {
    /// Page address with `{}` where the page number goes.
    pub base_url: String,
    pub first_page: u32,
    pub last_page: u32,
    pub out_path: PathBuf,
    pub pairing: Pairing,
    /// `None` keeps the HTTP client's own default.
    pub timeout: Option<Duration>,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            first_page: FIRST_PAGE,
            last_page: LAST_PAGE,
            out_path: PathBuf::from(DEFAULT_FILE),
            pairing: Pairing::default(),
            timeout: None,
        }
    }
}

impl CollectOptions {
    pub fn page_url(&self, page: u32) -> String {
        self.base_url.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1)
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<u32> {
        self.first_page..=self.last_page
    }

    pub fn page_count(&self) -> usize {
        if self.last_page < self.first_page { 0 }
        else { (self.last_page - self.first_page) as usize + 1 }
    }
}

/// Value axis of the top-N chart.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum TopNAxis {
    #[default]
    DataDriven,
    /// Fixed window; bars outside it are not visible.
    Fixed { min: f64, max: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportOptions {
    pub table_path: PathBuf,
    pub histogram_bins: usize,
    pub top_n: usize,
    pub top_axis: TopNAxis,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_FILE),
            histogram_bins: HISTOGRAM_BINS,
            top_n: TOP_N,
            top_axis: TopNAxis::default(),
        }
    }
}
