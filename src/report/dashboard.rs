// src/report/dashboard.rs
//
// What the dashboard shows after one load: either everything, in a fixed
// order, or a single error artifact.

use crate::config::options::ReportOptions;

use super::charts::{Histogram, ScatterPoint, TopN, scatter_points};
use super::clean::{CleanedTable, load_cleaned};
use super::error::ReportError;
use super::stats::Summary;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Error,
    Table,
    Statistics,
    Histogram,
    TopN,
    Scatter,
}

const READY_SECTIONS: &[Section] = &[
    Section::Table,
    Section::Statistics,
    Section::Histogram,
    Section::TopN,
    Section::Scatter,
];
const ERROR_SECTIONS: &[Section] = &[Section::Error];

/// Everything derived from one successful load.
#[derive(Clone, Debug)]
pub struct Report {
    pub table: CleanedTable,
    pub summary: Summary,
    pub histogram: Histogram,
    pub top: TopN,
    pub scatter: Vec<ScatterPoint>,
}

impl Report {
    pub fn build(table: CleanedTable, opts: &ReportOptions) -> Self {
        let summary = Summary::of(&table);
        let histogram = Histogram::build(&table.prices(), opts.histogram_bins);
        let top = TopN::select(&table, opts.top_n, opts.top_axis);
        let scatter = scatter_points(&table);
        Self { table, summary, histogram, top, scatter }
    }
}

#[derive(Debug)]
pub enum Dashboard {
    Unavailable(ReportError),
    Ready(Report),
}

impl Dashboard {
    /// Load-and-clean, then derive every chart. Never panics on bad input.
    pub fn load(opts: &ReportOptions) -> Self {
        match load_cleaned(&opts.table_path) {
            Ok(table) => Dashboard::Ready(Report::build(table, opts)),
            Err(e) => {
                log::error!("Report: {e}");
                Dashboard::Unavailable(e)
            }
        }
    }

    pub fn sections(&self) -> &'static [Section] {
        match self {
            Dashboard::Unavailable(_) => ERROR_SECTIONS,
            Dashboard::Ready(_) => READY_SECTIONS,
        }
    }

    pub fn report(&self) -> Option<&Report> {
        match self {
            Dashboard::Ready(r) => Some(r),
            Dashboard::Unavailable(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ReportError> {
        match self {
            Dashboard::Unavailable(e) => Some(e),
            Dashboard::Ready(_) => None,
        }
    }
}
