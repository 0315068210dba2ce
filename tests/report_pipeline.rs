// tests/report_pipeline.rs
//
// Load-and-clean plus every derived chart, driven from tables on disk.
//
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use book_scrape::config::options::{ReportOptions, TopNAxis};
use book_scrape::data::CatalogueEntry;
use book_scrape::report::charts::{Histogram, TopN, scatter_points};
use book_scrape::report::clean::{clean_entries, clean_price, CleanedTable};
use book_scrape::report::stats::{round2, Summary};
use book_scrape::report::{Dashboard, ReportError, Section};
use book_scrape::store;
use tempfile::{tempdir, TempDir};

fn write_table(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("livros.csv");
    fs::write(&path, body).unwrap();
    path
}

fn opts_for(path: &Path) -> ReportOptions {
    ReportOptions { table_path: path.to_path_buf(), ..ReportOptions::default() }
}

fn table_of(prices: &[f64]) -> CleanedTable {
    let entries = prices
        .iter()
        .enumerate()
        .map(|(i, p)| CatalogueEntry::new(format!("Book {}", i + 1), format!("£{p:.2}")))
        .collect();
    clean_entries(entries).unwrap()
}

#[test]
fn two_row_table_summary() {
    let dir = tempdir().unwrap();
    let path = write_table(&dir, "Livros,Preços\nA,£10.00\nB,£5.50\n");

    let dash = Dashboard::load(&opts_for(&path));
    assert_eq!(dash.sections(), &[
        Section::Table,
        Section::Statistics,
        Section::Histogram,
        Section::TopN,
        Section::Scatter,
    ]);

    let report = dash.report().unwrap();
    assert_eq!(report.table.prices(), vec![10.0, 5.5]);
    assert_eq!(report.summary, Summary { count: 2, mean: Some(7.75), max: Some(10.0), min: Some(5.5) });
    assert_eq!(report.top.rows[0].title, "A");
}

#[test]
fn price_cleaning_keeps_digits_and_dots() {
    assert_eq!(clean_price("£12.3abc"), Some(12.3));
    assert_eq!(clean_price("£51.77"), Some(51.77));
    assert_eq!(clean_price("£"), None);
    assert_eq!(clean_price(""), None);
}

#[test]
fn unparseable_price_fails_whole_load() {
    let dir = tempdir().unwrap();
    let path = write_table(&dir, "Livros,Preços\nA,£10.00\nB,£\n");

    let dash = Dashboard::load(&opts_for(&path));
    assert_eq!(dash.sections(), &[Section::Error]);
    assert!(dash.report().is_none());
    match dash.error() {
        Some(ReportError::ParseFailure { row, value }) => {
            assert_eq!(*row, 2);
            assert_eq!(value, "£");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn absent_table_yields_only_error_section() {
    let dir = tempdir().unwrap();
    let dash = Dashboard::load(&opts_for(&dir.path().join("nope.csv")));

    assert_eq!(dash.sections(), &[Section::Error]);
    let err = dash.error().unwrap();
    assert!(matches!(err, ReportError::FileMissing { .. }));
    assert!(err.to_string().contains("nope.csv"));
    assert_eq!(err.kind_label(), "File not found");
}

#[test]
fn wrong_header_is_schema_mismatch() {
    let dir = tempdir().unwrap();
    let path = write_table(&dir, "Title,Price\nA,£10.00\n");

    let dash = Dashboard::load(&opts_for(&path));
    assert_eq!(dash.sections(), &[Section::Error]);
    assert!(matches!(dash.error(), Some(ReportError::SchemaMismatch { .. })));
}

#[test]
fn ragged_row_is_schema_mismatch() {
    let dir = tempdir().unwrap();
    let path = write_table(&dir, "Livros,Preços\nA,£10.00,extra\n");
    assert!(matches!(store::load_table(&path), Err(ReportError::SchemaMismatch { .. })));
}

/// Yields `data` once, then fails like a dying disk.
struct BrokenRead {
    data: Option<&'static [u8]>,
}

impl Read for BrokenRead {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.data.take() {
            Some(d) => {
                buf[..d.len()].copy_from_slice(d);
                Ok(d.len())
            }
            None => Err(io::Error::other("device went away")),
        }
    }
}

#[test]
fn read_failure_midway_is_unreadable_not_schema() {
    let r = BrokenRead { data: Some("Livros,Preços\nA,£1.00\n".as_bytes()) };
    match store::read_entries(r, Path::new("livros.csv")) {
        Err(ReportError::Unreadable { path, source }) => {
            assert_eq!(path, Path::new("livros.csv"));
            assert_eq!(source.to_string(), "device went away");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn invalid_utf8_is_schema_mismatch() {
    let bytes: &[u8] = b"Livros,Pre\xc3\xa7os\nA\xff,\xc2\xa31.00\n";
    let err = store::read_entries(bytes, Path::new("livros.csv")).unwrap_err();
    assert!(matches!(err, ReportError::SchemaMismatch { .. }), "{err:?}");
}

#[test]
fn header_only_table_is_ready_but_empty() {
    let dir = tempdir().unwrap();
    let path = write_table(&dir, "Livros,Preços\n");

    let dash = Dashboard::load(&opts_for(&path));
    let report = dash.report().unwrap();
    assert!(report.table.is_empty());
    assert_eq!(report.summary, Summary { count: 0, mean: None, max: None, min: None });
    assert!(report.histogram.bins.is_empty());
    assert!(report.top.rows.is_empty());
    assert!(report.scatter.is_empty());
}

#[test]
fn mean_is_rounded_to_cents() {
    let table = table_of(&[1.0, 2.0, 2.0]);
    assert_eq!(Summary::of(&table).mean, Some(1.67));
    assert_eq!(round2(7.755_1), 7.76);
}

#[test]
fn top_n_picks_highest_prices() {
    let prices: Vec<f64> = (1..=15).map(|i| i as f64 * 3.0).collect();
    let table = table_of(&prices);

    let top = TopN::select(&table, 10, TopNAxis::DataDriven);
    assert_eq!(top.rows.len(), 10);
    assert_eq!(top.max_price(), Some(45.0));

    let lowest_selected = top.rows.iter().map(|r| r.price).fold(f64::INFINITY, f64::min);
    let highest_left = prices
        .iter()
        .enumerate()
        .filter(|(i, _)| !top.rows.iter().any(|r| r.index == *i))
        .map(|(_, p)| *p)
        .fold(f64::NEG_INFINITY, f64::max);
    assert!(lowest_selected >= highest_left);
    assert!(top.rows.windows(2).all(|w| w[0].price >= w[1].price));
}

#[test]
fn top_n_ties_keep_table_order() {
    let table = table_of(&[20.0, 50.0, 20.0, 50.0, 10.0]);
    let top = TopN::select(&table, 3, TopNAxis::DataDriven);
    let picked: Vec<usize> = top.rows.iter().map(|r| r.index).collect();
    assert_eq!(picked, vec![1, 3, 0]);
}

#[test]
fn top_n_on_short_table_returns_all_rows() {
    let table = table_of(&[3.0, 9.0]);
    let top = TopN::select(&table, 10, TopNAxis::DataDriven);
    assert_eq!(top.rows.len(), 2);
}

#[test]
fn fixed_axis_reports_bars_out_of_view() {
    let table = table_of(&[59.99, 58.50, 59.10, 12.00]);
    let top = TopN::select(&table, 10, TopNAxis::Fixed { min: 59.0, max: 60.0 });
    assert_eq!(top.y_window(), Some((59.0, 60.0)));
    assert_eq!(top.hidden_count(), 2);

    let free = TopN::select(&table, 10, TopNAxis::DataDriven);
    assert_eq!(free.y_window(), None);
    assert_eq!(free.hidden_count(), 0);
}

#[test]
fn histogram_counts_every_row() {
    let prices: Vec<f64> = (0..100).map(|i| 10.0 + (i as f64) * 0.4).collect();
    let hist = Histogram::build(&prices, 20);

    assert_eq!(hist.bins.len(), 20);
    assert_eq!(hist.total(), prices.len());
    assert_eq!(hist.bins[0].start, 10.0);
    assert_eq!(hist.bins[19].end, *prices.last().unwrap());
    // max sits on the closed right edge
    assert!(hist.bins[19].count >= 1);
    assert!(hist.bins.windows(2).all(|w| w[0].end == w[1].start));
}

#[test]
fn histogram_of_identical_prices_is_one_bin() {
    let hist = Histogram::build(&[7.0, 7.0, 7.0], 20);
    assert_eq!(hist.bins.len(), 1);
    assert_eq!(hist.bins[0].count, 3);
    assert_eq!(hist.bins[0].center(), 7.0);
}

#[test]
fn scatter_follows_extraction_order() {
    let table = table_of(&[30.0, 10.0, 20.0]);
    let points = scatter_points(&table);

    let orders: Vec<usize> = points.iter().map(|p| p.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(points[0].price, 30.0);
    assert_eq!(points[0].shade, 1.0);
    assert_eq!(points[1].shade, 0.0);
    assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.shade)));
}

#[test]
fn collector_output_feeds_dashboard() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("livros.csv");
    store::save_table(&path, &[
        CatalogueEntry::new("A Light in the Attic", "£51.77"),
        CatalogueEntry::new("Sapiens: A Brief History of Humankind, Vol. 1", "£54.23"),
    ])
    .unwrap();

    let dash = Dashboard::load(&opts_for(&path));
    let report = dash.report().unwrap();
    assert_eq!(report.table.rows()[1].title, "Sapiens: A Brief History of Humankind, Vol. 1");
    assert_eq!(report.summary.max, Some(54.23));
    assert_eq!(report.histogram.total(), 2);
}
