// tests/params.rs
use std::path::Path;
use std::time::Duration;

use book_scrape::config::options::{AppOptions, CollectOptions, Pairing, ReportOptions, TopNAxis};
use book_scrape::params::{CollectParams, DashboardParams};
use clap::Parser;

#[test]
fn collect_defaults_match_catalogue() {
    let opts = CollectParams::parse_from(["collect"]).to_options();
    assert_eq!(opts.first_page, 1);
    assert_eq!(opts.last_page, 50);
    assert_eq!(opts.out_path, Path::new("livros.csv"));
    assert_eq!(opts.pairing, Pairing::Strict);
    assert_eq!(opts.timeout, None);
}

#[test]
fn collect_flags_map_onto_options() {
    let opts = CollectParams::parse_from([
        "collect", "--last-page", "3", "-o", "out/books.csv", "--truncate-mismatched", "--timeout-secs", "5",
    ])
    .to_options();
    assert_eq!(opts.page_count(), 3);
    assert_eq!(opts.out_path, Path::new("out/books.csv"));
    assert_eq!(opts.pairing, Pairing::Truncate);
    assert_eq!(opts.timeout, Some(Duration::from_secs(5)));
}

#[test]
fn dashboard_axis_window_needs_both_bounds() {
    assert!(DashboardParams::try_parse_from(["book_scrape", "--top-y-min", "59"]).is_err());

    let opts = DashboardParams::parse_from(["book_scrape", "--top-y-min", "59", "--top-y-max", "60"]).to_options();
    assert_eq!(opts.top_axis, TopNAxis::Fixed { min: 59.0, max: 60.0 });
}

#[test]
fn dashboard_inverted_window_falls_back() {
    let opts = DashboardParams::parse_from(["book_scrape", "--top-y-min", "60", "--top-y-max", "59"]).to_options();
    assert_eq!(opts.top_axis, TopNAxis::DataDriven);
}

#[test]
fn dashboard_defaults() {
    let opts = DashboardParams::parse_from(["book_scrape", "--bins", "0"]).to_options();
    assert_eq!(opts.histogram_bins, 1);
    assert_eq!(opts.top_n, 10);
    assert_eq!(opts.table_path, Path::new("livros.csv"));
}

#[test]
fn app_options_point_collector_at_dashboard_file() {
    let mut opts = AppOptions::default();
    assert_eq!(opts.collect, CollectOptions::default());
    assert_eq!(opts.report, ReportOptions::default());

    opts.report = DashboardParams::parse_from(["book_scrape", "-f", "data/books.csv"]).to_options();
    opts.sync_paths();
    assert_eq!(opts.collect.out_path, Path::new("data/books.csv"));
}
