// benches/catalogue.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use book_scrape::config::options::Pairing;
use book_scrape::report::charts::Histogram;
use book_scrape::report::clean::clean_entries;
use book_scrape::specs::catalogue;

const PAGE: &str = include_str!("../tests/fixtures/catalogue_page.html");

fn bench_parse(c: &mut Criterion) {
    c.bench_function("catalogue_parse_page", |b| {
        b.iter(|| {
            let rows = catalogue::parse_page(black_box(PAGE), Pairing::Strict).unwrap_or_default();
            black_box(rows.len())
        })
    });
}

fn bench_report(c: &mut Criterion) {
    // Roughly a full 50-page run worth of rows.
    let entries = catalogue::parse_page(PAGE, Pairing::Strict).unwrap_or_default();
    let all: Vec<_> = entries.iter().cycle().take(1000).cloned().collect();

    c.bench_function("clean_and_histogram_1000", |b| {
        b.iter(|| {
            let table = clean_entries(black_box(all.clone())).unwrap_or_default();
            let hist = Histogram::build(&table.prices(), 20);
            black_box(hist.total())
        })
    });
}

criterion_group!(benches, bench_parse, bench_report);
criterion_main!(benches);
