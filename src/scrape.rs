// src/scrape.rs
//
// Collector: visit every catalogue page in range, one at a time, keep what
// parses, then write the whole table once at the end.

use std::path::PathBuf;

use crate::{
    config::consts::PAGE_PLACEHOLDER,
    config::options::CollectOptions,
    core::net::{HttpSource, PageSource},
    data::EntryCollection,
    error::CollectError,
    progress::Progress,
    specs::catalogue,
    store,
};

/// A page that contributed nothing, and why.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageFailure {
    pub page: u32,
    pub reason: String,
}

/// What one collector run produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectSummary {
    pub pages_attempted: usize,
    pub failures: Vec<PageFailure>,
    pub rows_written: usize,
    pub out_path: PathBuf,
}

impl CollectSummary {
    pub fn pages_ok(&self) -> usize {
        self.pages_attempted - self.failures.len()
    }
}

fn validate(opts: &CollectOptions) -> Result<(), CollectError> {
    if !opts.base_url.contains(PAGE_PLACEHOLDER) {
        return Err(CollectError::Template(opts.base_url.clone()));
    }
    if opts.page_count() == 0 {
        return Err(CollectError::EmptyRange { first: opts.first_page, last: opts.last_page });
    }
    Ok(())
}

/// Fetch + parse every page in range into memory (no file IO).
/// Per-page failures are reported and skipped, never fatal.
pub fn collect_catalogue(
    opts: &CollectOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<(EntryCollection, Vec<PageFailure>), CollectError> {
    validate(opts)?;
    Ok(collect_pages(opts, source, progress))
}

fn collect_pages(
    opts: &CollectOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> (EntryCollection, Vec<PageFailure>) {
    progress.begin(opts.page_count());

    let mut entries = EntryCollection::new();
    let mut failures = Vec::new();

    for page in opts.pages() {
        let url = opts.page_url(page);
        log::debug!("Page {page}: GET {url}");

        let parsed = source
            .fetch(&url)
            .map_err(|e| e.to_string())
            .and_then(|body| catalogue::parse_page(&body, opts.pairing).map_err(|e| e.to_string()));

        // Per-page chatter stays at debug; `Progress` already tells the user.
        match parsed {
            Ok(page_entries) => {
                let n = page_entries.len();
                entries.extend_page(page_entries);
                log::debug!("Page {page}: {n} entries");
                progress.item_done(page, n);
            }
            Err(reason) => {
                log::debug!("Page {page}: {reason}");
                progress.item_failed(page, &reason);
                failures.push(PageFailure { page, reason });
            }
        }
    }

    progress.finish();

    (entries, failures)
}

/// Collect, then overwrite the table. `opts` is already validated.
fn collect_and_save(
    opts: &CollectOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<CollectSummary, CollectError> {
    let (entries, failures) = collect_pages(opts, source, &mut *progress);

    if entries.is_empty() {
        log::warn!("No entries collected; writing header only");
    }

    store::save_table(&opts.out_path, entries.entries())
        .map_err(|source| CollectError::Write { path: opts.out_path.clone(), source })?;

    log::info!(
        "Saved {} rows to {} ({} of {} pages skipped)",
        entries.len(),
        opts.out_path.display(),
        failures.len(),
        opts.page_count()
    );
    progress.log(&format!("Data saved to '{}'", opts.out_path.display()));

    Ok(CollectSummary {
        pages_attempted: opts.page_count(),
        failures,
        rows_written: entries.len(),
        out_path: opts.out_path.clone(),
    })
}

/// Full collector run against `source`: collect, then overwrite the table.
pub fn run_with_source(
    opts: &CollectOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Result<CollectSummary, CollectError> {
    validate(opts)?;
    collect_and_save(opts, source, progress)
}

/// Full collector run over HTTP. Bad options fail before the client is built.
pub fn run(
    opts: &CollectOptions,
    progress: &mut dyn Progress,
) -> Result<CollectSummary, CollectError> {
    validate(opts)?;
    let source = HttpSource::new(opts.timeout)?;
    collect_and_save(opts, &source, progress)
}
