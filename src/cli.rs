// src/cli.rs
use color_eyre::eyre::{Result, WrapErr};

use crate::params::CollectParams;
use crate::progress::Progress;
use crate::scrape;

/// Prints per-page diagnostics to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_done(&mut self, page: u32, _entries: usize) {
        self.done += 1;
        println!("Extracted data from page {page}.");
    }
    fn item_failed(&mut self, page: u32, reason: &str) {
        self.done += 1;
        println!("Could not access page {page}: {reason}");
    }
    fn finish(&mut self) {
        println!("Extraction complete! ({}/{} pages)", self.done, self.total);
    }
}

pub fn run(params: CollectParams) -> Result<()> {
    let opts = params.to_options();
    let mut progress = ConsoleProgress::default();

    let summary = scrape::run(&opts, &mut progress)
        .wrap_err_with(|| format!("collecting into {}", opts.out_path.display()))?;

    if !summary.failures.is_empty() {
        eprintln!(
            "{} of {} pages skipped",
            summary.failures.len(),
            summary.pages_attempted
        );
    }
    Ok(())
}
