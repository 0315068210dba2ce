// src/progress.rs
/// Lightweight progress reporting used by the collector.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pages to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// A page was fetched and parsed; `entries` rows were kept.
    fn item_done(&mut self, _page: u32, _entries: usize) {}

    /// A page contributed nothing; the run continues.
    fn item_failed(&mut self, _page: u32, _reason: &str) {}

    /// Called once the page loop ends, before the table is written.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
