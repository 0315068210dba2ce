// src/gui/actions/scrape.rs
use std::{sync::atomic::Ordering, thread};

use eframe::egui;

use crate::{
    gui::app::App,
    gui::progress::GuiProgress,
    scrape as collector,
};

/// Start one collector run on a worker thread. No-op while one is running.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    if app.running.swap(true, Ordering::SeqCst) {
        return;
    }

    // Write where the dashboard reads
    app.state.options.sync_paths();
    let opts = app.state.options.collect.clone();

    log::info!("Scrape: Begin pages={}..={} out={}",
        opts.first_page, opts.last_page, opts.out_path.display());

    let status = app.status.clone();
    let running = app.running.clone();
    let slot = app.finished.clone();
    let ctx = ctx.clone();

    // Collector runs here, off the UI thread
    let spawned = thread::Builder::new()
        .name(s!("collector"))
        .spawn(move || {
            let mut prog = GuiProgress::new(status, Some(ctx.clone()));
            let res = collector::run(&opts, &mut prog).map_err(|e| e.to_string());
            if let Ok(mut s) = slot.lock() {
                *s = Some(res);
            }
            running.store(false, Ordering::SeqCst);
            ctx.request_repaint();
        });

    if let Err(e) = spawned {
        log::error!("Scrape: could not start worker: {e}");
        app.running.store(false, Ordering::SeqCst);
        app.status(format!("Error: {e}"));
    }
}

/// Pick up a finished run, if any, and reload the dashboard from disk.
pub fn poll_scrape(app: &mut App) {
    let done = app.finished.lock().ok().and_then(|mut s| s.take());
    let Some(res) = done else { return };

    match res {
        Ok(summary) => {
            log::info!(
                "Scrape: OK rows={} pages={}/{}",
                summary.rows_written,
                summary.pages_ok(),
                summary.pages_attempted
            );
            super::reload(app);
            app.status(format!(
                "Saved {} books to {} ({} of {} pages skipped)",
                summary.rows_written,
                summary.out_path.display(),
                summary.failures.len(),
                summary.pages_attempted
            ));
        }
        Err(e) => {
            log::error!("Scrape: Error: {e}");
            app.status(format!("Error: {e}"));
        }
    }
}
