// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::progress::Progress;

/// Mirrors collector progress into the status line; runs on the fetch thread.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: Option<egui::Context>,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: Option<egui::Context>) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        if let Some(ctx) = &self.ctx {
            ctx.request_repaint();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Fetching {total} pages…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, page: u32, entries: usize) {
        self.done += 1;
        self.set_status(format!(
            "Fetched page {} ({} books) ({}/{})",
            page, entries, self.done + self.failed, self.total
        ));
    }
    fn item_failed(&mut self, page: u32, _reason: &str) {
        self.failed += 1;
        self.set_status(format!(
            "Skipped page {} ({}/{})",
            page, self.done + self.failed, self.total
        ));
    }
    fn finish(&mut self) {
        if self.failed == 0 {
            self.set_status(format!("Fetch complete ({}/{})", self.done, self.total));
        } else {
            self.set_status(format!(
                "Fetch complete ({}/{}, {} skipped)",
                self.done, self.total, self.failed
            ));
        }
    }
}
