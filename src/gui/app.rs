// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, atomic::AtomicBool},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    report::{Dashboard, Section},
    scrape::CollectSummary,
};

use super::{actions, components};

pub const WINDOW_TITLE: &str = "Book Dashboard";

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// Result slot the fetch thread fills in; drained by the UI thread.
pub type FetchSlot = Arc<Mutex<Option<Result<CollectSummary, String>>>>;

pub struct App {
    // options + layout (UI thread only)
    pub state: AppState,

    // what the last load produced
    pub dashboard: Dashboard,

    // status/progress (fetch thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: Arc<AtomicBool>,
    pub finished: FetchSlot,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let dashboard = Dashboard::load(&state.options.report);
        let status = match &dashboard {
            Dashboard::Ready(r) => format!("Loaded {} books", r.table.len()),
            Dashboard::Unavailable(e) => s!(e.kind_label()),
        };

        log::info!(
            "Init: table={} bins={} top={}",
            state.options.report.table_path.display(),
            state.options.report.histogram_bins,
            state.options.report.top_n
        );

        Self {
            state,
            dashboard,
            status: Arc::new(Mutex::new(status)),
            running: Arc::new(AtomicBool::new(false)),
            finished: Arc::new(Mutex::new(None)),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_scrape(self);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            components::action_buttons::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("📚 Book Dashboard - BookScraper");
                    });
                    ui.add_space(8.0);

                    let gui = &self.state.gui;
                    let top_n = self.state.options.report.top_n;

                    for section in self.dashboard.sections() {
                        match (section, &self.dashboard) {
                            (Section::Error, Dashboard::Unavailable(e)) => {
                                components::banner::draw(ui, e);
                            }
                            (Section::Table, Dashboard::Ready(r)) => {
                                components::section_heading(ui, "📋 Extracted data");
                                components::data_table::draw(ui, &r.table, gui.table_height);
                            }
                            (Section::Statistics, Dashboard::Ready(r)) => {
                                components::section_heading(ui, "📊 Descriptive statistics");
                                components::stats::draw(ui, &r.summary);
                            }
                            (Section::Histogram, Dashboard::Ready(r)) => {
                                components::section_heading(ui, "📉 Price distribution");
                                components::charts::histogram(ui, &r.histogram, gui.chart_height);
                            }
                            (Section::TopN, Dashboard::Ready(r)) => {
                                components::section_heading(ui, &format!("💸 Top {top_n} most expensive books"));
                                components::charts::top_n(ui, &r.top, gui.chart_height);
                            }
                            (Section::Scatter, Dashboard::Ready(r)) => {
                                components::section_heading(ui, "🔢 Price by extraction order");
                                components::charts::scatter(ui, &r.scatter, gui.chart_height);
                            }
                            _ => {}
                        }
                    }
                });
        });
    }
}
