// src/gui/components/stats.rs

use eframe::egui::{self, RichText};

use crate::report::stats::Summary;

fn money(v: Option<f64>) -> String {
    v.map(|x| format!("{x:.2}")).unwrap_or_else(|| s!("—"))
}

pub fn draw(ui: &mut egui::Ui, summary: &Summary) {
    let rows = [
        ("Total books", summary.count.to_string()),
        ("Mean price (£)", money(summary.mean)),
        ("Max price (£)", money(summary.max)),
        ("Min price (£)", money(summary.min)),
    ];

    ui.vertical_centered(|ui| {
        egui::Grid::new("summary_stats")
            .num_columns(2)
            .striped(true)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for (label, value) in rows {
                    ui.label(RichText::new(label).strong());
                    ui.monospace(value);
                    ui.end_row();
                }
            });
    });
}
