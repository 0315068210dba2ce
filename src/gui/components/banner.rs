// src/gui/components/banner.rs
//
// The single artifact shown when the table could not be loaded.

use eframe::egui::{self, RichText};

use crate::report::ReportError;

pub fn draw(ui: &mut egui::Ui, err: &ReportError) {
    let color = ui.visuals().error_fg_color;
    let hint = match err {
        ReportError::FileMissing { .. } => {
            "Waiting for the collector to write the table. Run `collect`, or press FETCH."
        }
        ReportError::ParseFailure { .. } | ReportError::SchemaMismatch { .. } => {
            "The table exists but could not be interpreted. Re-run the collector to regenerate it."
        }
        ReportError::Unreadable { .. } => "Check the file's permissions, then press Reload.",
    };

    ui.add_space(24.0);
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.5, color))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("⚠ {}", err.kind_label())).color(color).strong().size(18.0));
            ui.label(RichText::new(err.to_string()).color(color));
            ui.add_space(6.0);
            ui.label(hint);
        });
}
