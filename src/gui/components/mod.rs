// src/gui/components/mod.rs
pub mod action_buttons;
pub mod banner;
pub mod charts;
pub mod data_table;
pub mod stats;

use eframe::egui;

/// Centered section title with a little breathing room above.
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.add_space(12.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(text).heading());
    });
    ui.add_space(4.0);
}
