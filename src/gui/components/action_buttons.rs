// src/gui/components/action_buttons.rs

use std::sync::atomic::Ordering;

use eframe::egui::{self, widgets::Spinner};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.running.load(Ordering::SeqCst);

    ui.horizontal(|ui| {
        ui.label("Table:");
        ui.monospace(app.state.options.report.table_path.display().to_string());

        ui.separator();

        // Reload
        if ui
            .add_enabled(!running, egui::Button::new("⟳ Reload"))
            .on_hover_text("Re-read the CSV from disk")
            .clicked()
        {
            actions::reload(app);
        }

        // Fetch
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_fetch = ui.add_enabled(
            !running,
            egui::Button::new(
                egui::RichText::new("FETCH")
                .color(black)
                .strong())
            .fill(red))
            .on_hover_text(format!(
                "Scrape pages {}..={} and overwrite the table",
                app.state.options.collect.first_page,
                app.state.options.collect.last_page
            ));

        if button_fetch.clicked() {
            actions::scrape(app, ui.ctx());
        }

        if running {
            ui.add(Spinner::new().size(16.0));
        }

        ui.label(app.status_text());
    });
}
