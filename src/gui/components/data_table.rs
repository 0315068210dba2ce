// src/gui/components/data_table.rs
//
// Draws the cleaned table: row number, title, numeric price.
// Purely a view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{PRICE_COLUMN, TITLE_COLUMN};
use crate::report::clean::CleanedTable;

pub fn draw(ui: &mut egui::Ui, table: &CleanedTable, height: f32) {
    if table.is_empty() {
        ui.vertical_centered(|ui| { ui.label(RichText::new("The table has a header but no rows.").weak()); });
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let rows = table.rows();
    let headers = ["#", TITLE_COLUMN, PRICE_COLUMN];

    TableBuilder::new(ui)
        .id_salt("books_table")
        .striped(true)
        .min_scrolled_height(0.0)
        .max_scroll_height(height)
        .column(Column::initial(48.0).at_least(32.0))
        .column(Column::remainder().at_least(200.0).clip(true))
        .column(Column::initial(90.0).at_least(60.0))
        .header(24.0, |mut header| {
            for (ci, text) in headers.iter().enumerate() {
                header.col(|ui| {
                    let label = egui::Label::new(RichText::new(*text).strong()).selectable(false);
                    if ci == 1 {
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.add(label); });
                    } else {
                        ui.centered_and_justified(|ui| { ui.add(label); });
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, rows.len(), |mut row| {
                let ix = row.index();
                let Some(data) = rows.get(ix) else { return };

                row.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.label(RichText::new((ix + 1).to_string()).weak()); });
                });
                row.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(data.title.as_str()); });
                });
                row.col(|ui| {
                    ui.centered_and_justified(|ui| { ui.monospace(format!("{:.2}", data.price)); });
                });
            });
        });
}
