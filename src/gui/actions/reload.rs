// src/gui/actions/reload.rs
use crate::{gui::app::App, report::Dashboard};

/// Re-read the table from disk and rebuild every chart.
pub fn reload(app: &mut App) {
    let path = app.state.options.report.table_path.clone();
    log::info!("Reload: {}", path.display());

    app.dashboard = Dashboard::load(&app.state.options.report);

    match &app.dashboard {
        Dashboard::Ready(r) => app.status(format!("Loaded {} books from {}", r.table.len(), path.display())),
        Dashboard::Unavailable(e) => app.status(format!("Error: {}", e.kind_label())),
    }
}
