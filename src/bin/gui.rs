// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use book_scrape::{
    config::state::AppState,
    gui,
    logging,
    params::DashboardParams,
};
use clap::Parser;
use eframe::egui::{IconData, ViewportBuilder};

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/books.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    let params = DashboardParams::parse();
    if let Err(e) = logging::init(logging::LogTarget::default_file(), params.verbose) {
        eprintln!("Logging disabled: {e}");
    }

    let mut state = AppState::default();
    state.options.report = params.to_options();
    state.options.sync_paths();

    let mut viewport = ViewportBuilder::default()
        .with_title(gui::app::WINDOW_TITLE)
        .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
