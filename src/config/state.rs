// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Height of the scrollable data table, in points
    pub table_height: f32,
    /// Height of each chart widget
    pub chart_height: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 800,
            table_height: 280.0,
            chart_height: 300.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
