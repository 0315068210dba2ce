// src/report/mod.rs
//
// Reporter side: persisted table -> cleaned numbers -> statistics and chart
// data. Pure data; nothing here touches egui.

pub mod charts;
pub mod clean;
pub mod dashboard;
pub mod error;
pub mod stats;

pub use dashboard::{Dashboard, Report, Section};
pub use error::ReportError;
