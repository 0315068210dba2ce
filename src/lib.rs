// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod gui;
pub mod logging;
pub mod params;
pub mod progress;
pub mod report;
pub mod scrape;
pub mod specs;
pub mod store;
