// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{reload,scrape,poll_scrape}.

mod reload;  // src/gui/actions/reload.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use reload::reload;
pub use scrape::{poll_scrape, scrape};
