// src/bin/cli.rs
use book_scrape::{cli, logging, params::CollectParams};
use clap::Parser;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let params = CollectParams::parse();
    logging::init(logging::LogTarget::Stderr, params.verbose)?;
    cli::run(params)
}
