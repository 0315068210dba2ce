// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why a single page contributed nothing. Never aborts a run.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Run-level collector failures.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("page address template has no `{{}}` placeholder: {0}")]
    Template(String),

    #[error("empty page range {first}..={last}")]
    EmptyRange { first: u32, last: u32 },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: StoreError,
    },
}

/// Persisted-table write failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}
