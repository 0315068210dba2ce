// src/report/error.rs
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::consts::TABLE_HEADERS;

/// Why the dashboard has nothing to show.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("'{}' not found. Run the collector first to generate it.", path.display())]
    FileMissing { path: PathBuf },

    #[error("could not read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unexpected table shape: expected {expected}, found {found}")]
    SchemaMismatch { expected: String, found: String },

    #[error("row {row}: price {value:?} is not a number")]
    ParseFailure { row: usize, value: String },
}

impl ReportError {
    /// I/O failures stay I/O failures; everything else is a shape problem
    /// (ragged rows, bad UTF-8, undecodable fields).
    pub(crate) fn from_csv(e: csv::Error, path: &Path) -> Self {
        let found = e.to_string();
        match e.into_kind() {
            csv::ErrorKind::Io(source) => ReportError::Unreadable { path: path.to_path_buf(), source },
            _ => ReportError::SchemaMismatch { expected: TABLE_HEADERS.join(","), found },
        }
    }

    /// Short label for the error banner.
    pub fn kind_label(&self) -> &'static str {
        match self {
            ReportError::FileMissing { .. } => "File not found",
            ReportError::Unreadable { .. } => "File unreadable",
            ReportError::SchemaMismatch { .. } => "Schema mismatch",
            ReportError::ParseFailure { .. } => "Parse failure",
        }
    }
}
