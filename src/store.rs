// src/store.rs
//
// The persisted table: a two-column CSV (`Livros,Preços`) shared by the
// collector (writer) and the dashboard (reader). Writes truncate; there is
// no locking, so a reader racing a writer may see a partial file.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use crate::config::consts::TABLE_HEADERS;
use crate::data::CatalogueEntry;
use crate::error::StoreError;
use crate::report::error::ReportError;

/// Write header + rows to any writer.
pub fn write_entries<W: Write>(w: W, entries: &[CatalogueEntry]) -> Result<(), StoreError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(w);
    // Explicit header: serde would skip it when there are no rows.
    writer.write_record(TABLE_HEADERS)?;
    for e in entries {
        writer.write_record([e.title.as_str(), e.price_text.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Create/truncate `path` and write the full table.
pub fn save_table(path: &Path, entries: &[CatalogueEntry]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    write_entries(io::BufWriter::new(file), entries)
}

/// Load the table, checking the header row first.
pub fn load_table(path: &Path) -> Result<Vec<CatalogueEntry>, ReportError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::FileMissing { path: path.to_path_buf() },
        _ => ReportError::Unreadable { path: path.to_path_buf(), source: e },
    })?;
    read_entries(file, path)
}

/// `path` only labels errors; the bytes come from `r`.
pub fn read_entries<R: io::Read>(r: R, path: &Path) -> Result<Vec<CatalogueEntry>, ReportError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(r);

    let found: Vec<String> = reader
        .headers()
        .map_err(|e| ReportError::from_csv(e, path))?
        .iter()
        .map(str::to_string)
        .collect();
    if found != TABLE_HEADERS {
        return Err(ReportError::SchemaMismatch {
            expected: TABLE_HEADERS.join(","),
            found: found.join(","),
        });
    }

    reader
        .deserialize::<CatalogueEntry>()
        .map(|row| row.map_err(|e| ReportError::from_csv(e, path)))
        .collect()
}
