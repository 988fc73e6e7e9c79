// File I/O operations

pub mod csv;
pub mod error;
pub mod table;
pub mod xlsx;

use std::path::Path;

use leetsheet_engine::RawRecord;
use tracing::info;

pub use crate::csv::write_export;
pub use crate::error::IoError;

/// Spreadsheet extensions handed to calamine.
const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

/// Read the source sheet into raw records, choosing the reader by extension.
pub fn load_records(path: &Path) -> Result<Vec<RawRecord>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let table = match extension.as_str() {
        ext if WORKBOOK_EXTENSIONS.contains(&ext) => xlsx::import(path)?,
        "csv" | "txt" => csv::import(path)?,
        "tsv" => csv::import_tsv(path)?,
        _ => {
            return Err(IoError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            })
        }
    };

    let records = table::records_from_table(&table, path)?;
    info!(path = %path.display(), records = records.len(), "loaded source records");
    Ok(records)
}
