use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    /// Input path does not exist.
    #[error("input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Extension is not a spreadsheet or delimited-text format.
    #[error("unsupported input format '{extension}': {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// calamine could not open or read the workbook.
    #[error("failed to read workbook {}: {message}", path.display())]
    Workbook { path: PathBuf, message: String },

    #[error("workbook contains no sheets: {}", .0.display())]
    NoSheets(PathBuf),

    /// No header row at all.
    #[error("input has no header row: {}", .0.display())]
    EmptyInput(PathBuf),

    /// A header the pipeline cannot run without.
    #[error("{}: missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: String },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}: {source}", path.display())]
    CsvRead {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write CSV {}: {source}", path.display())]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },
}

impl IoError {
    /// True for failures on the output side of a run.
    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::CsvWrite { .. })
    }
}
