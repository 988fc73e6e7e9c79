// CSV/TSV import and the CSV export

use std::path::{Path, PathBuf};

use leetsheet_engine::CanonicalRecord;
use tracing::{debug, info};

use crate::error::IoError;
use crate::table::{Cell, Row, Table};

/// Export header, in column order.
pub const EXPORT_HEADER: [&str; 6] = [
    "Category",
    "Problem No",
    "Link",
    "Problem Name",
    "Technique",
    "Completed?",
];

pub fn import(path: &Path) -> Result<Table, IoError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);
    import_from_string(&content, delimiter, path)
}

pub fn import_tsv(path: &Path) -> Result<Table, IoError> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content, b'\t', path)
}

/// Delimiters tried when sniffing, in tie-break order.
const DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// Pick the delimiter that splits the header into the most columns while
/// keeping the next few rows at that same width.
fn sniff_delimiter(content: &str) -> u8 {
    let sample: String = content.lines().take(10).collect::<Vec<_>>().join("\n");

    DELIMITERS
        .iter()
        .filter_map(|&delim| {
            let widths: Vec<usize> = csv::ReaderBuilder::new()
                .delimiter(delim)
                .has_headers(false)
                .flexible(true)
                .from_reader(sample.as_bytes())
                .records()
                .map_while(Result::ok)
                .map(|r| r.len())
                .collect();
            let header_width = *widths.first()?;
            if header_width < 2 {
                return None;
            }
            let matching = widths.iter().filter(|&&w| w == header_width).count();
            Some((delim, matching * header_width))
        })
        // max_by_key keeps the last maximum; reverse so earlier candidates win ties
        .rev()
        .max_by_key(|&(_, score)| score)
        .map(|(delim, _)| delim)
        .unwrap_or(b',')
}

/// File contents as UTF-8. Bytes that are not valid UTF-8 are decoded as
/// Windows-1252, the usual encoding of Excel "Save as CSV" on Windows.
pub fn read_file_as_utf8(path: &Path) -> Result<String, IoError> {
    let bytes = std::fs::read(path).map_err(|source| IoError::Read { path: path.to_path_buf(), source })?;

    if let Ok(text) = std::str::from_utf8(&bytes) {
        return Ok(text.to_string());
    }
    let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
    debug!(path = %path.display(), "input is not UTF-8, decoded as Windows-1252");
    Ok(decoded.into_owned())
}

fn import_from_string(content: &str, delimiter: u8, path: &Path) -> Result<Table, IoError> {
    // A UTF-8 BOM would otherwise stick to the first header
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut grid = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| IoError::CsvRead { path: path.to_path_buf(), source })?;
        let cells = record
            .iter()
            .map(|field| if field.is_empty() { Cell::Empty } else { Cell::Text(field.to_string()) })
            .collect();
        grid.push(Row::new(cells));
    }

    Table::from_grid(grid).ok_or_else(|| IoError::EmptyInput(path.to_path_buf()))
}

/// Write the export, replacing `path` only once every row is on disk.
pub fn write_export(path: &Path, records: &[CanonicalRecord]) -> Result<(), IoError> {
    let tmp_path = tmp_path_for(path);

    if let Err(e) = write_records(&tmp_path, records) {
        let _ = std::fs::remove_file(&tmp_path);
        return Err(e);
    }

    std::fs::rename(&tmp_path, path).map_err(|source| {
        let _ = std::fs::remove_file(&tmp_path);
        IoError::Write { path: path.to_path_buf(), source }
    })?;

    info!(path = %path.display(), rows = records.len(), "wrote export");
    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_records(path: &Path, records: &[CanonicalRecord]) -> Result<(), IoError> {
    let csv_err = |source| IoError::CsvWrite { path: path.to_path_buf(), source };
    let mut writer = csv::WriterBuilder::new().from_path(path).map_err(csv_err)?;

    writer.write_record(EXPORT_HEADER).map_err(csv_err)?;
    for record in records {
        writer.write_record(export_fields(record)).map_err(csv_err)?;
    }

    writer
        .flush()
        .map_err(|source| IoError::Write { path: path.to_path_buf(), source })
}

fn export_fields(record: &CanonicalRecord) -> [&str; 6] {
    [
        record.category.label(),
        &record.problem_no,
        record.link.as_deref().unwrap_or(""),
        &record.problem_name,
        record.technique.as_deref().unwrap_or(""),
        completed_text(record.completed),
    ]
}

fn completed_text(completed: Option<bool>) -> &'static str {
    match completed {
        Some(true) => "True",
        Some(false) => "False",
        None => "",
    }
}
