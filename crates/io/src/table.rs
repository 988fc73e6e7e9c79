// Header-mapped rows shared by the Excel and CSV readers

use std::path::Path;

use leetsheet_engine::RawRecord;
use tracing::{debug, warn};

use crate::error::IoError;

pub const COL_PROBLEM_NUMBER: &str = "Problem Number";
pub const COL_PROBLEM_NAME: &str = "Problem Name";
pub const COL_TECHNIQUE: &str = "Technique";
pub const COL_COMPLETED: &str = "Completed?";
pub const COL_LINK: &str = "Link";

/// Accepted spellings of the completion header.
const COMPLETED_ALIASES: &[&str] = &[COL_COMPLETED, "Completed"];

/// A typed cell value as read from the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Display text, or `None` for empty cells.
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) if s.is_empty() => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Int(n) => Some(n.to_string()),
            Cell::Float(n) => Some(format_float(*n)),
            Cell::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        }
    }
}

/// Integers without decimals, everything else as-is.
fn format_float(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One data row: cells in header order plus any hyperlink target attached to
/// one of its cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub hyperlink: Option<String>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells, hyperlink: None }
    }

    fn get(&self, col: Option<usize>) -> &Cell {
        col.and_then(|c| self.cells.get(c)).unwrap_or(&Cell::Empty)
    }

    fn is_blank(&self) -> bool {
        self.hyperlink.is_none() && self.cells.iter().all(Cell::is_empty)
    }
}

/// A sheet as a header row and data rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Split a grid into header row and data rows. Cells past the header get a
    /// synthetic `Column_{i}` header.
    pub fn from_grid(mut grid: Vec<Row>) -> Option<Self> {
        if grid.is_empty() {
            return None;
        }
        let header_row = grid.remove(0);
        let width = grid.iter().map(|r| r.cells.len()).max().unwrap_or(0);
        let mut headers: Vec<String> = header_row
            .cells
            .iter()
            .map(|c| c.text().map(|t| t.trim().to_string()).unwrap_or_default())
            .collect();
        for i in headers.len()..width {
            headers.push(format!("Column_{i}"));
        }
        Some(Self { headers, rows: grid })
    }

    fn column(&self, names: &[&str]) -> Option<usize> {
        self.headers.iter().position(|h| names.contains(&h.as_str()))
    }
}

struct Columns {
    number: Option<usize>,
    name: usize,
    technique: usize,
    completed: Option<usize>,
    link: Option<usize>,
}

impl Columns {
    fn resolve(table: &Table, path: &Path) -> Result<Self, IoError> {
        let required = |name: &str| {
            table.column(&[name]).ok_or_else(|| IoError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
        };
        Ok(Self {
            number: table.column(&[COL_PROBLEM_NUMBER]),
            name: required(COL_PROBLEM_NAME)?,
            technique: required(COL_TECHNIQUE)?,
            completed: table.column(COMPLETED_ALIASES),
            link: table.column(&[COL_LINK]),
        })
    }
}

/// Map data rows to raw records by header name.
///
/// `Problem Name` and `Technique` headers are required; the rest are optional.
/// Blank rows are skipped. A row's hyperlink wins over its `Link` cell text.
pub fn records_from_table(table: &Table, path: &Path) -> Result<Vec<RawRecord>, IoError> {
    let cols = Columns::resolve(table, path)?;
    let mut records = Vec::with_capacity(table.rows.len());
    let mut blank = 0usize;

    for (idx, row) in table.rows.iter().enumerate() {
        if row.is_blank() {
            blank += 1;
            continue;
        }
        // +2: one for the header, one for 1-based sheet rows
        let sheet_row = idx + 2;
        records.push(RawRecord {
            problem_number: parse_problem_number(row.get(cols.number), sheet_row),
            problem_name: row.get(Some(cols.name)).text(),
            technique: row.get(Some(cols.technique)).text(),
            completed: parse_completed(row.get(cols.completed), sheet_row),
            link: row.hyperlink.clone().or_else(|| row.get(cols.link).text()),
        });
    }

    if blank > 0 {
        debug!(count = blank, "skipped blank rows");
    }
    Ok(records)
}

fn parse_problem_number(cell: &Cell, sheet_row: usize) -> Option<i64> {
    match cell {
        Cell::Empty => None,
        Cell::Int(n) => Some(*n),
        Cell::Float(n) if n.fract() == 0.0 && n.is_finite() => Some(*n as i64),
        Cell::Text(s) if s.trim().is_empty() => None,
        Cell::Text(s) => match s.trim().parse::<i64>() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!(row = sheet_row, value = %s, "ignoring non-integer problem number");
                None
            }
        },
        other => {
            warn!(row = sheet_row, value = ?other, "ignoring non-integer problem number");
            None
        }
    }
}

fn parse_completed(cell: &Cell, sheet_row: usize) -> Option<bool> {
    match cell {
        Cell::Bool(b) => Some(*b),
        Cell::Int(0) => Some(false),
        Cell::Int(1) => Some(true),
        Cell::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "" => None,
            "true" | "yes" | "1" => Some(true),
            "false" | "no" | "0" => Some(false),
            _ => {
                warn!(row = sheet_row, value = %s, "ignoring unrecognised completion flag");
                None
            }
        },
        _ => None,
    }
}
