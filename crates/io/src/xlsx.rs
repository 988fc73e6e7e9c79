// Excel import (xlsx, xlsm, xls, xlsb, ods)
//
// Cell values come from calamine. calamine does not surface hyperlinks, so for
// xlsx/xlsm the sheet XML and its relationships are read directly from the ZIP
// package to recover each hyperlinked cell's target.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use quick_xml::events::Event;
use quick_xml::Reader as XmlReader;
use tracing::{debug, info};
use zip::ZipArchive;

use crate::error::IoError;
use crate::table::{Cell, Row, Table};

/// Import the workbook's active sheet as a table.
pub fn import(path: &Path) -> Result<Table, IoError> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IoError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    if sheet_names.is_empty() {
        return Err(IoError::NoSheets(path.to_path_buf()));
    }

    let package = XlsxPackage::open(path);
    let sheet_idx = package
        .as_ref()
        .map(|p| p.active_sheet_index())
        .unwrap_or(0)
        .min(sheet_names.len() - 1);
    let sheet_name = &sheet_names[sheet_idx];

    let range = workbook.worksheet_range(sheet_name).map_err(|e| IoError::Workbook {
        path: path.to_path_buf(),
        message: format!("failed to read sheet '{}': {}", sheet_name, e),
    })?;

    let hyperlinks = match package {
        Some(mut p) => p.sheet_hyperlinks(sheet_name),
        None => HashMap::new(),
    };

    // Range start offset (data may not begin at A1); keep absolute positions
    // so row 1 is always the header row.
    let (start_row, start_col) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut grid: Vec<Row> = (0..start_row).map(|_| Row::default()).collect();
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; start_col];
        cells.extend(row.iter().map(convert_cell));
        grid.push(Row::new(cells));
    }

    // Hyperlinks in column order: a later column overrides an earlier one.
    let mut linked: Vec<(&(usize, usize), &String)> = hyperlinks.iter().collect();
    linked.sort();
    for (&(row, _), target) in linked {
        if let Some(r) = grid.get_mut(row) {
            r.hyperlink = Some(target.clone());
        }
    }

    info!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = grid.len().saturating_sub(1),
        hyperlinks = hyperlinks.len(),
        "read workbook"
    );

    Table::from_grid(grid).ok_or_else(|| IoError::EmptyInput(path.to_path_buf()))
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Int(n) => Cell::Int(*n),
        Data::Float(n) => Cell::Float(*n),
        Data::Bool(b) => Cell::Bool(*b),
        // Serial number, same as the sheet shows in General format
        Data::DateTime(dt) => Cell::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(e) => Cell::Text(format!("#{:?}", e)),
    }
}

/// The raw XML parts of an xlsx/xlsm package.
struct XlsxPackage<R: Read + std::io::Seek> {
    archive: ZipArchive<R>,
    workbook_xml: String,
    sheets: Vec<SheetPart>,
}

impl XlsxPackage<std::fs::File> {
    /// `None` for anything that is not a readable OOXML package (xls, ods, ...).
    fn open(path: &Path) -> Option<Self> {
        let file = std::fs::File::open(path).ok()?;
        let mut archive = ZipArchive::new(file).ok()?;
        let workbook_xml = read_zip_file(&mut archive, "xl/workbook.xml")?;
        let rels_xml = read_zip_file(&mut archive, "xl/_rels/workbook.xml.rels")?;
        let sheets = sheet_parts(&workbook_xml, &rels_xml);
        Some(Self { archive, workbook_xml, sheets })
    }
}

impl<R: Read + std::io::Seek> XlsxPackage<R> {
    /// `activeTab` of the first `workbookView`, 0 when absent.
    fn active_sheet_index(&self) -> usize {
        let mut reader = XmlReader::from_str(&self.workbook_xml);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"workbookView" =>
                {
                    return e
                        .attributes()
                        .flatten()
                        .find(|a| a.key.as_ref() == b"activeTab")
                        .and_then(|a| String::from_utf8_lossy(&a.value).parse().ok())
                        .unwrap_or(0);
                }
                Ok(Event::Eof) | Err(_) => return 0,
                _ => {}
            }
            buf.clear();
        }
    }

    /// Hyperlink targets of one worksheet keyed by 0-indexed (row, col).
    /// Empty on any read or parse failure.
    fn sheet_hyperlinks(&mut self, sheet_name: &str) -> HashMap<(usize, usize), String> {
        let part = self.sheets.iter().find(|s| s.name == sheet_name);
        let Some(ws_path) = part.and_then(|s| s.path.clone()) else {
            debug!(sheet = %sheet_name, "no worksheet part, hyperlinks skipped");
            return HashMap::new();
        };
        let Some(sheet_xml) = read_zip_file(&mut self.archive, &ws_path) else {
            return HashMap::new();
        };
        let refs = parse_hyperlink_refs(&sheet_xml);
        if refs.is_empty() {
            return HashMap::new();
        }

        let targets = read_zip_file(&mut self.archive, &sheet_rels_path(&ws_path))
            .map(|xml| parse_relationships(&xml))
            .unwrap_or_default();

        let mut links = HashMap::new();
        for (cell_ref, rid) in refs {
            let Some(target) = targets.get(&rid) else {
                debug!(cell = %cell_ref, rid = %rid, "hyperlink without relationship target");
                continue;
            };
            for pos in expand_cell_range(&cell_ref) {
                links.insert(pos, target.clone());
            }
        }
        links
    }
}

/// Read a file from a ZIP archive, returning None on error.
fn read_zip_file<R: Read + std::io::Seek>(archive: &mut ZipArchive<R>, path: &str) -> Option<String> {
    let mut file = archive.by_name(path).ok()?;
    let mut content = String::new();
    file.read_to_string(&mut content).ok()?;
    Some(content)
}

/// One `<sheet>` entry of workbook.xml.
#[derive(Debug, Clone, PartialEq)]
struct SheetPart {
    name: String,
    /// Package path of the worksheet XML; `None` for chartsheets, dialog
    /// sheets and dangling relationships.
    path: Option<String>,
}

/// Every sheet in workbook order, each resolved through its own `r:id`.
fn sheet_parts(workbook_xml: &str, rels_xml: &str) -> Vec<SheetPart> {
    let targets = parse_relationships(rels_xml);
    let mut parts = Vec::new();

    let mut reader = XmlReader::from_str(workbook_xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if e.name().as_ref() == b"sheet" => {
                let mut name = String::new();
                let mut rid = None;
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"name" => name = attr_text(&attr.value),
                        b"r:id" => rid = Some(String::from_utf8_lossy(&attr.value).into_owned()),
                        _ => {}
                    }
                }
                let path = rid
                    .and_then(|rid| targets.get(&rid))
                    .filter(|target| target.contains("worksheets/"))
                    .map(|target| package_path(target));
                parts.push(SheetPart { name, path });
            }
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
        buf.clear();
    }
    parts
}

/// Relationship targets are relative to `xl/` unless they start with `/`.
fn package_path(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None => format!("xl/{}", target),
    }
}

/// `Id` → `Target` for every `<Relationship>` in a .rels part.
fn parse_relationships(rels_xml: &str) -> HashMap<String, String> {
    let mut rid_to_target = HashMap::new();
    let mut reader = XmlReader::from_str(rels_xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if e.name().as_ref() == b"Relationship" =>
            {
                let mut id = None;
                let mut target = None;
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"Id" => id = Some(String::from_utf8_lossy(&attr.value).to_string()),
                        b"Target" => target = Some(attr_text(&attr.value)),
                        _ => {}
                    }
                }
                if let (Some(id), Some(target)) = (id, target) {
                    rid_to_target.insert(id, target);
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }
    rid_to_target
}

/// `(ref, r:id)` for each external `<hyperlink>` in a worksheet. Links that
/// only carry a `location` (jumps within the workbook) have no `r:id` and are
/// skipped.
fn parse_hyperlink_refs(sheet_xml: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    let mut reader = XmlReader::from_str(sheet_xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) if e.name().as_ref() == b"hyperlink" => {
                let mut cell_ref = None;
                let mut rid = None;
                for attr in e.attributes().flatten() {
                    match attr.key.as_ref() {
                        b"ref" => cell_ref = Some(String::from_utf8_lossy(&attr.value).to_string()),
                        b"r:id" => rid = Some(String::from_utf8_lossy(&attr.value).to_string()),
                        _ => {}
                    }
                }
                if let (Some(cell_ref), Some(rid)) = (cell_ref, rid) {
                    out.push((cell_ref, rid));
                }
            }
            Ok(Event::Eof) => break,
            Err(_) => break,
            _ => {}
        }
        buf.clear();
    }
    out
}

/// Attribute value with XML entities (`&amp;` in query strings) resolved.
fn attr_text(raw: &[u8]) -> String {
    let raw = String::from_utf8_lossy(raw);
    match quick_xml::escape::unescape(&raw) {
        Ok(s) => s.into_owned(),
        Err(_) => raw.into_owned(),
    }
}

/// "xl/worksheets/sheet1.xml" → "xl/worksheets/_rels/sheet1.xml.rels"
fn sheet_rels_path(ws_path: &str) -> String {
    match ws_path.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", ws_path),
    }
}

/// Every (row, col) covered by "C2" or "C2:D4".
fn expand_cell_range(cell_ref: &str) -> Vec<(usize, usize)> {
    let (first, last) = match cell_ref.split_once(':') {
        Some((a, b)) => (parse_xlsx_cell_ref(a), parse_xlsx_cell_ref(b)),
        None => {
            let cell = parse_xlsx_cell_ref(cell_ref);
            (cell, cell)
        }
    };
    let (Some((r1, c1)), Some((r2, c2))) = (first, last) else {
        return Vec::new();
    };
    let mut cells = Vec::new();
    for row in r1.min(r2)..=r1.max(r2) {
        for col in c1.min(c2)..=c1.max(c2) {
            cells.push((row, col));
        }
    }
    cells
}

/// "AA10" → (9, 26), 0-indexed. `$` anchors are ignored. `None` for malformed
/// or out-of-range references.
fn parse_xlsx_cell_ref(cell_ref: &str) -> Option<(usize, usize)> {
    let cell_ref = cell_ref.trim().replace('$', "");
    let split = cell_ref.find(|c: char| !c.is_ascii_alphabetic())?;
    let (letters, digits) = cell_ref.split_at(split);
    if letters.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let col = letters.bytes().try_fold(0usize, |acc, b| {
        let digit = usize::from(b.to_ascii_uppercase() - b'A') + 1;
        acc.checked_mul(26)?.checked_add(digit)
    })?;
    let row: usize = digits.parse().ok()?;

    Some((row.checked_sub(1)?, col - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_refs_to_zero_based_positions() {
        assert_eq!(parse_xlsx_cell_ref("A1"), Some((0, 0)));
        assert_eq!(parse_xlsx_cell_ref("E2"), Some((1, 4)));
        assert_eq!(parse_xlsx_cell_ref("aa10"), Some((9, 26)));
        assert_eq!(parse_xlsx_cell_ref("$B$3"), Some((2, 1)));
    }

    #[test]
    fn malformed_cell_refs_are_rejected() {
        assert_eq!(parse_xlsx_cell_ref("A0"), None);
        assert_eq!(parse_xlsx_cell_ref("12"), None);
        assert_eq!(parse_xlsx_cell_ref("B"), None);
        assert_eq!(parse_xlsx_cell_ref("B2C"), None);
        let long = format!("{}1", "Z".repeat(64));
        assert_eq!(parse_xlsx_cell_ref(&long), None);
        assert!(expand_cell_range(&format!("A1:{long}")).is_empty());
    }

    #[test]
    fn test_expand_cell_range() {
        assert_eq!(expand_cell_range("C2"), vec![(1, 2)]);
        assert_eq!(expand_cell_range("B2:C3"), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert!(expand_cell_range("bogus").is_empty());
    }

    #[test]
    fn test_sheet_rels_path() {
        assert_eq!(sheet_rels_path("xl/worksheets/sheet1.xml"), "xl/worksheets/_rels/sheet1.xml.rels");
    }

    #[test]
    fn test_parse_hyperlink_refs_skips_internal() {
        let xml = r#"<worksheet xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
            <sheetData/>
            <hyperlinks>
                <hyperlink ref="E2" r:id="rId1"/>
                <hyperlink ref="E3" location="'Sheet2'!A1" display="jump"/>
                <hyperlink ref="B4:B5" r:id="rId2"/>
            </hyperlinks>
        </worksheet>"#;
        assert_eq!(
            parse_hyperlink_refs(xml),
            vec![("E2".to_string(), "rId1".to_string()), ("B4:B5".to_string(), "rId2".to_string())]
        );
    }

    #[test]
    fn test_parse_relationships_unescapes_targets() {
        let xml = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>
        </Relationships>"#;
        let rels = parse_relationships(xml);
        assert_eq!(rels.get("rId1").map(String::as_str), Some("https://example.com/?a=1&b=2"));
    }

    fn part(name: &str, path: Option<&str>) -> SheetPart {
        SheetPart { name: name.to_string(), path: path.map(str::to_string) }
    }

    #[test]
    fn sheet_parts_follow_each_sheets_own_rid() {
        let workbook = r#"<workbook xmlns:r="r"><sheets>
            <sheet name="Chart" sheetId="1" r:id="rId3"/>
            <sheet name="Problems" sheetId="2" r:id="rId1"/>
            <sheet name="Notes &amp; Links" sheetId="3" r:id="rId2"/>
        </sheets></workbook>"#;
        let rels = r#"<Relationships>
            <Relationship Id="rId1" Target="worksheets/sheet1.xml"/>
            <Relationship Id="rId2" Target="/xl/worksheets/sheet2.xml"/>
            <Relationship Id="rId3" Target="chartsheets/sheet1.xml"/>
            <Relationship Id="rId4" Target="styles.xml"/>
        </Relationships>"#;
        assert_eq!(
            sheet_parts(workbook, rels),
            vec![
                part("Chart", None),
                part("Problems", Some("xl/worksheets/sheet1.xml")),
                part("Notes & Links", Some("xl/worksheets/sheet2.xml")),
            ]
        );
    }

    #[test]
    fn test_convert_cell() {
        assert_eq!(convert_cell(&Data::Empty), Cell::Empty);
        assert_eq!(convert_cell(&Data::String(String::new())), Cell::Empty);
        assert_eq!(convert_cell(&Data::Float(42.0)), Cell::Float(42.0));
        assert_eq!(convert_cell(&Data::Bool(true)), Cell::Bool(true));
    }
}
