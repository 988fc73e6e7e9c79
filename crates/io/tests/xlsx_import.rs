// Excel import against workbooks written with rust_xlsxwriter.

use std::path::Path;

use leetsheet_io::load_records;
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use tempfile::tempdir;

fn write_header(ws: &mut Worksheet) -> Result<(), XlsxError> {
    for (col, name) in ["Problem Number", "Problem Name", "Technique", "Completed?", "Link"]
        .iter()
        .enumerate()
    {
        ws.write_string(0, col as u16, *name)?;
    }
    Ok(())
}

fn problems_workbook(path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    write_header(ws)?;

    ws.write_number(1, 0, 42)?;
    ws.write_string(1, 1, "42. Trapping Rain Water")?;
    ws.write_string(1, 2, "Two Pointers")?;
    ws.write_boolean(1, 3, true)?;
    ws.write_url_with_text(1, 4, "https://leetcode.com/problems/trapping-rain-water/", "open")?;

    ws.write_number(2, 0, 70)?;
    ws.write_string(2, 1, "70. Climbing Stairs")?;
    ws.write_string(2, 2, "DP")?;
    ws.write_boolean(2, 3, false)?;
    ws.write_string(2, 4, "https://leetcode.com/problems/climbing-stairs/")?;

    // Row 4 left blank on purpose

    ws.write_url_with_text(4, 1, "https://leetcode.com/problems/same-tree/", "100. Same Tree")?;
    ws.write_string(4, 2, "DFS")?;

    workbook.save(path)
}

#[test]
fn reads_values_and_types() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("leetcode problems.xlsx");
    problems_workbook(&path).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 3, "blank row skipped");

    assert_eq!(records[0].problem_number, Some(42));
    assert_eq!(records[0].problem_name.as_deref(), Some("42. Trapping Rain Water"));
    assert_eq!(records[0].completed, Some(true));
    assert_eq!(records[1].completed, Some(false));
    assert_eq!(records[2].problem_number, None);
    assert_eq!(records[2].completed, None);
}

#[test]
fn hyperlink_target_wins_over_cell_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("leetcode problems.xlsx");
    problems_workbook(&path).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(
        records[0].link.as_deref(),
        Some("https://leetcode.com/problems/trapping-rain-water/")
    );
    // Plain text link kept as written
    assert_eq!(records[1].link.as_deref(), Some("https://leetcode.com/problems/climbing-stairs/"));
    // Hyperlink on the name cell still becomes the row's link
    assert_eq!(records[2].link.as_deref(), Some("https://leetcode.com/problems/same-tree/"));
    assert_eq!(records[2].problem_name.as_deref(), Some("100. Same Tree"));
}

#[test]
fn reads_the_active_sheet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("two sheets.xlsx");

    let mut workbook = Workbook::new();
    {
        let notes = workbook.add_worksheet();
        notes.set_name("Notes").unwrap();
        notes.write_string(0, 0, "nothing to see").unwrap();
    }
    {
        let ws = workbook.add_worksheet();
        ws.set_name("Problems").unwrap();
        write_header(ws).unwrap();
        ws.write_string(1, 1, "1. Two Sum").unwrap();
        ws.write_string(1, 2, "Hash Map").unwrap();
        ws.write_url(1, 4, "https://leetcode.com/problems/two-sum/").unwrap();
        ws.set_active(true);
    }
    workbook.save(&path).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].technique.as_deref(), Some("Hash Map"));
    assert_eq!(records[0].link.as_deref(), Some("https://leetcode.com/problems/two-sum/"));
}

#[test]
fn missing_required_header_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.xlsx");

    let mut workbook = Workbook::new();
    let ws = workbook.add_worksheet();
    ws.write_string(0, 0, "Problem Name").unwrap();
    ws.write_string(1, 0, "1. Two Sum").unwrap();
    workbook.save(&path).unwrap();

    let err = load_records(&path).unwrap_err();
    assert!(err.to_string().contains("missing required column 'Technique'"));
}
