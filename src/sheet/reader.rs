use calamine::{open_workbook_auto, Reader};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::error::{LedgerError, Result};

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

/// Read every row of a spreadsheet as trimmed strings. Workbooks are read
/// from their first sheet; anything else is treated as CSV.
pub(crate) fn read_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    if !path.is_file() {
        return Err(LedgerError::parse(
            path.display().to_string(),
            "file not found",
        ));
    }

    let suffix = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let rows = if WORKBOOK_EXTENSIONS.contains(&suffix.as_str()) {
        read_workbook_rows(path)?
    } else {
        read_csv_rows(path)?
    };
    log::debug!("Read {} raw rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let source = path.display().to_string();
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(false)
        .from_path(path)
        .map_err(|e| LedgerError::parse(&source, e.to_string()))?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| LedgerError::parse(&source, e.to_string()))?;
        rows.push(record.iter().map(|s| s.trim().to_string()).collect());
    }
    Ok(rows)
}

fn read_workbook_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let source = path.display().to_string();
    let mut workbook =
        open_workbook_auto(path).map_err(|e| LedgerError::parse(&source, e.to_string()))?;
    let first_sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| LedgerError::parse(&source, "workbook has no sheets"))?;

    let range = workbook
        .worksheet_range(&first_sheet)
        .map_err(|e| LedgerError::parse(&source, e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(|cell| cell.to_string().trim().to_string()).collect())
        .collect())
}

/// Drop the header row and any fully blank rows. Returned rows keep their
/// 1-based line number in the source for error messages.
pub(crate) fn data_rows(rows: Vec<Vec<String>>) -> Vec<(usize, Vec<String>)> {
    rows.into_iter()
        .enumerate()
        .skip(1)
        .filter(|(_, row)| row.iter().any(|cell| !cell.is_empty()))
        .map(|(i, row)| (i + 1, row))
        .collect()
}

/// Cell at `index`, or a parse error naming the row when the row is short.
pub(crate) fn cell<'a>(row: &'a [String], index: usize, line: usize, source: &str) -> Result<&'a str> {
    row.get(index).map(String::as_str).ok_or_else(|| {
        LedgerError::parse(
            source,
            format!("row {line}: expected at least {} columns", index + 1),
        )
    })
}

/// Parse a money cell. Currency symbols, thousands separators and
/// accounting-style parentheses are accepted, as is scientific notation.
pub(crate) fn parse_decimal(s: &str) -> Option<Decimal> {
    let cleaned = s
        .replace(['$', ','], "")
        .replace('(', "-")
        .replace(')', "")
        .trim()
        .to_string();
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .ok()
}

pub(crate) fn amount(row: &[String], index: usize, line: usize, source: &str) -> Result<Decimal> {
    let raw = cell(row, index, line, source)?;
    parse_decimal(raw).ok_or_else(|| {
        LedgerError::parse(source, format!("row {line}: '{raw}' is not an amount"))
    })
}
