use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::path::Path;

use super::{LEDGER_HEADERS, TOTALS_HEADERS};
use crate::error::{LedgerError, Result};
use crate::models::{Ledger, MonthlyTotals};

/// One output cell. Amounts are stored as numbers in workbooks.
enum Cell<'a> {
    Text(&'a str),
    Amount(Decimal),
}

fn csv_error(path: &Path, e: csv::Error) -> LedgerError {
    match e.into_kind() {
        csv::ErrorKind::Io(io) => LedgerError::Io(io),
        other => LedgerError::write(path.display().to_string(), format!("{other:?}")),
    }
}

fn xlsx_error(path: &Path, e: XlsxError) -> LedgerError {
    match e {
        XlsxError::IoError(io) => LedgerError::Io(io),
        other => LedgerError::write(path.display().to_string(), other.to_string()),
    }
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"))
}

/// Write a header row plus `rows`. `.xlsx` paths get a single-sheet
/// workbook, anything else CSV.
fn write_table(path: &Path, headers: &[&str], rows: &[Vec<Cell<'_>>]) -> Result<()> {
    if is_workbook(path) {
        write_xlsx(path, headers, rows)
    } else {
        write_csv(path, headers, rows)
    }
}

fn write_csv(path: &Path, headers: &[&str], rows: &[Vec<Cell<'_>>]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path).map_err(|e| csv_error(path, e))?;
    wtr.write_record(headers).map_err(|e| csv_error(path, e))?;
    for row in rows {
        let fields: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Cell::Text(text) => (*text).to_string(),
                Cell::Amount(amount) => amount.to_string(),
            })
            .collect();
        wtr.write_record(&fields).map_err(|e| csv_error(path, e))?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_xlsx(path: &Path, headers: &[&str], rows: &[Vec<Cell<'_>>]) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in (0u16..).zip(headers) {
        sheet
            .write_string(0, col, *header)
            .map_err(|e| xlsx_error(path, e))?;
    }
    for (line, row) in (1u32..).zip(rows) {
        for (col, cell) in (0u16..).zip(row) {
            match cell {
                // Blank cells are left unwritten so they read back empty.
                Cell::Text("") => {}
                Cell::Text(text) => {
                    sheet
                        .write_string(line, col, *text)
                        .map_err(|e| xlsx_error(path, e))?;
                }
                Cell::Amount(amount) => {
                    let number = amount.to_f64().ok_or_else(|| {
                        LedgerError::write(
                            path.display().to_string(),
                            format!("row {}: {amount} is not representable", line + 1),
                        )
                    })?;
                    sheet
                        .write_number(line, col, number)
                        .map_err(|e| xlsx_error(path, e))?;
                }
            }
        }
    }

    workbook.save(path).map_err(|e| xlsx_error(path, e))
}

pub(crate) fn write_ledger(path: &Path, ledger: &Ledger) -> Result<()> {
    let rows: Vec<Vec<Cell<'_>>> = ledger
        .records()
        .iter()
        .map(|record| {
            vec![
                Cell::Text(record.name.as_str()),
                Cell::Text(record.category.label()),
                Cell::Amount(record.delta),
            ]
        })
        .collect();
    write_table(path, &LEDGER_HEADERS, &rows)?;
    log::info!("Wrote {} ledger rows to {}", ledger.len(), path.display());
    Ok(())
}

pub(crate) fn write_totals(path: &Path, totals: &MonthlyTotals) -> Result<()> {
    let months: Vec<String> = totals.rows().iter().map(|r| r.month.to_string()).collect();
    let rows: Vec<Vec<Cell<'_>>> = totals
        .rows()
        .iter()
        .zip(&months)
        .map(|(row, month)| {
            vec![
                Cell::Text(month.as_str()),
                Cell::Amount(row.income),
                Cell::Amount(row.total_expenses),
                Cell::Amount(row.net_worth_change),
            ]
        })
        .collect();
    write_table(path, &TOTALS_HEADERS, &rows)?;
    log::info!("Wrote {} monthly rows to {}", totals.len(), path.display());
    Ok(())
}
