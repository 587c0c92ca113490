//! Ledger and monthly-totals spreadsheets.
//!
//! Both files are read positionally: the first row is a header whose text
//! is ignored. Output is written with the canonical headers, as a workbook
//! for `.xlsx` paths and CSV otherwise.

mod reader;
mod writer;

use rust_decimal::prelude::ToPrimitive;
use std::path::Path;

use crate::error::{LedgerError, Result};
use crate::models::{Category, ExpenseRecord, Ledger, Month, MonthlyRow, MonthlyTotals, NewEntry};

pub(crate) use reader::parse_decimal;
pub(crate) use writer::{write_ledger, write_totals};

pub(crate) const LEDGER_HEADERS: [&str; 3] = ["Expense Name", "Expense Class", "Change in Net Worth"];
pub(crate) const TOTALS_HEADERS: [&str; 4] = [
    "Month",
    "Income",
    "Total Expenses",
    "Approx. Change in Net Worth",
];

/// Load a ledger, or start an empty one when no source is given.
pub(crate) fn load_ledger(source: Option<&Path>) -> Result<Ledger> {
    let Some(path) = source else {
        log::info!("Starting a new ledger");
        return Ok(Ledger::new());
    };

    let name = path.display().to_string();
    let mut records = Vec::new();
    for (line, row) in reader::data_rows(reader::read_rows(path)?) {
        let expense_name = reader::cell(&row, 0, line, &name)?;
        // A blank category cell may be missing entirely on the Net row.
        let label = row.get(1).map(String::as_str).unwrap_or_default();
        let category = Category::from_label(label)?;
        let delta = reader::amount(&row, 2, line, &name)?;
        records.push(ExpenseRecord::new(expense_name, category, delta));
    }

    log::info!("Loaded {} ledger rows from {name}", records.len());
    Ok(Ledger::from_records(records))
}

/// Load the monthly totals table, or start an empty one.
pub(crate) fn load_totals(source: Option<&Path>) -> Result<MonthlyTotals> {
    let Some(path) = source else {
        log::info!("Starting a new monthly totals table");
        return Ok(MonthlyTotals::new());
    };

    let name = path.display().to_string();
    let mut rows = Vec::new();
    for (line, row) in reader::data_rows(reader::read_rows(path)?) {
        let month = Month::parse(reader::cell(&row, 0, line, &name)?)
            .map_err(|e| LedgerError::parse(&name, format!("row {line}: {e}")))?;
        rows.push(MonthlyRow::new(
            month,
            reader::amount(&row, 1, line, &name)?,
            reader::amount(&row, 2, line, &name)?,
            reader::amount(&row, 3, line, &name)?,
        ));
    }

    log::info!("Loaded {} monthly rows from {name}", rows.len());
    Ok(MonthlyTotals::from_rows(rows))
}

/// Parse a category code cell. Workbooks store numbers as floats, so
/// "3.0" is accepted alongside "3".
pub(crate) fn parse_code(raw: &str) -> Result<u8> {
    parse_decimal(raw)
        .filter(|d| d.fract().is_zero())
        .and_then(|d| d.to_u8())
        .ok_or_else(|| LedgerError::Lookup(format!("code '{raw}'")))
}

/// Load new entries laid out like a ledger, except the class column holds
/// the numeric category code.
pub(crate) fn load_entries(path: &Path) -> Result<Vec<NewEntry>> {
    let name = path.display().to_string();
    let mut entries = Vec::new();
    for (line, row) in reader::data_rows(reader::read_rows(path)?) {
        let expense_name = reader::cell(&row, 0, line, &name)?;
        let code = parse_code(reader::cell(&row, 1, line, &name)?)?;
        let delta = reader::amount(&row, 2, line, &name)?;
        entries.push(NewEntry::new(expense_name, code, delta));
    }
    log::info!("Loaded {} new entries from {name}", entries.len());
    Ok(entries)
}
