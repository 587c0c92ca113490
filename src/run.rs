mod cli;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::chart;
use crate::models::{Month, NewEntry};
use crate::report::{self, CategoryAmount, MonthlyAggregate};
use crate::sheet;

pub(crate) use cli::as_cli;

pub(crate) const TOTALS_FILE_NAME: &str = "monthly totals.xlsx";

pub(crate) fn ledger_file_name(month: Month) -> String {
    format!("{month}.xlsx")
}

/// Everything one logging run needs.
#[derive(Debug, Clone)]
pub(crate) struct RunOptions {
    pub(crate) month: Month,
    /// Existing ledger; `None` starts a new one.
    pub(crate) ledger: Option<PathBuf>,
    /// Existing monthly totals; `None` starts a new table.
    pub(crate) totals: Option<PathBuf>,
    pub(crate) entries: Vec<NewEntry>,
    pub(crate) output_dir: PathBuf,
    pub(crate) render_charts: bool,
    pub(crate) show_charts: bool,
}

impl RunOptions {
    pub(crate) fn new(month: Month) -> Self {
        Self {
            month,
            ledger: None,
            totals: None,
            entries: Vec::new(),
            output_dir: PathBuf::from("."),
            render_charts: true,
            show_charts: false,
        }
    }
}

#[derive(Debug)]
pub(crate) struct RunSummary {
    pub(crate) month: Month,
    pub(crate) breakdown: Vec<CategoryAmount>,
    pub(crate) aggregate: MonthlyAggregate,
    pub(crate) ledger_path: PathBuf,
    pub(crate) totals_path: PathBuf,
    pub(crate) charts: Vec<PathBuf>,
}

/// Merge the entries into the month's ledger, refresh the monthly totals,
/// draw both charts and write both tables. Files written before a failure
/// are left in place.
pub(crate) fn pipeline(opts: &RunOptions) -> Result<RunSummary> {
    let month = opts.month;
    let out = opts.output_dir.as_path();
    std::fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let ledger = sheet::load_ledger(opts.ledger.as_deref())?;
    if opts.entries.is_empty() {
        log::warn!("No new entries for {month}; only recomputing totals");
        if ledger.is_empty() {
            log::warn!("The {month} ledger will only hold a zero Net row");
        }
    }
    let ledger = ledger.update(&opts.entries)?;
    log::info!(
        "Ledger for {month} now has {} rows, net {}",
        ledger.len(),
        ledger.net().unwrap_or_default()
    );

    let spend = ledger.spend_only();
    let breakdown = report::category_breakdown(&spend)?;
    let mut charts = Vec::new();
    if opts.render_charts {
        let pie_path = out.join(chart::pie_file_name(month));
        chart::render_pie(&pie_path, month, &breakdown)?;
        show(opts, &pie_path);
        charts.push(pie_path);
    }

    let aggregate = MonthlyAggregate::compute(&ledger, &breakdown)?;
    let totals = report::merge_month(month, opts.totals.as_deref(), &aggregate)?;

    if opts.render_charts {
        let trend_path = out.join(chart::TREND_FILE_NAME);
        chart::render_trend(&trend_path, &totals)?;
        show(opts, &trend_path);
        charts.push(trend_path);
    }

    let ledger_path = out.join(ledger_file_name(month));
    sheet::write_ledger(&ledger_path, &ledger)?;
    let totals_path = out.join(TOTALS_FILE_NAME);
    sheet::write_totals(&totals_path, &totals)?;

    Ok(RunSummary {
        month,
        breakdown,
        aggregate,
        ledger_path,
        totals_path,
        charts,
    })
}

fn show(opts: &RunOptions, path: &Path) {
    if opts.show_charts {
        chart::reveal(path);
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
