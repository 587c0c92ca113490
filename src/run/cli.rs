use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use super::{pipeline, RunOptions, RunSummary};
use crate::models::{Month, NewEntry};
use crate::sheet::{self, parse_decimal};
use crate::util::{format_amount, shellexpand};

/// Answer that means "start a new file" at the path prompts.
const NEW_FILE_SENTINEL: &str = "None";

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    let flags = match parse_args(&args[1..])? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("ledgerlog {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::Log(flags) => flags,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let opts = resolve_options(flags, &mut input, &mut output)?;

    let summary = pipeline(&opts)?;
    print_summary(&summary);
    Ok(())
}

fn print_usage() {
    println!("ledgerlog — append expenses to a monthly ledger and chart the month");
    println!();
    println!("Usage: ledgerlog [options]");
    println!();
    println!("Options (anything not given is asked for interactively):");
    println!("  --month <YYYY-MM>             Month being logged");
    println!("  --ledger <file|None>          Ledger to update (.csv or .xlsx), None for a new one");
    println!("  --totals <file|None>          Monthly totals to update, None for a new table");
    println!("  --entries <file.csv>          New entries: name, category code, amount");
    println!("  --entry \"<name>,<code>,<amt>\" Add one entry (repeatable)");
    println!("  --out <dir>                   Directory for YYYY-MM.xlsx, monthly totals.xlsx and charts (default: .)");
    println!("  --no-charts                   Skip chart rendering");
    println!("  --show                        Open the charts after saving them");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Category codes:");
    for cat in crate::models::Category::all() {
        println!("  {}  {cat}", cat.code().unwrap_or_default());
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Version,
    Log(Flags),
}

/// Options as given on the command line, before prompting.
#[derive(Debug, Default, PartialEq)]
struct Flags {
    month: Option<String>,
    ledger: Option<String>,
    totals: Option<String>,
    entries_file: Option<String>,
    entries: Vec<NewEntry>,
    output_dir: Option<String>,
    no_charts: bool,
    show: bool,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut flags = Flags::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |name: &str| {
            iter.next()
                .cloned()
                .with_context(|| format!("Missing value for {name}"))
        };
        match arg.as_str() {
            "--help" | "-h" | "help" => return Ok(Command::Help),
            "--version" | "-V" | "version" => return Ok(Command::Version),
            "--month" => flags.month = Some(value("--month")?),
            "--ledger" => flags.ledger = Some(value("--ledger")?),
            "--totals" => flags.totals = Some(value("--totals")?),
            "--entries" => flags.entries_file = Some(value("--entries")?),
            "--entry" => flags.entries.push(parse_entry(&value("--entry")?)?),
            "--out" => flags.output_dir = Some(value("--out")?),
            "--no-charts" => flags.no_charts = true,
            "--show" => flags.show = true,
            other => {
                print_usage();
                anyhow::bail!("Unknown argument: {other}");
            }
        }
    }
    Ok(Command::Log(flags))
}

/// Parse `"<name>,<code>,<amount>"`. The name may itself contain commas;
/// the last two fields are always code and amount.
fn parse_entry(raw: &str) -> Result<NewEntry> {
    let mut fields = raw.rsplitn(3, ',');
    let (Some(amount), Some(code), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        anyhow::bail!("Entry '{raw}' should look like \"<name>,<code>,<amount>\"");
    };

    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Entry '{raw}' has no name");
    }
    let code = sheet::parse_code(code.trim())?;
    let delta = parse_decimal(amount)
        .with_context(|| format!("Entry '{raw}': '{}' is not an amount", amount.trim()))?;
    Ok(NewEntry::new(name, code, delta))
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    write!(output, "{question} ")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read answer")?;
    Ok(line.trim().to_string())
}

/// `None` (any case) or an empty answer means "start a new file".
fn optional_path(answer: &str) -> Option<PathBuf> {
    let trimmed = answer.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NEW_FILE_SENTINEL) {
        None
    } else {
        Some(PathBuf::from(shellexpand(trimmed)))
    }
}

fn resolve_options(
    flags: Flags,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<RunOptions> {
    let month = match flags.month {
        Some(m) => m,
        None => prompt(
            input,
            output,
            "Please enter the month you'd like to log in \"YYYY-MM\" format.",
        )?,
    };
    let month = Month::parse(&month)?;

    let ledger = match flags.ledger {
        Some(p) => p,
        None => prompt(
            input,
            output,
            "Name the expense file you would like to update. If you want to initialize a file, write None.",
        )?,
    };
    let totals = match flags.totals {
        Some(p) => p,
        None => prompt(
            input,
            output,
            "Name the monthly totals file you would like to use/update. If you want to initialize a file, write None.",
        )?,
    };

    let mut entries = Vec::new();
    if let Some(file) = &flags.entries_file {
        entries.extend(sheet::load_entries(&PathBuf::from(shellexpand(file)))?);
    }
    entries.extend(flags.entries);

    let mut opts = RunOptions::new(month);
    opts.ledger = optional_path(&ledger);
    opts.totals = optional_path(&totals);
    opts.entries = entries;
    if let Some(dir) = flags.output_dir {
        opts.output_dir = PathBuf::from(shellexpand(&dir));
    }
    opts.render_charts = !flags.no_charts;
    opts.show_charts = flags.show;
    Ok(opts)
}

fn print_summary(summary: &RunSummary) {
    let agg = &summary.aggregate;
    println!("ledgerlog — {}", summary.month);
    println!("{}", "─".repeat(40));
    println!("  Income:       {}", format_amount(agg.income));
    println!("  Expenses:     {}", format_amount(agg.total_expenses));
    println!("  Net Change:   {}", format_amount(agg.net_worth_change));

    if !summary.breakdown.is_empty() {
        println!();
        println!("Spending by Category:");
        for slice in &summary.breakdown {
            println!("  {:<24} {}", slice.category.label(), format_amount(slice.amount));
        }
    }

    println!();
    println!("Ledger:         {}", summary.ledger_path.display());
    println!("Monthly totals: {}", summary.totals_path.display());
    for chart in &summary.charts {
        println!("Chart:          {}", chart.display());
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
