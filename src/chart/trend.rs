use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::path::Path;

use super::chart_error;
use crate::error::Result;
use crate::models::{Month, MonthlyRow, MonthlyTotals};

pub(crate) const TREND_SIZE: (u32, u32) = (1800, 1200);

const BACKGROUND: RGBColor = RGBColor(224, 255, 255); // lightcyan
const INCOME_COLOR: RGBColor = RGBColor(0, 191, 255); // deepskyblue
const EXPENSES_COLOR: RGBColor = RGBColor(128, 0, 0); // maroon
const NET_COLOR: RGBColor = RGBColor(127, 255, 0); // chartreuse

type Series = (&'static str, RGBColor, fn(&MonthlyRow) -> Decimal);

const SERIES: [Series; 3] = [
    ("Income", INCOME_COLOR, income),
    ("Total Expenses", EXPENSES_COLOR, total_expenses),
    ("Change in Net Worth", NET_COLOR, net_worth_change),
];

fn income(row: &MonthlyRow) -> Decimal {
    row.income
}

fn total_expenses(row: &MonthlyRow) -> Decimal {
    row.total_expenses
}

fn net_worth_change(row: &MonthlyRow) -> Decimal {
    row.net_worth_change
}

/// Top of the y axis: a tenth of headroom over the largest value, never
/// below one dollar so an all-zero table still gets an axis.
pub(crate) fn y_ceiling(rows: &[&MonthlyRow]) -> f64 {
    let max = rows
        .iter()
        .flat_map(|r| SERIES.iter().map(move |series| (series.2)(*r)))
        .filter_map(|v| v.to_f64())
        .fold(0.0_f64, f64::max);
    (max * 1.1).max(1.0)
}

pub(crate) fn render_trend(path: &Path, totals: &MonthlyTotals) -> Result<()> {
    if totals.is_empty() {
        log::warn!("No monthly totals to plot");
    }
    let rows = totals.chronological();
    let first = rows.first().map(|r| r.month.ordinal()).unwrap_or_default();
    let last = rows.last().map(|r| r.month.ordinal()).unwrap_or(first);

    let root = BitMapBackend::new(path, TREND_SIZE).into_drawing_area();
    root.fill(&BACKGROUND).map_err(chart_error)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Monthly Plots for Income, Total Expenses, and Change in Net Worth.",
            ("sans-serif", 40),
        )
        .margin(30)
        .x_label_area_size(70)
        .y_label_area_size(110)
        .build_cartesian_2d((first - 1)..(last + 1), 0.0..y_ceiling(&rows))
        .map_err(chart_error)?;

    chart
        .configure_mesh()
        .x_desc("Month")
        .y_desc("Dollar amount ($)")
        .x_labels((last - first + 3) as usize)
        .x_label_formatter(&|v| Month::from_ordinal(*v).to_string())
        .y_label_formatter(&|v| format!("{v:.0}"))
        .label_style(("sans-serif", 22))
        .axis_desc_style(("sans-serif", 26))
        .draw()
        .map_err(chart_error)?;

    for (name, color, value) in SERIES {
        let points: Vec<(i32, f64)> = rows
            .iter()
            .map(|r| (r.month.ordinal(), value(*r).to_f64().unwrap_or(0.0)))
            .collect();
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(3)).point_size(7))
            .map_err(chart_error)?
            .label(name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color.stroke_width(3)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .label_font(("sans-serif", 24))
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    log::info!("Saved monthly trend chart to {}", path.display());
    Ok(())
}
