use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::f64::consts::PI;
use std::path::Path;

use super::chart_error;
use crate::error::{LedgerError, Result};
use crate::models::Month;
use crate::report::{breakdown_total, CategoryAmount};
use crate::util::format_amount;

pub(crate) const PIE_SIZE: (u32, u32) = (1600, 1200);

const PALETTE: [RGBColor; 6] = [
    RGBColor(240, 128, 128), // lightcoral
    RGBColor(255, 218, 185), // peachpuff
    RGBColor(255, 250, 205), // lemonchiffon
    RGBColor(152, 251, 152), // palegreen
    RGBColor(135, 206, 250), // lightskyblue
    RGBColor(230, 230, 250), // lavender
];

/// Dollar value shown inside a slice, recovered from the slice's share of
/// the total the way a percentage label would be computed.
pub(crate) fn slice_dollars(amount: Decimal, total: Decimal) -> Result<Decimal> {
    if total <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }
    amount
        .checked_div(total)
        .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|percent| percent.checked_div(Decimal::ONE_HUNDRED))
        .and_then(|share| share.checked_mul(total))
        .map(|dollars| dollars.round_dp(2))
        .ok_or_else(|| LedgerError::parse("category breakdown", "slice amount overflows a decimal"))
}

/// Angular extent `(start, end)` in radians of each slice, counterclockwise
/// from three o'clock. Non-positive amounts get an empty slice.
pub(crate) fn slice_angles(breakdown: &[CategoryAmount], total: Decimal) -> Vec<(f64, f64)> {
    let total = total.to_f64().unwrap_or(0.0);
    let mut start = 0.0;
    breakdown
        .iter()
        .map(|c| {
            let amount = c.amount.to_f64().unwrap_or(0.0).max(0.0);
            let sweep = if total > 0.0 { 2.0 * PI * amount / total } else { 0.0 };
            let span = (start, start + sweep);
            start += sweep;
            span
        })
        .collect()
}

fn point_at(center: (i32, i32), radius: f64, theta: f64) -> (i32, i32) {
    (
        center.0 + (radius * theta.cos()).round() as i32,
        center.1 - (radius * theta.sin()).round() as i32,
    )
}

fn wedge(center: (i32, i32), radius: f64, start: f64, end: f64) -> Vec<(i32, i32)> {
    let steps = (((end - start) / (PI / 180.0)).ceil() as usize).max(1);
    let mut points = Vec::with_capacity(steps + 2);
    points.push(center);
    for i in 0..=steps {
        let theta = start + (end - start) * i as f64 / steps as f64;
        points.push(point_at(center, radius, theta));
    }
    points
}

pub(crate) fn render_pie(path: &Path, month: Month, breakdown: &[CategoryAmount]) -> Result<()> {
    let root = BitMapBackend::new(path, PIE_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_error)?;
    let area = root
        .titled(
            &format!("Expenses pie chart for {month}."),
            ("sans-serif", 48).into_font().color(&BLACK),
        )
        .map_err(chart_error)?;

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.36;
    let total = breakdown_total(breakdown)?;

    let label_font = ("sans-serif", 30).into_font();
    let value_font = ("sans-serif", 28).into_font();

    for (i, (slice, (start, end))) in breakdown
        .iter()
        .zip(slice_angles(breakdown, total))
        .enumerate()
    {
        if end <= start {
            log::warn!("Skipping {} in pie chart: no spending", slice.category);
            continue;
        }
        let color = PALETTE[i % PALETTE.len()];
        area.draw(&Polygon::new(wedge(center, radius, start, end), color.filled()))
            .map_err(chart_error)?;

        let mid = (start + end) / 2.0;
        let h_pos = if mid.cos() >= 0.0 { HPos::Left } else { HPos::Right };
        area.draw(&Text::new(
            slice.category.label().to_string(),
            point_at(center, radius * 1.1, mid),
            label_font.color(&BLACK).pos(Pos::new(h_pos, VPos::Center)),
        ))
        .map_err(chart_error)?;

        area.draw(&Text::new(
            format_amount(slice_dollars(slice.amount, total)?),
            point_at(center, radius * 0.6, mid),
            value_font
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        ))
        .map_err(chart_error)?;
    }

    area.draw(&Text::new(
        format!("Total: {}", format_amount(total.round_dp(2))),
        (width as i32 - 40, height as i32 - 40),
        ("sans-serif", 36)
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Right, VPos::Bottom)),
    ))
    .map_err(chart_error)?;

    root.present().map_err(chart_error)?;
    log::info!("Saved pie chart to {}", path.display());
    Ok(())
}
