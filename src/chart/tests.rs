#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::f64::consts::PI;
use std::path::Path;

use super::pie::{slice_angles, slice_dollars};
use super::trend::y_ceiling;
use super::*;
use crate::models::{Category, MonthlyRow, MonthlyTotals};
use crate::report::CategoryAmount;

fn amount(category: Category, amount: Decimal) -> CategoryAmount {
    CategoryAmount { category, amount }
}

#[test]
fn test_file_names() {
    let month = Month::parse("2024-01").unwrap();
    assert_eq!(pie_file_name(month), "2024-01 pie chart.png");
    assert_eq!(TREND_FILE_NAME, "monthly-totals.png");
}

// ── pie ───────────────────────────────────────────────────────

#[test]
fn test_slice_dollars_recovers_amount() {
    let total = dec!(2420);
    for value in [dec!(1550), dec!(500), dec!(250), dec!(40), dec!(80)] {
        assert_eq!(slice_dollars(value, total).unwrap(), value);
    }
}

#[test]
fn test_slice_dollars_rounds_to_cents() {
    assert_eq!(slice_dollars(dec!(33.333), dec!(100)).unwrap(), dec!(33.33));
}

#[test]
fn test_slice_dollars_zero_total() {
    assert_eq!(slice_dollars(dec!(5), Decimal::ZERO).unwrap(), Decimal::ZERO);
}

#[test]
fn test_slice_angles_cover_full_circle() {
    let breakdown = vec![
        amount(Category::BasicLife, dec!(1500)),
        amount(Category::Health, dec!(500)),
    ];
    let angles = slice_angles(&breakdown, dec!(2000));
    assert_eq!(angles.len(), 2);
    assert_eq!(angles[0].0, 0.0);
    assert!((angles[0].1 - 1.5 * PI).abs() < 1e-9);
    assert_eq!(angles[1].0, angles[0].1);
    assert!((angles[1].1 - 2.0 * PI).abs() < 1e-9);
}

#[test]
fn test_slice_angles_skip_non_positive() {
    let breakdown = vec![
        amount(Category::Health, dec!(0)),
        amount(Category::MiscWants, dec!(10)),
    ];
    let angles = slice_angles(&breakdown, dec!(10));
    assert_eq!(angles[0].0, angles[0].1);
    assert!((angles[1].1 - 2.0 * PI).abs() < 1e-9);
}

// ── trend ─────────────────────────────────────────────────────

#[test]
fn test_y_ceiling_headroom() {
    let row = MonthlyRow::new(
        Month::parse("2024-01").unwrap(),
        dec!(3000),
        dec!(1400),
        dec!(1600),
    );
    assert!((y_ceiling(&[&row]) - 3300.0).abs() < 1e-6);
}

#[test]
fn test_y_ceiling_floor() {
    assert_eq!(y_ceiling(&[]), 1.0);
    let row = MonthlyRow::new(
        Month::parse("2024-01").unwrap(),
        dec!(0),
        dec!(0),
        dec!(-50),
    );
    assert_eq!(y_ceiling(&[&row]), 1.0);
}

#[test]
fn test_reveal_without_display_is_noop() {
    assert!(!reveal_on(Path::new("missing.png"), false));
}

// ── rendering ─────────────────────────────────────────────────

#[test]
fn test_render_pie_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let month = Month::parse("2024-01").unwrap();
    let path = dir.path().join(pie_file_name(month));
    let breakdown = vec![
        amount(Category::BasicLife, dec!(1400)),
        amount(Category::Transportation, dec!(80)),
    ];

    render_pie(&path, month, &breakdown).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_render_pie_empty_breakdown() {
    let dir = tempfile::tempdir().unwrap();
    let month = Month::parse("2024-02").unwrap();
    let path = dir.path().join(pie_file_name(month));

    render_pie(&path, month, &[]).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn test_render_trend_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(TREND_FILE_NAME);
    let totals = MonthlyTotals::from_rows(vec![
        MonthlyRow::new(Month::parse("2024-02").unwrap(), dec!(3000), dec!(1500), dec!(1500)),
        MonthlyRow::new(Month::parse("2024-01").unwrap(), dec!(3000), dec!(1400), dec!(1600)),
    ]);

    render_trend(&path, &totals).unwrap();
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
