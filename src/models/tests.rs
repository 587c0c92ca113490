#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::error::LedgerError;

fn record(name: &str, category: Category, delta: Decimal) -> ExpenseRecord {
    ExpenseRecord::new(name, category, delta)
}

fn finalized(records: Vec<ExpenseRecord>) -> Ledger {
    let total = records.iter().map(|r| r.delta).sum();
    let mut records = records;
    records.push(ExpenseRecord::net(total));
    Ledger::from_records(records)
}

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_codes() {
    assert_eq!(Category::from_code(1).unwrap(), Category::BasicLife);
    assert_eq!(Category::from_code(7).unwrap(), Category::Income);
    assert_eq!(Category::Transportation.code(), Some(6));
    assert_eq!(Category::Blank.code(), None);
}

#[test]
fn test_category_unknown_code() {
    assert!(matches!(Category::from_code(0), Err(LedgerError::Lookup(_))));
    assert!(matches!(Category::from_code(8), Err(LedgerError::Lookup(_))));
}

#[test]
fn test_category_unknown_label() {
    assert!(matches!(
        Category::from_label("Groceries"),
        Err(LedgerError::Lookup(_))
    ));
}

#[test]
fn test_category_code_roundtrip() {
    for code in 1..=7u8 {
        let cat = Category::from_code(code).unwrap();
        assert_eq!(cat.code(), Some(code));
        let back = Category::from_label(cat.label()).unwrap();
        assert_eq!(back, cat, "Roundtrip failed for code {code}");
    }
}

#[test]
fn test_category_label_roundtrip() {
    for cat in Category::all() {
        let code = cat.code().unwrap();
        assert_eq!(Category::from_code(code).unwrap().label(), cat.label());
    }
}

#[test]
fn test_category_blank_maps_to_itself() {
    assert_eq!(Category::from_label("").unwrap(), Category::Blank);
    assert_eq!(Category::from_label(" ").unwrap(), Category::Blank);
    assert_eq!(Category::from_label(Category::Blank.label()).unwrap(), Category::Blank);
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::MiscWants), "Misc. Wants");
    assert_eq!(Category::all().len(), 7);
}

// ── Month ─────────────────────────────────────────────────────

#[test]
fn test_month_parse() {
    let m = Month::parse("2024-03").unwrap();
    assert_eq!(m, Month::new(2024, 3).unwrap());
    assert_eq!(m.to_string(), "2024-03");
    assert_eq!("2024-03".parse::<Month>().unwrap(), m);
}

#[test]
fn test_month_parse_full_date_truncates() {
    assert_eq!(Month::parse("2023-12-15").unwrap().to_string(), "2023-12");
}

#[test]
fn test_month_parse_invalid() {
    for bad in ["", "March", "2024-13", "2024/03", "24-3-x"] {
        assert!(
            matches!(Month::parse(bad), Err(LedgerError::Validation(_))),
            "expected validation error for {bad:?}"
        );
    }
}

#[test]
fn test_month_ordering_and_ordinal() {
    let dec = Month::parse("2023-12").unwrap();
    let jan = Month::parse("2024-01").unwrap();
    assert!(dec < jan);
    assert_eq!(jan.ordinal() - dec.ordinal(), 1);
    assert_eq!(Month::from_ordinal(jan.ordinal()), jan);
    assert_eq!(Month::from_ordinal(dec.ordinal()), dec);
}

// ── Ledger::update ────────────────────────────────────────────

#[test]
fn test_update_empty_ledger() {
    let ledger = Ledger::new();
    let entries = vec![
        NewEntry::new("Income", 7, dec!(3000)),
        NewEntry::new("Rent", 1, dec!(-1400)),
    ];
    let updated = ledger.update(&entries).unwrap();

    assert_eq!(updated.len(), 3);
    assert_eq!(updated.records()[0].category, Category::Income);
    assert_eq!(updated.records()[1].category, Category::BasicLife);
    let net = updated.records().last().unwrap();
    assert!(net.is_net());
    assert_eq!(net.category, Category::Blank);
    assert_eq!(updated.net(), Some(dec!(1600)));
}

#[test]
fn test_update_replaces_previous_net_row() {
    let ledger = finalized(vec![
        record("Income", Category::Income, dec!(3000)),
        record("Rent", Category::BasicLife, dec!(-1400)),
    ]);
    let updated = ledger
        .update(&[
            NewEntry::new("Groceries", 1, dec!(-250)),
            NewEntry::new("Gas", 6, dec!(-70)),
        ])
        .unwrap();

    assert_eq!(updated.len(), 5);
    assert_eq!(updated.records().iter().filter(|r| r.is_net()).count(), 1);
    assert_eq!(updated.net(), Some(dec!(1280)));
}

#[test]
fn test_update_net_equals_old_plus_new() {
    let old = finalized(vec![
        record("Income 12/1-12/15", Category::Income, dec!(3000)),
        record("Rent", Category::BasicLife, dec!(-1400)),
        record("Roth IRA contribution", Category::Investments, dec!(-500)),
        record("Subs", Category::Subscriptions, dec!(-40.25)),
    ]);
    let entries = vec![
        NewEntry::new("Income 12/15-12/31", 7, dec!(3000)),
        NewEntry::new("Registration for Half Marathon", 2, dec!(-150)),
    ];
    let old_sum: Decimal = old.records()[..old.len() - 1].iter().map(|r| r.delta).sum();
    let new_sum: Decimal = entries.iter().map(|e| e.delta).sum();

    let updated = old.update(&entries).unwrap();
    assert_eq!(updated.net(), Some(old_sum + new_sum));
}

#[test]
fn test_update_is_repeatable() {
    let first = Ledger::new()
        .update(&[NewEntry::new("Income", 7, dec!(100))])
        .unwrap();
    let second = first.update(&[]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_update_single_row_not_stripped() {
    let ledger = Ledger::from_records(vec![record("Rent", Category::BasicLife, dec!(-1400))]);
    let updated = ledger.update(&[NewEntry::new("Gas", 6, dec!(-80))]).unwrap();
    assert_eq!(updated.len(), 3);
    assert_eq!(updated.records()[0].name, "Rent");
    assert_eq!(updated.net(), Some(dec!(-1480)));
}

#[test]
fn test_update_lone_net_row_is_replaced() {
    let ledger = Ledger::from_records(vec![ExpenseRecord::net(dec!(500))]);
    let updated = ledger.update(&[NewEntry::new("Gas", 6, dec!(-80))]).unwrap();
    assert_eq!(updated.len(), 2);
    assert_eq!(updated.net(), Some(dec!(-80)));
}

#[test]
fn test_update_unknown_code_fails() {
    let result = Ledger::new().update(&[NewEntry::new("Mystery", 9, dec!(-1))]);
    assert!(matches!(result, Err(LedgerError::Lookup(_))));
}

// ── Ledger filters and sums ───────────────────────────────────

#[test]
fn test_spend_only_excludes_income_and_net() {
    let ledger = finalized(vec![
        record("Income", Category::Income, dec!(3000)),
        record("Bonus", Category::Income, dec!(200)),
        record("Rent", Category::BasicLife, dec!(-1400)),
        record("Gas", Category::Transportation, dec!(-80)),
    ]);
    let spend = ledger.spend_only();
    let income_rows = ledger.records().iter().filter(|r| r.is_income()).count();

    assert_eq!(spend.len(), ledger.len() - income_rows - 1);
    assert!(spend.records().iter().all(|r| !r.is_income() && !r.is_net()));
    // input untouched
    assert_eq!(ledger.len(), 5);
}

#[test]
fn test_spend_only_of_empty_ledger() {
    assert!(Ledger::new().spend_only().is_empty());
}

#[test]
fn test_income_and_net_worth_change() {
    let ledger = Ledger::new()
        .update(&[
            NewEntry::new("Income", 7, dec!(3000)),
            NewEntry::new("Rent", 1, dec!(-1400)),
        ])
        .unwrap();
    assert_eq!(ledger.income().unwrap(), dec!(3000));
    assert_eq!(ledger.net_worth_change().unwrap(), dec!(1600));
}

#[test]
fn test_update_overflow_is_parse_error() {
    let ledger = Ledger::from_records(vec![
        record("Lottery", Category::Income, Decimal::MAX),
        record("Rent", Category::BasicLife, dec!(-1400)),
    ]);
    let result = ledger.update(&[NewEntry::new("Lottery again", 7, Decimal::MAX)]);
    assert!(matches!(result, Err(LedgerError::Parse { .. })));
}

#[test]
fn test_sums_overflow_is_parse_error() {
    let ledger = Ledger::from_records(vec![
        record("Lottery", Category::Income, Decimal::MAX),
        record("Lottery again", Category::Income, Decimal::MAX),
    ]);
    assert!(matches!(ledger.income(), Err(LedgerError::Parse { .. })));
    assert!(matches!(
        ledger.net_worth_change(),
        Err(LedgerError::Parse { .. })
    ));
}

#[test]
fn test_net_absent_before_finalize() {
    let ledger = Ledger::from_records(vec![record("Rent", Category::BasicLife, dec!(-1))]);
    assert_eq!(ledger.net(), None);
}

// ── MonthlyTotals ─────────────────────────────────────────────

fn row(month: &str, income: Decimal, expenses: Decimal, delta: Decimal) -> MonthlyRow {
    MonthlyRow::new(Month::parse(month).unwrap(), income, expenses, delta)
}

#[test]
fn test_upsert_appends_new_month() {
    let mut totals = MonthlyTotals::new();
    totals.upsert(row("2024-01", dec!(3000), dec!(1400), dec!(1600)));
    totals.upsert(row("2024-02", dec!(3100), dec!(1500), dec!(1600)));
    assert_eq!(totals.len(), 2);
}

#[test]
fn test_upsert_replaces_existing_month() {
    let mut totals = MonthlyTotals::new();
    totals.upsert(row("2024-01", dec!(3000), dec!(1400), dec!(1600)));
    totals.upsert(row("2024-02", dec!(3100), dec!(1500), dec!(1600)));
    totals.upsert(row("2024-01", dec!(6000), dec!(2000), dec!(4000)));

    assert_eq!(totals.len(), 2);
    let jan = totals.get(Month::parse("2024-01").unwrap()).unwrap();
    assert_eq!(jan.income, dec!(6000));
    // replaced row moves to the end
    assert_eq!(totals.rows().last().unwrap().month.to_string(), "2024-01");
}

#[test]
fn test_upsert_is_idempotent() {
    let r = row("2024-05", dec!(10), dec!(5), dec!(5));
    let mut once = MonthlyTotals::new();
    once.upsert(r.clone());
    let mut twice = once.clone();
    twice.upsert(r.clone());

    assert_eq!(once, twice);
    assert_eq!(twice.rows().iter().filter(|x| x.month == r.month).count(), 1);
}

#[test]
fn test_from_rows_deduplicates() {
    let totals = MonthlyTotals::from_rows(vec![
        row("2024-01", dec!(1), dec!(1), dec!(0)),
        row("2024-01", dec!(2), dec!(1), dec!(1)),
    ]);
    assert_eq!(totals.len(), 1);
    assert_eq!(totals.rows()[0].income, dec!(2));
}

#[test]
fn test_chronological_order() {
    let totals = MonthlyTotals::from_rows(vec![
        row("2024-02", dec!(1), dec!(1), dec!(0)),
        row("2023-11", dec!(1), dec!(1), dec!(0)),
        row("2024-01", dec!(1), dec!(1), dec!(0)),
    ]);
    let months: Vec<String> = totals
        .chronological()
        .iter()
        .map(|r| r.month.to_string())
        .collect();
    assert_eq!(months, vec!["2023-11", "2024-01", "2024-02"]);
    assert!(!totals.is_empty());
}
