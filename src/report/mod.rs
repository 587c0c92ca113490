use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{LedgerError, Result};
use crate::models::{Category, Ledger, Month, MonthlyRow, MonthlyTotals};
use crate::util::checked_sum;

/// Spending for one category, as a non-negative amount.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryAmount {
    pub(crate) category: Category,
    pub(crate) amount: Decimal,
}

/// Group a spend-only ledger by category label (ascending) and negate the
/// per-category sums so spending reads as a positive amount. A category
/// whose refunds outweigh its spending counts as zero.
pub(crate) fn category_breakdown(spend_only: &Ledger) -> Result<Vec<CategoryAmount>> {
    let mut by_label: BTreeMap<&'static str, (Category, Decimal)> = BTreeMap::new();
    for record in spend_only.records() {
        let entry = by_label
            .entry(record.category.label())
            .or_insert((record.category, Decimal::ZERO));
        entry.1 = entry
            .1
            .checked_add(record.delta)
            .ok_or_else(|| LedgerError::parse("ledger", "amounts overflow a decimal"))?;
    }

    Ok(by_label
        .into_values()
        .map(|(category, sum)| {
            if sum > Decimal::ZERO {
                log::warn!("{category} nets to a gain of {sum}; charting it as no spending");
            }
            CategoryAmount {
                category,
                amount: (-sum).max(Decimal::ZERO),
            }
        })
        .collect())
}

pub(crate) fn breakdown_total(breakdown: &[CategoryAmount]) -> Result<Decimal> {
    checked_sum(breakdown.iter().map(|c| c.amount), "category breakdown")
}

/// The month-level figures stored in the monthly totals table.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MonthlyAggregate {
    pub(crate) income: Decimal,
    pub(crate) total_expenses: Decimal,
    pub(crate) net_worth_change: Decimal,
}

impl MonthlyAggregate {
    pub(crate) fn compute(full: &Ledger, breakdown: &[CategoryAmount]) -> Result<Self> {
        Ok(Self {
            income: full.income()?,
            total_expenses: breakdown_total(breakdown)?.round_dp(2),
            net_worth_change: full.net_worth_change()?,
        })
    }

    pub(crate) fn to_row(&self, month: Month) -> MonthlyRow {
        MonthlyRow::new(
            month,
            self.income,
            self.total_expenses,
            self.net_worth_change,
        )
    }
}

/// Load the totals table (or start one) and replace `month`'s row with
/// the aggregate.
pub(crate) fn merge_month(
    month: Month,
    totals_source: Option<&Path>,
    aggregate: &MonthlyAggregate,
) -> Result<MonthlyTotals> {
    let mut totals = crate::sheet::load_totals(totals_source)?;
    if totals.get(month).is_some() {
        log::info!("Replacing existing totals for {month}");
    }
    totals.upsert(aggregate.to_row(month));
    Ok(totals)
}
