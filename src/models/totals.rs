use rust_decimal::Decimal;

use super::Month;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRow {
    pub month: Month,
    pub income: Decimal,
    pub total_expenses: Decimal,
    pub net_worth_change: Decimal,
}

impl MonthlyRow {
    pub fn new(
        month: Month,
        income: Decimal,
        total_expenses: Decimal,
        net_worth_change: Decimal,
    ) -> Self {
        Self {
            month,
            income,
            total_expenses,
            net_worth_change,
        }
    }
}

/// Cross-month table with at most one row per month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTotals {
    rows: Vec<MonthlyRow>,
}

impl MonthlyTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from rows in file order. A month that appears more than once
    /// keeps its last occurrence.
    pub fn from_rows(rows: Vec<MonthlyRow>) -> Self {
        let mut totals = Self::new();
        for row in rows {
            totals.upsert(row);
        }
        totals
    }

    pub fn rows(&self) -> &[MonthlyRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Replace any row for `row.month` and append `row` at the end.
    pub fn upsert(&mut self, row: MonthlyRow) {
        self.rows.retain(|r| r.month != row.month);
        self.rows.push(row);
    }

    pub fn get(&self, month: Month) -> Option<&MonthlyRow> {
        self.rows.iter().find(|r| r.month == month)
    }

    /// Rows sorted by month, oldest first.
    pub fn chronological(&self) -> Vec<&MonthlyRow> {
        let mut sorted: Vec<&MonthlyRow> = self.rows.iter().collect();
        sorted.sort_by_key(|r| r.month);
        sorted
    }
}
