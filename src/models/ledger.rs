use rust_decimal::Decimal;

use super::{Category, ExpenseRecord, NewEntry};
use crate::error::Result;
use crate::util::checked_sum;

/// One month of expense records. Once finalized by [`Ledger::update`] the
/// last record is the Net summary row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Merge new entries and append a fresh Net row.
    ///
    /// The previous summary is assumed to be the last row and is only
    /// dropped when the ledger has more than one row. A lone row is kept
    /// unless it is itself a Net row, so a ledger never ends up with two
    /// summaries.
    pub fn update(&self, entries: &[NewEntry]) -> Result<Ledger> {
        let new_records = entries
            .iter()
            .map(NewEntry::to_record)
            .collect::<Result<Vec<_>>>()?;

        let mut records = self.records.clone();
        let strip = match records.as_slice() {
            [] => false,
            // Overrides the "more than one row" rule: a lone Net row is
            // still a summary, and keeping it would leave two of them.
            [only] => only.is_net() && only.category == Category::Blank,
            _ => true,
        };
        if strip {
            let dropped = records.pop();
            log::debug!("Dropped previous summary row: {dropped:?}");
        }

        records.extend(new_records);
        let total = checked_sum(records.iter().map(|r| r.delta), "ledger")?;
        records.push(ExpenseRecord::net(total));

        Ok(Ledger { records })
    }

    /// Records that are neither income nor the Net summary.
    pub fn spend_only(&self) -> Ledger {
        Ledger {
            records: self
                .records
                .iter()
                .filter(|r| !r.is_income() && !r.is_net())
                .cloned()
                .collect(),
        }
    }

    /// Delta of the trailing Net row, if the ledger has been finalized.
    pub fn net(&self) -> Option<Decimal> {
        self.records
            .last()
            .filter(|r| r.is_net())
            .map(|r| r.delta)
    }

    pub fn income(&self) -> Result<Decimal> {
        checked_sum(
            self.records.iter().filter(|r| r.is_income()).map(|r| r.delta),
            "ledger income",
        )
    }

    /// Sum over every real record, income and spending alike.
    pub fn net_worth_change(&self) -> Result<Decimal> {
        checked_sum(
            self.records.iter().filter(|r| !r.is_net()).map(|r| r.delta),
            "ledger",
        )
    }
}
