mod category;
mod ledger;
mod month;
mod record;
mod totals;

pub use category::Category;
pub use ledger::Ledger;
pub use month::Month;
pub use record::{ExpenseRecord, NewEntry};
pub use totals::{MonthlyRow, MonthlyTotals};

#[cfg(test)]
mod tests;
