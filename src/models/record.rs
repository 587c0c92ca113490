use rust_decimal::Decimal;

use super::Category;
use crate::error::Result;

/// Name carried by the synthetic summary row at the end of a ledger.
pub const NET_ROW_NAME: &str = "Net";

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    pub name: String,
    pub category: Category,
    /// Negative for spending, positive for income.
    pub delta: Decimal,
}

impl ExpenseRecord {
    pub fn new(name: impl Into<String>, category: Category, delta: Decimal) -> Self {
        Self {
            name: name.into(),
            category,
            delta,
        }
    }

    pub fn net(total: Decimal) -> Self {
        Self::new(NET_ROW_NAME, Category::Blank, total)
    }

    pub fn is_net(&self) -> bool {
        self.name == NET_ROW_NAME
    }

    pub fn is_income(&self) -> bool {
        self.category == Category::Income
    }
}

/// A new expense as entered by the operator: the category is still the
/// numeric code.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub name: String,
    pub code: u8,
    pub delta: Decimal,
}

impl NewEntry {
    pub fn new(name: impl Into<String>, code: u8, delta: Decimal) -> Self {
        Self {
            name: name.into(),
            code,
            delta,
        }
    }

    pub fn to_record(&self) -> Result<ExpenseRecord> {
        let category = Category::from_code(self.code)?;
        Ok(ExpenseRecord::new(self.name.clone(), category, self.delta))
    }
}
