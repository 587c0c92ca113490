use crate::error::{LedgerError, Result};

/// Expense classification. Every variant except `Blank` has a numeric
/// code (1-7) used when entering expenses and a display label used in
/// the ledger file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    BasicLife,
    Health,
    Investments,
    MiscWants,
    Subscriptions,
    Transportation,
    Income,
    /// Used only by the Net summary row.
    Blank,
}

impl Category {
    pub fn code(&self) -> Option<u8> {
        match self {
            Self::BasicLife => Some(1),
            Self::Health => Some(2),
            Self::Investments => Some(3),
            Self::MiscWants => Some(4),
            Self::Subscriptions => Some(5),
            Self::Transportation => Some(6),
            Self::Income => Some(7),
            Self::Blank => None,
        }
    }

    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::BasicLife),
            2 => Ok(Self::Health),
            3 => Ok(Self::Investments),
            4 => Ok(Self::MiscWants),
            5 => Ok(Self::Subscriptions),
            6 => Ok(Self::Transportation),
            7 => Ok(Self::Income),
            other => Err(LedgerError::Lookup(format!("code {other}"))),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BasicLife => "Basic life expenses",
            Self::Health => "Health",
            Self::Investments => "Investments",
            Self::MiscWants => "Misc. Wants",
            Self::Subscriptions => "Subscriptions",
            Self::Transportation => "Transportation",
            Self::Income => "Income",
            Self::Blank => "",
        }
    }

    /// Inverse of [`Category::label`]. Surrounding whitespace is ignored,
    /// so a cell holding a single space reads back as `Blank`.
    pub fn from_label(s: &str) -> Result<Self> {
        match s.trim() {
            "Basic life expenses" => Ok(Self::BasicLife),
            "Health" => Ok(Self::Health),
            "Investments" => Ok(Self::Investments),
            "Misc. Wants" => Ok(Self::MiscWants),
            "Subscriptions" => Ok(Self::Subscriptions),
            "Transportation" => Ok(Self::Transportation),
            "Income" => Ok(Self::Income),
            "" => Ok(Self::Blank),
            other => Err(LedgerError::Lookup(format!("label '{other}'"))),
        }
    }

    /// The coded categories, in code order.
    pub fn all() -> &'static [Category] {
        &[
            Self::BasicLife,
            Self::Health,
            Self::Investments,
            Self::MiscWants,
            Self::Subscriptions,
            Self::Transportation,
            Self::Income,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
