use thiserror::Error;

/// Everything that can abort a logging run.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Malformed or missing spreadsheet input.
    #[error("Failed to parse {source_name}: {detail}")]
    Parse { source_name: String, detail: String },

    /// An output table that could not be written.
    #[error("Failed to write {target}: {detail}")]
    Write { target: String, detail: String },

    /// Category code or label outside the closed set.
    #[error("Unknown category: {0}")]
    Lookup(String),

    /// Operator input that does not have the expected shape (e.g. the month).
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    pub fn parse(source_name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            detail: detail.into(),
        }
    }

    pub fn write(target: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Write {
            target: target.into(),
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
