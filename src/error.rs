//! Error types for tally
//!
//! User-facing leniency is part of the budget contract: unparsable numeric
//! input coerces to zero and unknown ids make mutations no-ops, so neither
//! ever produces an error. The variants here cover genuine failures only,
//! such as the data directory being unwritable or the terminal refusing to
//! enter raw mode.

use thiserror::Error;

/// The main error type for tally operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors (persisting budget data)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Storage(err.to_string())
    }
}

/// Result type alias for tally operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }

    #[test]
    fn test_from_serde_error() {
        let serde_err = serde_json::from_str::<i64>("not json").unwrap_err();
        let budget_err: BudgetError = serde_err.into();
        assert!(matches!(budget_err, BudgetError::Storage(_)));
    }
}
