//! Transaction model
//!
//! A transaction is either a debit (expense) or a credit (income/refund)
//! against one category. Transactions are immutable once created; the only
//! later operation is deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction reduces or restores the category budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// An expense; reduces the remaining budget
    #[default]
    Debit,
    /// Income or a refund; increases the remaining budget
    Credit,
}

impl TransactionKind {
    /// Default description used when the user leaves it blank
    pub fn default_description(&self) -> &'static str {
        match self {
            Self::Debit => "Expense",
            Self::Credit => "Income",
        }
    }

    /// The other kind
    pub fn toggled(&self) -> Self {
        match self {
            Self::Debit => Self::Credit,
            Self::Credit => Self::Debit,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debit => write!(f, "Debit"),
            Self::Credit => write!(f, "Credit"),
        }
    }
}

/// A single debit or credit within a category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Debit or credit
    pub kind: TransactionKind,

    /// Entered magnitude; always positive, the sign lives in `kind`
    pub amount: Money,

    /// Free-text description
    pub description: String,

    /// When the transaction was created
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction dated now
    ///
    /// A blank description falls back to "Expense" or "Income" depending
    /// on the kind.
    pub fn new(kind: TransactionKind, amount: Money, description: impl Into<String>) -> Self {
        let description = description.into();
        let description = if description.trim().is_empty() {
            kind.default_description().to_string()
        } else {
            description
        };

        Self {
            id: TransactionId::new(),
            kind,
            amount,
            description,
            date: Utc::now(),
        }
    }

    /// The amount with its budget effect applied: negative for debits,
    /// positive for credits
    pub fn signed(&self) -> Money {
        match self.kind {
            TransactionKind::Debit => -self.amount,
            TransactionKind::Credit => self.amount,
        }
    }
}
