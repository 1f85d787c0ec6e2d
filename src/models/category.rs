//! Category model and derived aggregates
//!
//! A category owns its transactions in insertion order. Spent, remaining,
//! over-budget status, and the progress percentage are computed on demand;
//! none of them is ever stored.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{CategoryId, TransactionId};
use super::money::Money;
use super::transaction::Transaction;

/// A budget category with an allocated ceiling and its transactions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name
    pub name: String,

    /// Budget ceiling for the month
    pub allocated: Money,

    /// Transactions in insertion order
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

impl Category {
    /// Create a new category with no transactions
    pub fn new(name: impl Into<String>, allocated: Money) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            allocated,
            transactions: Vec::new(),
        }
    }

    /// Net of this category's transactions: debits subtract, credits add
    ///
    /// A category that has only spent money reports a negative value here;
    /// displays show the absolute value.
    pub fn spent(&self) -> Money {
        self.transactions.iter().map(|t| t.signed()).sum()
    }

    /// Allocated plus the (signed) spend; negative means over budget
    pub fn remaining(&self) -> Money {
        self.allocated + self.spent()
    }

    /// Whether spending has exceeded the allocation
    pub fn is_over_budget(&self) -> bool {
        self.remaining().is_negative()
    }

    /// Share of the allocation consumed, clamped to 0-100
    ///
    /// With a zero allocation the ratio is undefined; the policy here is
    /// 0% while nothing is spent and 100% as soon as anything is.
    pub fn progress_percent(&self) -> u16 {
        let spent = self.spent().abs().cents();
        let allocated = self.allocated.cents();

        if allocated <= 0 {
            return if spent > 0 { 100 } else { 0 };
        }

        ((spent * 100) / allocated).clamp(0, 100) as u16
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn groceries() -> Category {
        Category::new("Groceries", Money::from_cents(40000))
    }

    #[test]
    fn test_new_category_is_empty() {
        let cat = groceries();
        assert_eq!(cat.name, "Groceries");
        assert_eq!(cat.allocated.cents(), 40000);
        assert!(cat.transactions.is_empty());
        assert_eq!(cat.spent(), Money::zero());
        assert_eq!(cat.remaining().cents(), 40000);
        assert!(!cat.is_over_budget());
    }

    #[test]
    fn test_debit_reduces_remaining() {
        let mut cat = groceries();
        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(5000),
            "Weekly shop",
        ));

        assert_eq!(cat.spent().cents(), -5000);
        assert_eq!(cat.spent().abs().plain(), "50.00");
        assert_eq!(cat.remaining().plain(), "350.00");
        assert!(!cat.is_over_budget());
    }

    #[test]
    fn test_over_budget_after_large_debit() {
        let mut cat = groceries();
        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(5000),
            "",
        ));
        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(40000),
            "",
        ));

        // 400 + (-50 - 400) = -50
        assert_eq!(cat.remaining().cents(), -5000);
        assert_eq!(cat.remaining().plain(), "-50.00");
        assert!(cat.is_over_budget());
    }

    #[test]
    fn test_credit_offsets_debit() {
        let mut cat = groceries();
        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(5000),
            "",
        ));
        cat.transactions.push(Transaction::new(
            TransactionKind::Credit,
            Money::from_cents(2000),
            "Refund",
        ));

        assert_eq!(cat.spent().cents(), -3000);
        assert_eq!(cat.spent().abs().plain(), "30.00");
    }

    #[test]
    fn test_remaining_identity() {
        let mut cat = groceries();
        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(12345),
            "",
        ));
        assert_eq!(cat.remaining(), cat.allocated + cat.spent());
        assert_eq!(cat.is_over_budget(), cat.remaining().is_negative());
    }

    #[test]
    fn test_progress_percent_clamps() {
        let mut cat = Category::new("Fun", Money::from_cents(10000));
        assert_eq!(cat.progress_percent(), 0);

        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(2500),
            "",
        ));
        assert_eq!(cat.progress_percent(), 25);

        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(20000),
            "",
        ));
        assert_eq!(cat.progress_percent(), 100);
    }

    #[test]
    fn test_progress_percent_zero_allocation() {
        let mut cat = Category::new("Misc", Money::zero());
        assert_eq!(cat.progress_percent(), 0);

        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(1),
            "",
        ));
        assert_eq!(cat.progress_percent(), 100);
    }

    #[test]
    fn test_validate() {
        let cat = groceries();
        assert!(cat.validate().is_ok());

        let unnamed = Category::new("   ", Money::zero());
        assert_eq!(unnamed.validate(), Err(CategoryValidationError::EmptyName));
    }

    #[test]
    fn test_transaction_lookup() {
        let mut cat = groceries();
        let txn = Transaction::new(TransactionKind::Debit, Money::from_cents(100), "x");
        let id = txn.id;
        cat.transactions.push(txn);

        assert!(cat.transaction(id).is_some());
        assert!(cat.transaction(TransactionId::new()).is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut cat = groceries();
        cat.transactions.push(Transaction::new(
            TransactionKind::Debit,
            Money::from_cents(999),
            "Snacks",
        ));

        let json = serde_json::to_string(&cat).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(cat.id, back.id);
        assert_eq!(cat.allocated, back.allocated);
        assert_eq!(back.transactions.len(), 1);
        assert_eq!(back.spent().cents(), -999);
    }
}
