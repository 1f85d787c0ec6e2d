//! Income persistence
//!
//! The monthly income figure lives alone in income.json. Missing or
//! malformed data loads as zero.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::BudgetError;
use crate::models::Money;

use super::file_io::{read_json_or_default, write_json_atomic};

/// On-disk representation of the income figure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct IncomeData {
    amount: Money,
}

/// Store for the single income value
pub struct IncomeStore {
    path: PathBuf,
}

impl IncomeStore {
    /// Create a new income store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the last saved income, or zero if nothing usable was saved
    pub fn load(&self) -> Money {
        let data: IncomeData = read_json_or_default(&self.path);
        data.amount
    }

    /// Persist the income figure
    pub fn save(&self, amount: Money) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, &IncomeData { amount })
    }
}
