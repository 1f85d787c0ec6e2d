//! Storage layer for tally
//!
//! Two independently stored values back the whole application: the income
//! figure and the category list. Each has its own JSON file under the data
//! directory; both are rewritten in full on every change.

pub mod categories;
pub mod file_io;
pub mod income;

pub use categories::CategoryStore;
pub use file_io::{read_json_or_default, write_json_atomic};
pub use income::IncomeStore;

use crate::config::paths::TallyPaths;
use crate::error::BudgetError;
use crate::models::{Category, Money};

/// Coordinator over the two persisted values
pub struct Storage {
    pub income: IncomeStore,
    pub categories: CategoryStore,
}

impl Storage {
    /// Create a new Storage instance, ensuring the data directory exists
    pub fn new(paths: &TallyPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            income: IncomeStore::new(paths.income_file()),
            categories: CategoryStore::new(paths.categories_file()),
        })
    }

    /// Load both values, falling back to defaults for anything missing or
    /// malformed
    pub fn load(&self) -> (Money, Vec<Category>) {
        (self.income.load(), self.categories.load())
    }
}
