//! Category list persistence
//!
//! The whole category list (transactions included) is rewritten to
//! categories.json on every change. Missing or malformed data loads as an
//! empty list.

use std::path::PathBuf;

use crate::error::BudgetError;
use crate::models::Category;

use super::file_io::{read_json_or_default, write_json_atomic};

/// Store for the ordered category list
pub struct CategoryStore {
    path: PathBuf,
}

impl CategoryStore {
    /// Create a new category store
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the last saved category list, or an empty list
    pub fn load(&self) -> Vec<Category> {
        read_json_or_default(&self.path)
    }

    /// Persist the full category list
    pub fn save(&self, categories: &[Category]) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, &categories)
    }
}
