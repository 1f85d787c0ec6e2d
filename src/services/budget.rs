//! The budget state container
//!
//! `BudgetBook` owns the authoritative in-memory state (income plus the
//! ordered category list) and is the only place that mutates it. Every
//! mutation persists the affected value synchronously before returning, so
//! the on-disk copy always reflects the last completed operation.
//!
//! Mutations targeting an id that no longer exists are silent no-ops; the
//! caller cannot tell the difference and is not meant to. Numeric input
//! arrives as raw strings and coerces to zero when unparsable.

use crate::error::BudgetResult;
use crate::models::{Category, CategoryId, Money, Transaction, TransactionId, TransactionKind};
use crate::storage::Storage;

/// Authoritative budget state plus its persistence backing
pub struct BudgetBook {
    storage: Storage,
    income: Money,
    categories: Vec<Category>,
}

impl BudgetBook {
    /// Load the last saved state from storage
    pub fn load(storage: Storage) -> Self {
        let (income, categories) = storage.load();
        Self {
            storage,
            income,
            categories,
        }
    }

    // Accessors

    /// Monthly income
    pub fn income(&self) -> Money {
        self.income
    }

    /// Categories in insertion order
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by id
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Sum of allocations over all categories
    pub fn total_allocated(&self) -> Money {
        self.categories.iter().map(|c| c.allocated).sum()
    }

    /// Sum of each category's absolute net spend
    pub fn total_spent(&self) -> Money {
        self.categories.iter().map(|c| c.spent().abs()).sum()
    }

    /// Income not yet assigned to any category; negative when
    /// over-allocated
    pub fn unallocated(&self) -> Money {
        self.income - self.total_allocated()
    }

    // Mutations

    /// Replace the income figure
    ///
    /// Unparsable input coerces to zero; negative values are accepted.
    pub fn set_income(&mut self, raw: &str) -> BudgetResult<()> {
        self.income = Money::parse_or_zero(raw);
        self.storage.income.save(self.income)
    }

    /// Append a new category with a fresh id and no transactions
    pub fn add_category(&mut self, name: impl Into<String>, allocated_raw: &str) -> BudgetResult<CategoryId> {
        let category = Category::new(name, Money::parse_or_zero(allocated_raw));
        let id = category.id;
        self.categories.push(category);
        self.save_categories()?;
        Ok(id)
    }

    /// Remove a category and all its transactions; no-op if absent
    pub fn delete_category(&mut self, id: CategoryId) -> BudgetResult<()> {
        let before = self.categories.len();
        self.categories.retain(|c| c.id != id);
        if self.categories.len() == before {
            return Ok(());
        }
        self.save_categories()
    }

    /// Replace a category's name; no-op if absent
    pub fn rename_category(&mut self, id: CategoryId, new_name: impl Into<String>) -> BudgetResult<()> {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.name = new_name.into();
                self.save_categories()
            }
            None => Ok(()),
        }
    }

    /// Replace a category's allocation; no-op if absent
    ///
    /// Unparsable input coerces to zero.
    pub fn update_allocation(&mut self, id: CategoryId, allocated_raw: &str) -> BudgetResult<()> {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.allocated = Money::parse_or_zero(allocated_raw);
                self.save_categories()
            }
            None => Ok(()),
        }
    }

    /// Append a transaction to a category; no-op if the category is absent
    ///
    /// The caller is responsible for supplying a positive amount; this
    /// operation does not re-validate it.
    pub fn add_transaction(
        &mut self,
        category_id: CategoryId,
        kind: TransactionKind,
        amount: Money,
        description: impl Into<String>,
    ) -> BudgetResult<Option<TransactionId>> {
        match self.categories.iter_mut().find(|c| c.id == category_id) {
            Some(category) => {
                let txn = Transaction::new(kind, amount, description);
                let id = txn.id;
                category.transactions.push(txn);
                self.save_categories()?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Remove a transaction from a category; no-op if either id is absent
    pub fn delete_transaction(
        &mut self,
        category_id: CategoryId,
        transaction_id: TransactionId,
    ) -> BudgetResult<()> {
        let Some(category) = self.categories.iter_mut().find(|c| c.id == category_id) else {
            return Ok(());
        };

        let before = category.transactions.len();
        category.transactions.retain(|t| t.id != transaction_id);
        if category.transactions.len() == before {
            return Ok(());
        }
        self.save_categories()
    }

    fn save_categories(&self) -> BudgetResult<()> {
        self.storage.categories.save(&self.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use tempfile::TempDir;

    fn create_book() -> (TempDir, BudgetBook) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();
        (temp_dir, BudgetBook::load(storage))
    }

    fn reload(temp_dir: &TempDir) -> BudgetBook {
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        BudgetBook::load(Storage::new(&paths).unwrap())
    }

    #[test]
    fn test_fresh_book_is_empty() {
        let (_temp_dir, book) = create_book();
        assert_eq!(book.income(), Money::zero());
        assert!(book.categories().is_empty());
        assert_eq!(book.unallocated(), Money::zero());
    }

    #[test]
    fn test_income_and_allocation_totals() {
        // income=3000, "Groceries" allocated=400 => allocated=400, unallocated=2600
        let (_temp_dir, mut book) = create_book();
        book.set_income("3000").unwrap();
        book.add_category("Groceries", "400").unwrap();

        assert_eq!(book.income().plain(), "3000.00");
        assert_eq!(book.total_allocated().plain(), "400.00");
        assert_eq!(book.unallocated().plain(), "2600.00");
    }

    #[test]
    fn test_income_lenient_parse() {
        let (_temp_dir, mut book) = create_book();
        book.set_income("not a number").unwrap();
        assert_eq!(book.income(), Money::zero());

        // Negative income is accepted as-is
        book.set_income("-100").unwrap();
        assert_eq!(book.income().cents(), -10000);
    }

    #[test]
    fn test_debit_spend_and_remaining() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(5000), "")
            .unwrap();

        let cat = book.category(id).unwrap();
        assert_eq!(cat.spent().cents(), -5000);
        assert_eq!(cat.spent().abs().plain(), "50.00");
        assert_eq!(cat.remaining().plain(), "350.00");
        assert!(!cat.is_over_budget());
    }

    #[test]
    fn test_over_budget() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(5000), "")
            .unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(40000), "")
            .unwrap();

        let cat = book.category(id).unwrap();
        assert_eq!(cat.remaining().plain(), "-50.00");
        assert!(cat.is_over_budget());
    }

    #[test]
    fn test_credit_offsets_spend() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(5000), "")
            .unwrap();
        book.add_transaction(id, TransactionKind::Credit, Money::from_cents(2000), "")
            .unwrap();

        let cat = book.category(id).unwrap();
        assert_eq!(cat.spent().cents(), -3000);
        assert_eq!(book.total_spent().plain(), "30.00");
    }

    #[test]
    fn test_total_spent_uses_absolute_values() {
        let (_temp_dir, mut book) = create_book();
        let a = book.add_category("A", "100").unwrap();
        let b = book.add_category("B", "100").unwrap();
        book.add_transaction(a, TransactionKind::Debit, Money::from_cents(3000), "")
            .unwrap();
        // B is net positive (credit only); still counts |spent|
        book.add_transaction(b, TransactionKind::Credit, Money::from_cents(1000), "")
            .unwrap();

        assert_eq!(book.total_spent().cents(), 4000);
    }

    #[test]
    fn test_rename_and_update_allocation() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Grocceries", "400").unwrap();

        book.rename_category(id, "Groceries").unwrap();
        book.update_allocation(id, "450.50").unwrap();

        let cat = book.category(id).unwrap();
        assert_eq!(cat.name, "Groceries");
        assert_eq!(cat.allocated.cents(), 45050);

        // Unparsable allocation coerces to zero
        book.update_allocation(id, "4oo").unwrap();
        assert_eq!(book.category(id).unwrap().allocated, Money::zero());
    }

    #[test]
    fn test_mutations_on_missing_ids_are_noops() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        let ghost = CategoryId::new();

        book.rename_category(ghost, "X").unwrap();
        book.update_allocation(ghost, "1").unwrap();
        assert!(book
            .add_transaction(ghost, TransactionKind::Debit, Money::from_cents(1), "")
            .unwrap()
            .is_none());
        book.delete_transaction(id, TransactionId::new()).unwrap();
        book.delete_transaction(ghost, TransactionId::new()).unwrap();

        assert_eq!(book.categories().len(), 1);
        assert_eq!(book.category(id).unwrap().name, "Groceries");
        assert!(book.category(id).unwrap().transactions.is_empty());
    }

    #[test]
    fn test_delete_category_is_idempotent() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        book.add_category("Rent", "1200").unwrap();

        book.delete_category(id).unwrap();
        assert_eq!(book.categories().len(), 1);
        assert!(book.category(id).is_none());

        // Second delete is a no-op with the same end state
        book.delete_category(id).unwrap();
        assert_eq!(book.categories().len(), 1);
    }

    #[test]
    fn test_delete_transaction() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        let txn = book
            .add_transaction(id, TransactionKind::Debit, Money::from_cents(5000), "")
            .unwrap()
            .unwrap();

        book.delete_transaction(id, txn).unwrap();
        assert!(book.category(id).unwrap().transactions.is_empty());
        assert_eq!(book.category(id).unwrap().spent(), Money::zero());
    }

    #[test]
    fn test_transactions_keep_insertion_order() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(100), "first")
            .unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(200), "second")
            .unwrap();

        let descriptions: Vec<_> = book
            .category(id)
            .unwrap()
            .transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["first", "second"]);
    }

    #[test]
    fn test_every_mutation_persists() {
        let (temp_dir, mut book) = create_book();
        book.set_income("3000").unwrap();
        let id = book.add_category("Groceries", "400").unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(5000), "Shop")
            .unwrap();

        let reloaded = reload(&temp_dir);
        assert_eq!(reloaded.income().cents(), 300000);
        assert_eq!(reloaded.categories().len(), 1);
        let cat = reloaded.category(id).unwrap();
        assert_eq!(cat.transactions.len(), 1);
        assert_eq!(cat.transactions[0].description, "Shop");
        assert_eq!(cat.remaining().plain(), "350.00");
    }

    #[test]
    fn test_delete_persists() {
        let (temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        book.delete_category(id).unwrap();

        let reloaded = reload(&temp_dir);
        assert!(reloaded.categories().is_empty());
    }
}
