//! Budget overview formatting
//!
//! Renders the dashboard figures as plain text for the non-interactive
//! `tally overview` command.

use crate::config::Settings;
use crate::services::BudgetBook;

/// Format the summary figures and per-category breakdown
pub fn format_overview(book: &BudgetBook, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str("Monthly Budget\n");
    output.push_str("==============\n");
    output.push_str(&format!(
        "Income:          {}\n",
        book.income().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total allocated: {}\n",
        book.total_allocated().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Unallocated:     {}\n",
        book.unallocated().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total spent:     {}\n",
        book.total_spent().format_with_symbol(symbol)
    ));

    if book.categories().is_empty() {
        output.push_str("\nNo categories yet.\n");
        return output;
    }

    let name_width = book
        .categories()
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(8)
        .max(8);

    output.push('\n');
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>12}  {:>12}\n",
        "Category",
        "Allocated",
        "Spent",
        "Remaining",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        width = name_width
    ));

    for category in book.categories() {
        let marker = if category.is_over_budget() { " ⚠" } else { "" };
        output.push_str(&format!(
            "{:<width$}  {:>12}  {:>12}  {:>12}{}\n",
            category.name,
            category.allocated.format_with_symbol(symbol),
            category.spent().abs().format_with_symbol(symbol),
            category.remaining().format_with_symbol(symbol),
            marker,
            width = name_width
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use crate::models::{Money, TransactionKind};
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_book() -> (TempDir, BudgetBook) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(&paths).unwrap();
        (temp_dir, BudgetBook::load(storage))
    }

    #[test]
    fn test_empty_overview() {
        let (_temp_dir, book) = create_book();
        let output = format_overview(&book, &Settings::default());
        assert!(output.contains("Income:          $0.00"));
        assert!(output.contains("No categories yet."));
    }

    #[test]
    fn test_overview_figures() {
        let (_temp_dir, mut book) = create_book();
        book.set_income("3000").unwrap();
        let id = book.add_category("Groceries", "400").unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(5000), "")
            .unwrap();

        let output = format_overview(&book, &Settings::default());
        assert!(output.contains("Income:          $3000.00"));
        assert!(output.contains("Total allocated: $400.00"));
        assert!(output.contains("Unallocated:     $2600.00"));
        assert!(output.contains("Total spent:     $50.00"));
        assert!(output.contains("Groceries"));
        assert!(output.contains("$350.00"));
        assert!(!output.contains('⚠'));
    }

    #[test]
    fn test_over_budget_marker() {
        let (_temp_dir, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        book.add_transaction(id, TransactionKind::Debit, Money::from_cents(45000), "")
            .unwrap();

        let output = format_overview(&book, &Settings::default());
        assert!(output.contains("-$50.00 ⚠"));
    }

    #[test]
    fn test_custom_currency_symbol() {
        let (_temp_dir, mut book) = create_book();
        book.set_income("100").unwrap();

        let mut settings = Settings::default();
        settings.currency_symbol = "€".to_string();

        let output = format_overview(&book, &settings);
        assert!(output.contains("€100.00"));
    }
}
