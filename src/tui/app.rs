//! Application state for the TUI
//!
//! The App struct holds the current route, the per-view edit-mode state,
//! and the list selections. Budget data itself lives in the `BudgetBook`;
//! forms only carry view-local drafts that are committed on save and
//! discarded on cancel.

use crate::config::Settings;
use crate::models::{CategoryId, TransactionKind};
use crate::services::BudgetBook;

use super::widgets::TextInput;

/// Which view is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Dashboard,
    /// Category detail for the given id; an id that no longer resolves
    /// renders the not-found state
    Category(CategoryId),
}

/// Focus within a category form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryField {
    #[default]
    Name,
    Allocated,
}

/// Draft state for adding or editing a category
#[derive(Debug, Clone, Default)]
pub struct CategoryForm {
    pub name: TextInput,
    pub allocated: TextInput,
    pub focus: CategoryField,
}

impl CategoryForm {
    /// Empty form for adding a category
    pub fn empty() -> Self {
        Self {
            name: TextInput::new().placeholder("Category name"),
            allocated: TextInput::new().placeholder("Allocated amount"),
            focus: CategoryField::Name,
        }
    }

    /// Form pre-filled with an existing category's values
    pub fn prefilled(name: &str, allocated_plain: &str) -> Self {
        Self {
            name: TextInput::new().content(name),
            allocated: TextInput::new().content(allocated_plain),
            focus: CategoryField::Name,
        }
    }

    /// The input that currently has focus
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focus {
            CategoryField::Name => &mut self.name,
            CategoryField::Allocated => &mut self.allocated,
        }
    }

    /// Move focus to the other field
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            CategoryField::Name => CategoryField::Allocated,
            CategoryField::Allocated => CategoryField::Name,
        };
    }
}

/// Focus within the transaction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransactionField {
    #[default]
    Kind,
    Amount,
    Description,
}

/// Draft state for adding a transaction
#[derive(Debug, Clone, Default)]
pub struct TransactionForm {
    pub kind: TransactionKind,
    pub amount: TextInput,
    pub description: TextInput,
    pub focus: TransactionField,
}

impl TransactionForm {
    /// Empty form defaulting to a debit
    pub fn empty() -> Self {
        Self {
            kind: TransactionKind::Debit,
            amount: TextInput::new().placeholder("Amount"),
            description: TextInput::new().placeholder("Description (optional)"),
            focus: TransactionField::Kind,
        }
    }

    /// The input that currently has focus, if the focused field is textual
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focus {
            TransactionField::Kind => None,
            TransactionField::Amount => Some(&mut self.amount),
            TransactionField::Description => Some(&mut self.description),
        }
    }

    /// Move focus to the next field
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            TransactionField::Kind => TransactionField::Amount,
            TransactionField::Amount => TransactionField::Description,
            TransactionField::Description => TransactionField::Kind,
        };
    }
}

/// Edit-mode state for the dashboard
#[derive(Debug, Clone, Default)]
pub enum DashboardMode {
    #[default]
    Viewing,
    EditingIncome(TextInput),
    AddingCategory(CategoryForm),
    EditingCategory {
        id: CategoryId,
        form: CategoryForm,
    },
}

/// Edit-mode state for the category detail view
#[derive(Debug, Clone, Default)]
pub enum DetailMode {
    #[default]
    Viewing,
    AddingTransaction(TransactionForm),
    EditingCategory(CategoryForm),
}

/// Main application state
pub struct App<'a> {
    /// The budget state container
    pub book: &'a mut BudgetBook,

    /// User settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently shown view
    pub route: Route,

    /// Dashboard edit-mode state
    pub dashboard_mode: DashboardMode,

    /// Detail edit-mode state
    pub detail_mode: DetailMode,

    /// Selected row in the dashboard category list
    pub selected_category_index: usize,

    /// Selected row in the detail transaction list (newest first)
    pub selected_transaction_index: usize,

    /// Transient status message shown in the footer
    pub status_message: Option<String>,
}

impl<'a> App<'a> {
    /// Create the app showing the dashboard
    pub fn new(book: &'a mut BudgetBook, settings: &'a Settings) -> Self {
        Self {
            book,
            settings,
            should_quit: false,
            route: Route::default(),
            dashboard_mode: DashboardMode::default(),
            detail_mode: DetailMode::default(),
            selected_category_index: 0,
            selected_transaction_index: 0,
            status_message: None,
        }
    }

    /// The id of the category selected on the dashboard, if any
    pub fn selected_category(&self) -> Option<CategoryId> {
        self.book
            .categories()
            .get(self.selected_category_index)
            .map(|c| c.id)
    }

    /// Navigate to a category's detail view
    pub fn open_category(&mut self, id: CategoryId) {
        self.route = Route::Category(id);
        self.detail_mode = DetailMode::Viewing;
        self.selected_transaction_index = 0;
    }

    /// Navigate back to the dashboard
    pub fn go_to_dashboard(&mut self) {
        self.route = Route::Dashboard;
        self.detail_mode = DetailMode::Viewing;
        self.status_message = None;
    }

    /// Clamp selections after the underlying lists changed
    pub fn clamp_selections(&mut self) {
        let category_count = self.book.categories().len();
        if category_count == 0 {
            self.selected_category_index = 0;
        } else if self.selected_category_index >= category_count {
            self.selected_category_index = category_count - 1;
        }

        if let Route::Category(id) = self.route {
            let txn_count = self
                .book
                .category(id)
                .map(|c| c.transactions.len())
                .unwrap_or(0);
            if txn_count == 0 {
                self.selected_transaction_index = 0;
            } else if self.selected_transaction_index >= txn_count {
                self.selected_transaction_index = txn_count - 1;
            }
        }
    }

    /// Set a transient footer message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TallyPaths;
    use crate::storage::Storage;
    use tempfile::TempDir;

    fn create_book() -> (TempDir, BudgetBook) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TallyPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, BudgetBook::load(Storage::new(&paths).unwrap()))
    }

    #[test]
    fn test_starts_on_dashboard_viewing() {
        let (_t, mut book) = create_book();
        let settings = Settings::default();
        let app = App::new(&mut book, &settings);

        assert_eq!(app.route, Route::Dashboard);
        assert!(matches!(app.dashboard_mode, DashboardMode::Viewing));
        assert!(app.selected_category().is_none());
    }

    #[test]
    fn test_open_and_leave_category() {
        let (_t, mut book) = create_book();
        let id = book.add_category("Groceries", "400").unwrap();
        let settings = Settings::default();
        let mut app = App::new(&mut book, &settings);

        app.open_category(id);
        assert_eq!(app.route, Route::Category(id));

        app.go_to_dashboard();
        assert_eq!(app.route, Route::Dashboard);
    }

    #[test]
    fn test_clamp_after_delete() {
        let (_t, mut book) = create_book();
        book.add_category("A", "1").unwrap();
        let b = book.add_category("B", "1").unwrap();
        let settings = Settings::default();
        let mut app = App::new(&mut book, &settings);

        app.selected_category_index = 1;
        app.book.delete_category(b).unwrap();
        app.clamp_selections();
        assert_eq!(app.selected_category_index, 0);
    }

    #[test]
    fn test_form_focus_cycles() {
        let mut form = CategoryForm::empty();
        assert_eq!(form.focus, CategoryField::Name);
        form.cycle_focus();
        assert_eq!(form.focus, CategoryField::Allocated);
        form.cycle_focus();
        assert_eq!(form.focus, CategoryField::Name);

        let mut txn_form = TransactionForm::empty();
        assert_eq!(txn_form.focus, TransactionField::Kind);
        assert!(txn_form.focused_input().is_none());
        txn_form.cycle_focus();
        assert_eq!(txn_form.focus, TransactionField::Amount);
        assert!(txn_form.focused_input().is_some());
    }
}
