//! Key handling for the TUI
//!
//! Translates key presses into `BudgetBook` mutations. Pre-validation
//! happens here: empty category names and non-positive amounts are rejected
//! with a status message before any mutation is attempted, matching the
//! form-level checks of the views.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::error::BudgetResult;
use crate::models::{CategoryId, Money};

use super::app::{
    App, CategoryField, CategoryForm, DashboardMode, DetailMode, Route, TransactionField,
    TransactionForm,
};
use super::widgets::TextInput;

/// Handle a single key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> BudgetResult<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    match app.route {
        Route::Dashboard => handle_dashboard_key(app, key)?,
        Route::Category(id) => handle_detail_key(app, id, key)?,
    }

    app.clamp_selections();
    Ok(())
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> BudgetResult<()> {
    let mode = std::mem::take(&mut app.dashboard_mode);

    app.dashboard_mode = match mode {
        DashboardMode::Viewing => handle_dashboard_viewing_key(app, key)?,
        DashboardMode::EditingIncome(input) => handle_income_key(app, input, key)?,
        DashboardMode::AddingCategory(form) => handle_add_category_key(app, form, key)?,
        DashboardMode::EditingCategory { id, form } => {
            handle_edit_category_key(app, id, form, key)?
        }
    };

    Ok(())
}

fn handle_dashboard_viewing_key(app: &mut App, key: KeyEvent) -> BudgetResult<DashboardMode> {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_category_index = app.selected_category_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = app.book.categories().len().saturating_sub(1);
            app.selected_category_index = (app.selected_category_index + 1).min(last);
        }
        KeyCode::Enter => {
            if let Some(id) = app.selected_category() {
                app.open_category(id);
            }
        }
        KeyCode::Char('i') => {
            let mut input = TextInput::new()
                .placeholder("Monthly income")
                .content(app.book.income().plain());
            input.focused = true;
            return Ok(DashboardMode::EditingIncome(input));
        }
        KeyCode::Char('a') => {
            return Ok(DashboardMode::AddingCategory(focus_category_form(
                CategoryForm::empty(),
            )));
        }
        KeyCode::Char('e') => {
            if let Some(category) = app.selected_category().and_then(|id| app.book.category(id)) {
                let id = category.id;
                let form = CategoryForm::prefilled(&category.name, &category.allocated.plain());
                return Ok(DashboardMode::EditingCategory {
                    id,
                    form: focus_category_form(form),
                });
            }
        }
        KeyCode::Char('d') => {
            if let Some(id) = app.selected_category() {
                app.book.delete_category(id)?;
            }
        }
        _ => {}
    }
    Ok(DashboardMode::Viewing)
}

fn handle_income_key(
    app: &mut App,
    mut input: TextInput,
    key: KeyEvent,
) -> BudgetResult<DashboardMode> {
    match key.code {
        KeyCode::Esc => Ok(DashboardMode::Viewing),
        KeyCode::Enter => {
            app.book.set_income(input.value())?;
            Ok(DashboardMode::Viewing)
        }
        KeyCode::Char(c) => {
            input.insert(c);
            Ok(DashboardMode::EditingIncome(input))
        }
        KeyCode::Backspace => {
            input.backspace();
            Ok(DashboardMode::EditingIncome(input))
        }
        KeyCode::Left => {
            input.move_left();
            Ok(DashboardMode::EditingIncome(input))
        }
        KeyCode::Right => {
            input.move_right();
            Ok(DashboardMode::EditingIncome(input))
        }
        _ => Ok(DashboardMode::EditingIncome(input)),
    }
}

fn handle_add_category_key(
    app: &mut App,
    mut form: CategoryForm,
    key: KeyEvent,
) -> BudgetResult<DashboardMode> {
    match key.code {
        KeyCode::Esc => Ok(DashboardMode::Viewing),
        KeyCode::Enter => {
            if form.name.value().trim().is_empty() {
                app.set_status("Category name cannot be empty");
                return Ok(DashboardMode::AddingCategory(form));
            }
            app.book
                .add_category(form.name.value().trim(), form.allocated.value())?;
            app.status_message = None;
            Ok(DashboardMode::Viewing)
        }
        _ => {
            edit_category_form(&mut form, key);
            Ok(DashboardMode::AddingCategory(form))
        }
    }
}

fn handle_edit_category_key(
    app: &mut App,
    id: CategoryId,
    mut form: CategoryForm,
    key: KeyEvent,
) -> BudgetResult<DashboardMode> {
    match key.code {
        KeyCode::Esc => Ok(DashboardMode::Viewing),
        KeyCode::Enter => {
            if form.name.value().trim().is_empty() {
                app.set_status("Category name cannot be empty");
                return Ok(DashboardMode::EditingCategory { id, form });
            }
            app.book.rename_category(id, form.name.value().trim())?;
            app.book.update_allocation(id, form.allocated.value())?;
            app.status_message = None;
            Ok(DashboardMode::Viewing)
        }
        _ => {
            edit_category_form(&mut form, key);
            Ok(DashboardMode::EditingCategory { id, form })
        }
    }
}

fn handle_detail_key(app: &mut App, id: CategoryId, key: KeyEvent) -> BudgetResult<()> {
    // The routed category can vanish (deleted elsewhere in the session);
    // the view degrades to a not-found screen and only navigates back.
    if app.book.category(id).is_none() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => app.go_to_dashboard(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
        return Ok(());
    }

    let mode = std::mem::take(&mut app.detail_mode);

    app.detail_mode = match mode {
        DetailMode::Viewing => handle_detail_viewing_key(app, id, key)?,
        DetailMode::AddingTransaction(form) => handle_transaction_form_key(app, id, form, key)?,
        DetailMode::EditingCategory(form) => handle_detail_edit_key(app, id, form, key)?,
    };

    Ok(())
}

fn handle_detail_viewing_key(
    app: &mut App,
    id: CategoryId,
    key: KeyEvent,
) -> BudgetResult<DetailMode> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => app.go_to_dashboard(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => {
            app.selected_transaction_index = app.selected_transaction_index.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let count = app
                .book
                .category(id)
                .map(|c| c.transactions.len())
                .unwrap_or(0);
            let last = count.saturating_sub(1);
            app.selected_transaction_index = (app.selected_transaction_index + 1).min(last);
        }
        KeyCode::Char('a') => {
            return Ok(DetailMode::AddingTransaction(TransactionForm::empty()));
        }
        KeyCode::Char('e') => {
            if let Some(category) = app.book.category(id) {
                let form = CategoryForm::prefilled(&category.name, &category.allocated.plain());
                return Ok(DetailMode::EditingCategory(focus_category_form(form)));
            }
        }
        KeyCode::Char('d') => {
            // The list renders newest first; map the selection back to
            // insertion order.
            if let Some(category) = app.book.category(id) {
                let count = category.transactions.len();
                if count > 0 && app.selected_transaction_index < count {
                    let storage_index = count - 1 - app.selected_transaction_index;
                    let txn_id = category.transactions[storage_index].id;
                    app.book.delete_transaction(id, txn_id)?;
                }
            }
        }
        _ => {}
    }
    Ok(DetailMode::Viewing)
}

fn handle_transaction_form_key(
    app: &mut App,
    id: CategoryId,
    mut form: TransactionForm,
    key: KeyEvent,
) -> BudgetResult<DetailMode> {
    match key.code {
        KeyCode::Esc => {
            app.status_message = None;
            Ok(DetailMode::Viewing)
        }
        KeyCode::Enter => {
            let amount = match Money::parse(form.amount.value()) {
                Ok(m) if m.cents() > 0 => m,
                _ => {
                    app.set_status("Enter an amount greater than zero");
                    return Ok(DetailMode::AddingTransaction(form));
                }
            };
            app.book
                .add_transaction(id, form.kind, amount, form.description.value())?;
            app.status_message = None;
            app.selected_transaction_index = 0;
            Ok(DetailMode::Viewing)
        }
        KeyCode::Tab | KeyCode::Down => {
            form.cycle_focus();
            sync_transaction_focus(&mut form);
            Ok(DetailMode::AddingTransaction(form))
        }
        code => {
            match form.focus {
                TransactionField::Kind => {
                    if matches!(
                        code,
                        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
                    ) {
                        form.kind = form.kind.toggled();
                    }
                }
                _ => {
                    if let Some(input) = form.focused_input() {
                        match code {
                            KeyCode::Char(c) => input.insert(c),
                            KeyCode::Backspace => input.backspace(),
                            KeyCode::Left => input.move_left(),
                            KeyCode::Right => input.move_right(),
                            _ => {}
                        }
                    }
                }
            }
            Ok(DetailMode::AddingTransaction(form))
        }
    }
}

fn handle_detail_edit_key(
    app: &mut App,
    id: CategoryId,
    mut form: CategoryForm,
    key: KeyEvent,
) -> BudgetResult<DetailMode> {
    match key.code {
        KeyCode::Esc => Ok(DetailMode::Viewing),
        KeyCode::Enter => {
            if form.name.value().trim().is_empty() {
                app.set_status("Category name cannot be empty");
                return Ok(DetailMode::EditingCategory(form));
            }
            app.book.rename_category(id, form.name.value().trim())?;
            app.book.update_allocation(id, form.allocated.value())?;
            app.status_message = None;
            Ok(DetailMode::Viewing)
        }
        _ => {
            edit_category_form(&mut form, key);
            Ok(DetailMode::EditingCategory(form))
        }
    }
}

/// Apply a non-committing key to a category form
fn edit_category_form(form: &mut CategoryForm, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
            form.cycle_focus();
            sync_category_focus(form);
        }
        KeyCode::Char(c) => form.focused_input().insert(c),
        KeyCode::Backspace => form.focused_input().backspace(),
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        _ => {}
    }
}

fn focus_category_form(mut form: CategoryForm) -> CategoryForm {
    sync_category_focus(&mut form);
    form
}

fn sync_category_focus(form: &mut CategoryForm) {
    let focus = form.focus;
    form.name.focused = focus == CategoryField::Name;
    form.allocated.focused = focus == CategoryField::Allocated;
}

fn sync_transaction_focus(form: &mut TransactionForm) {
    let focus = form.focus;
    form.amount.focused = focus == TransactionField::Amount;
    form.description.focused = focus == TransactionField::Description;
}
