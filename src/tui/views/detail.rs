//! Category detail view
//!
//! Shows one category's figures, a gauge of how much of the allocation is
//! used up, and its transactions newest first. A route id that no longer
//! resolves renders the not-found state instead.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Category, CategoryId, Money, TransactionKind};

use super::super::app::{App, DetailMode, TransactionField, TransactionForm};
use super::{centered_rect, render_category_form, render_footer, render_labeled_input};

const HINTS: &str = "↑/↓ select · a add transaction · e edit · d delete · Esc back · q quit";

/// Render the detail view for the given category id
pub fn render(frame: &mut Frame, app: &mut App, id: CategoryId) {
    let Some(category) = app.book.category(id).cloned() else {
        render_not_found(frame);
        return;
    };

    let [header_area, tiles_area, gauge_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, &category, header_area);
    render_figures(frame, app, &category, tiles_area);
    render_gauge(frame, &category, gauge_area);
    render_transactions(frame, app, &category, list_area);
    render_footer(frame, app, footer_area, HINTS);

    match &app.detail_mode {
        DetailMode::AddingTransaction(form) => render_transaction_form(frame, form),
        DetailMode::EditingCategory(form) => {
            render_category_form(frame, "Edit Category", form);
        }
        DetailMode::Viewing => {}
    }
}

fn render_not_found(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 40, 4);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from("Category not found").style(
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from("Press Esc to return to the dashboard")
            .style(Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines).centered(), inner);
}

fn render_header(frame: &mut Frame, category: &Category, area: Rect) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let title = Paragraph::new(category.name.as_str()).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, inner);
}

fn render_figures(frame: &mut Frame, app: &App, category: &Category, area: Rect) {
    let tiles = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    let remaining = category.remaining();
    let remaining_color = if category.is_over_budget() {
        Color::Red
    } else {
        Color::Green
    };

    render_tile(frame, app, tiles[0], "Allocated", category.allocated, Color::White);
    render_tile(
        frame,
        app,
        tiles[1],
        "Spent",
        category.spent().abs(),
        Color::White,
    );
    render_tile(frame, app, tiles[2], "Remaining", remaining, remaining_color);
}

fn render_tile(frame: &mut Frame, app: &App, area: Rect, label: &str, amount: Money, color: Color) {
    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let text = Paragraph::new(amount.format_with_symbol(&app.settings.currency_symbol))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
    frame.render_widget(text, inner);
}

fn render_gauge(frame: &mut Frame, category: &Category, area: Rect) {
    let percent = category.progress_percent();
    let color = if category.is_over_budget() {
        Color::Red
    } else if percent >= 80 {
        Color::Yellow
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .percent(percent)
        .label(format!("{}%", percent));
    frame.render_widget(gauge, area);
}

fn render_transactions(frame: &mut Frame, app: &App, category: &Category, area: Rect) {
    let block = Block::default()
        .title(" Transactions ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    if category.transactions.is_empty() {
        let text = Paragraph::new("No transactions yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = category
        .transactions
        .iter()
        .rev()
        .map(|txn| {
            let signed = txn.signed();
            let (amount_text, amount_color) = if signed.is_negative() {
                (format!("-{}", signed.abs().format_with_symbol(symbol)), Color::Red)
            } else {
                (format!("+{}", signed.format_with_symbol(symbol)), Color::Green)
            };

            Row::new(vec![
                Cell::from(txn.date.format(&app.settings.date_format).to_string()),
                Cell::from(txn.kind.to_string()),
                Cell::from(txn.description.clone()),
                Cell::from(amount_text).style(Style::default().fg(amount_color)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Min(16),
        Constraint::Length(14),
    ];

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Kind"),
        Cell::from("Description"),
        Cell::from("Amount"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_transaction_index));

    frame.render_stateful_widget(table, area, &mut state);
}

fn render_transaction_form(frame: &mut Frame, form: &TransactionForm) {
    let area = centered_rect(frame.area(), 48, 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Transaction ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);

    render_kind_row(frame, rows[0], form);
    render_labeled_input(
        frame,
        rows[1],
        "Amount",
        &form.amount,
        form.focus == TransactionField::Amount,
    );
    render_labeled_input(
        frame,
        rows[2],
        "Description",
        &form.description,
        form.focus == TransactionField::Description,
    );

    let hint = Line::from("Tab switch · Space toggle kind · Enter save · Esc cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(hint), rows[4]);
}

fn render_kind_row(frame: &mut Frame, area: Rect, form: &TransactionForm) {
    let focused = form.focus == TransactionField::Kind;
    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let [label_area, value_area] =
        Layout::horizontal([Constraint::Length(13), Constraint::Min(0)]).areas(area);
    frame.render_widget(Paragraph::new("Kind:").style(label_style), label_area);

    let value = match form.kind {
        TransactionKind::Debit => "◀ Expense ▶",
        TransactionKind::Credit => "◀ Income ▶",
    };
    let value_style = if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(Paragraph::new(value).style(value_style), value_area);
}
