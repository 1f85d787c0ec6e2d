//! Dashboard view
//!
//! Income editor, the four summary tiles, and the category list with
//! allocated/spent/remaining figures and a progress bar per category.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::Money;

use super::super::app::{App, DashboardMode};
use super::{progress_bar, render_category_form, render_footer};

const HINTS: &str =
    "↑/↓ select · Enter open · i income · a add · e edit · d delete · q quit";

/// Render the dashboard
pub fn render(frame: &mut Frame, app: &mut App) {
    let [income_area, tiles_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_income(frame, app, income_area);
    render_summary_tiles(frame, app, tiles_area);
    render_category_list(frame, app, list_area);
    render_footer(frame, app, footer_area, HINTS);

    match &app.dashboard_mode {
        DashboardMode::AddingCategory(form) => {
            render_category_form(frame, "Add Category", form);
        }
        DashboardMode::EditingCategory { form, .. } => {
            render_category_form(frame, "Edit Category", form);
        }
        _ => {}
    }
}

fn render_income(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Monthly Income ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.dashboard_mode {
        DashboardMode::EditingIncome(input) => {
            frame.render_widget(input, inner);
        }
        _ => {
            let line = Line::from(vec![
                Span::styled(
                    app.book
                        .income()
                        .format_with_symbol(&app.settings.currency_symbol),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  (press i to edit)", Style::default().fg(Color::DarkGray)),
            ]);
            frame.render_widget(Paragraph::new(line), inner);
        }
    }
}

fn render_summary_tiles(frame: &mut Frame, app: &App, area: Rect) {
    let tiles = Layout::horizontal([
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
        Constraint::Ratio(1, 4),
    ])
    .split(area);

    let unallocated = app.book.unallocated();
    let unallocated_color = if unallocated.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    render_tile(frame, tiles[0], "Income", app.book.income(), Color::White, app);
    render_tile(
        frame,
        tiles[1],
        "Allocated",
        app.book.total_allocated(),
        Color::White,
        app,
    );
    render_tile(frame, tiles[2], "Unallocated", unallocated, unallocated_color, app);
    render_tile(
        frame,
        tiles[3],
        "Spent",
        app.book.total_spent(),
        Color::White,
        app,
    );
}

fn render_tile(frame: &mut Frame, area: Rect, label: &str, amount: Money, color: Color, app: &App) {
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

fn render_category_list(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Categories ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL);

    if app.book.categories().is_empty() {
        let text = Paragraph::new("No categories yet. Press 'a' to add one.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = app
        .book
        .categories()
        .iter()
        .map(|category| {
            let spent = category.spent();
            let remaining = category.remaining();
            let over = category.is_over_budget();

            let remaining_text = if over {
                format!("{} ⚠", remaining.format_with_symbol(symbol))
            } else {
                remaining.format_with_symbol(symbol)
            };
            let remaining_style = if over {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            let bar_style = if over {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Cyan)
            };

            Row::new(vec![
                Cell::from(category.name.clone()),
                Cell::from(category.allocated.format_with_symbol(symbol)),
                Cell::from(spent.abs().format_with_symbol(symbol)),
                Cell::from(remaining_text).style(remaining_style),
                Cell::from(progress_bar(category.progress_percent(), 16)).style(bar_style),
            ])
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Length(22),
    ];

    let header = Row::new(vec![
        Cell::from("Category"),
        Cell::from("Allocated"),
        Cell::from("Spent"),
        Cell::from("Remaining"),
        Cell::from("Progress"),
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
    state.select(Some(app.selected_category_index));

    frame.render_stateful_widget(table, area, &mut state);
}
