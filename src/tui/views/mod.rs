//! TUI views
//!
//! Two routed views: the dashboard and the category detail screen. Shared
//! rendering helpers (form popups, progress bars) live here.

pub mod dashboard;
pub mod detail;

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, CategoryField, CategoryForm, Route};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.route {
        Route::Dashboard => dashboard::render(frame, app),
        Route::Category(id) => detail::render(frame, app, id),
    }
}

/// A centered rectangle of fixed size for popups
pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Textual progress bar, e.g. `"███░░░░░░░ 30%"`
pub(crate) fn progress_bar(percent: u16, width: usize) -> String {
    let filled = (percent as usize * width) / 100;
    let mut bar = String::new();
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    format!("{} {:>3}%", bar, percent)
}

/// Render the add/edit category popup
pub(crate) fn render_category_form(frame: &mut Frame, title: &str, form: &CategoryForm) {
    let area = centered_rect(frame.area(), 44, 6);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", title))
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
    ])
    .split(inner);

    render_labeled_input(frame, rows[0], "Name", &form.name, form.focus == CategoryField::Name);
    render_labeled_input(
        frame,
        rows[1],
        "Allocated",
        &form.allocated,
        form.focus == CategoryField::Allocated,
    );

    let hint = Line::from("Tab switch · Enter save · Esc cancel")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(hint), rows[3]);
}

/// Render a `label: input` row inside a form
pub(crate) fn render_labeled_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &super::widgets::TextInput,
    focused: bool,
) {
    let label_width = 13u16;
    let [label_area, input_area] =
        Layout::horizontal([Constraint::Length(label_width), Constraint::Min(0)]).areas(area);

    let label_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(
        Paragraph::new(format!("{}:", label)).style(label_style),
        label_area,
    );
    frame.render_widget(input, input_area);
}

/// Render the footer: a status message if one is set, otherwise key hints
pub(crate) fn render_footer(frame: &mut Frame, app: &App, area: Rect, hints: &str) {
    let (text, style) = match &app.status_message {
        Some(message) => (message.clone(), Style::default().fg(Color::Red)),
        None => (hints.to_string(), Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}
