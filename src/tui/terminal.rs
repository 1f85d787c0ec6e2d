//! Terminal setup and teardown
//!
//! Initializes and restores the terminal state, including a panic hook
//! that restores the terminal before the panic message is printed.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::services::BudgetBook;

use super::app::App;
use super::event::{Event, EventHandler};
use super::handler::handle_key;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
pub fn run_tui(book: &mut BudgetBook, settings: &Settings) -> Result<()> {
    let mut terminal = init_terminal()?;

    let mut app = App::new(book, settings);
    let events = EventHandler::default();

    loop {
        terminal.draw(|frame| {
            super::views::render(frame, &mut app);
        })?;

        match events.next()? {
            Event::Key(key_event) => {
                handle_key(&mut app, key_event)?;
            }
            Event::Resize(_, _) => {
                // Terminal will redraw automatically
            }
            Event::Tick => {}
        }

        if app.should_quit {
            break;
        }
    }

    restore_terminal()?;

    Ok(())
}
