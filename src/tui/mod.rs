//! Terminal User Interface module
//!
//! The interactive interface has two routes mirroring the two views of the
//! budget: the dashboard (income, summary tiles, category list) and the
//! category detail (transactions). Rendering always reads straight from the
//! `BudgetBook`; key handling translates input into its mutation calls.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
