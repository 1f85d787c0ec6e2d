use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::config::{paths::TallyPaths, settings::Settings};
use tally::display::format_overview;
use tally::services::BudgetBook;
use tally::storage::Storage;
use tally::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based monthly budgeting application",
    long_about = "Tally tracks a monthly income, per-category budget allocations, \
                  and the expenses and incomes recorded against each category. \
                  Run without arguments to launch the interactive interface."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Print the budget summary and per-category figures
    Overview,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_default(&paths);
    let storage = Storage::new(&paths)?;
    let mut book = BudgetBook::load(storage);

    match cli.command {
        Some(Commands::Tui) | None => {
            run_tui(&mut book, &settings)?;
        }
        Some(Commands::Overview) => {
            print!("{}", format_overview(&book, &settings));
        }
        Some(Commands::Config) => {
            // Materialize the settings file so users have something to edit
            if !paths.settings_file().exists() {
                settings.save(&paths)?;
            }
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
    }

    Ok(())
}
