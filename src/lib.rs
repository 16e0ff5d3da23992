// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod table;
pub mod ui;
pub mod utils;

pub use app::App;
pub use data::{FetchError, fetch_tickers, parse_tickers_body};
pub use domain::Ticker;
pub use table::TableModel;
pub use ui::TickerTable;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log this crate at debug level
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Main application entry point - creates the GUI app.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
