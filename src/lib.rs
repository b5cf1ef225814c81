#![allow(clippy::const_is_empty)]
#![allow(clippy::collapsible_if)]
#![allow(clippy::too_many_arguments)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for the binaries and integration tests)
pub use app::App;
pub use config::PERSISTENCE;
pub use domain::{
    ChartRange, KpiState, NotificationState, ORDERS, Order, OrdersTable, SortDirection, SortKey,
    Theme, ThemeController, filter_orders, sort_orders,
};
pub use engine::{KpiScheduler, KpiSimulator};
pub use error::{DashboardError, Result};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed for the KPI random walk (OS entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Seconds between KPI updates
    #[arg(long, default_value_t = config::KPI.tick_period.as_secs())]
    pub kpi_period_secs: u64,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            seed: None,
            kpi_period_secs: config::KPI.tick_period.as_secs(),
        }
    }
}

/// Main application entry point - creates the GUI app.
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
