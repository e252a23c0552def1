//! Service layer - the menus and the flows behind them

pub mod account;
pub mod banking;
pub mod logging;
pub mod menu;

pub use banking::BankingSystem;
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
pub use menu::{parse_selection, render, run_menu, Selection};
