//! Cardbank Core - an in-memory, menu-driven toy bank
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Account, menu commands and outcomes, errors
//! - **ports**: the `Console` trait every interaction goes through
//! - **services**: the menu loop, the banking system, event logging
//! - **adapters**: a scripted console for tests and embedding
//!
//! Nothing is persisted: accounts live as long as their `BankingSystem`.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types at crate root
pub use config::BankConfig;
pub use domain::result::{Error, Result};
pub use domain::{Account, Command, Menu, MenuOutcome};
pub use ports::{Console, Notice};
pub use services::{BankingSystem, EntryPoint, LogEvent, LoggingService};
