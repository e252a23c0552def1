//! CLI command implementations

pub mod session;

use cardbank_core::{EntryPoint, LoggingService};

/// Get the logging service for CLI sessions
pub fn get_logger() -> LoggingService {
    LoggingService::new(EntryPoint::Cli, env!("CARGO_PKG_VERSION"))
}
