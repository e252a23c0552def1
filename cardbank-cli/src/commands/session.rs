//! Session command - run the interactive banking menu

use anyhow::{Context, Result};
use cardbank_core::{BankConfig, BankingSystem, LogEvent};

use super::get_logger;
use crate::console::TerminalConsole;

pub fn run(config: BankConfig) -> Result<()> {
    let mut bank =
        BankingSystem::new(config, get_logger()).context("Failed to start banking system")?;
    let mut console = TerminalConsole::new();

    match bank.run(&mut console) {
        Ok(outcome) => {
            tracing::debug!(?outcome, accounts = bank.account_count(), "session ended");
            Ok(())
        }
        // Running out of input ends the session like choosing Exit
        Err(e) if e.is_input_closed() => {
            bank.logger().log(LogEvent::new("input_closed"));
            println!();
            Ok(())
        }
        Err(e) => {
            bank.logger()
                .log(LogEvent::new("session_failed").with_error(e.to_string()));
            Err(e).context("Session failed")
        }
    }
}
