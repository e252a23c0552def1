//! Cardbank CLI - a toy bank in your terminal

use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use cardbank_core::config::{DEFAULT_FAILED_LOGIN_DELAY, DEFAULT_MAX_LOGIN_ATTEMPTS};
use cardbank_core::BankConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod console;
mod output;

/// Cardbank - create a card, log in, check your balance
#[derive(Parser)]
#[command(name = "cardbank", version, about, long_about = None)]
struct Cli {
    /// Login attempts allowed before returning to the main menu
    #[arg(long, default_value_t = DEFAULT_MAX_LOGIN_ATTEMPTS)]
    max_attempts: u32,

    /// Pause after a failed login, in milliseconds
    #[arg(long, default_value_t = DEFAULT_FAILED_LOGIN_DELAY.as_millis() as u64)]
    login_delay_ms: u64,

    /// Diagnostic log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn bank_config(&self) -> BankConfig {
        BankConfig::default()
            .with_max_login_attempts(self.max_attempts)
            .with_failed_login_delay(Duration::from_millis(self.login_delay_ms))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli.log_level)?;
    output::configure_colors(cli.no_color);

    let config = cli.bank_config();
    config.validate().context("Invalid options")?;

    commands::session::run(config)
}

/// Send diagnostics to stderr so they never mix with the menu on stdout
fn init_tracing(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .with_context(|| format!("Invalid log level: {}", level))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}
