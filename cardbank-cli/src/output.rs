//! Output formatting utilities

use std::io::IsTerminal;

use cardbank_core::Notice;
use colored::Colorize;

/// Disable colors when asked to, or when stdout is not a terminal
pub fn configure_colors(no_color: bool) {
    if no_color || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }
}

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message to stderr
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print a warning message
pub fn warning(msg: &str) {
    println!("{}", msg.yellow());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Print a status line from the banking system
///
/// Everything goes to stdout, failed logins included: they are part of the
/// dialogue, not program errors.
pub fn notice(notice: Notice, msg: &str) {
    match notice {
        Notice::Info => info(msg),
        Notice::Success => success(msg),
        Notice::Warning => warning(msg),
        Notice::Error => println!("{}", msg.red()),
    }
}
