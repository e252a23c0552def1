//! Terminal console - stdin/stdout adapter for the banking system

use std::io::{self, BufRead, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use cardbank_core::{Console, Error, Notice, Result};
use dialoguer::Password;

use crate::output;

/// Console backed by the process's standard streams
///
/// PINs are read without echo through `dialoguer` when stdin is a terminal.
/// Piped input is read line by line so sessions can be scripted.
pub struct TerminalConsole {
    interactive: bool,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

fn strip_newline(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

fn from_dialoguer(err: dialoguer::Error) -> Error {
    let io_err = match err {
        dialoguer::Error::IO(e) => e,
    };
    if io_err.kind() == io::ErrorKind::UnexpectedEof {
        Error::InputClosed
    } else {
        Error::Io(io_err)
    }
}

impl Console for TerminalConsole {
    fn say(&mut self, line: &str) {
        println!("{}", line);
    }

    fn notify(&mut self, notice: Notice, line: &str) {
        output::notice(notice, line);
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(strip_newline(line))
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        if !self.interactive {
            return self.read_line(prompt);
        }

        // dialoguer adds its own ": " after the prompt
        Password::new()
            .with_prompt(prompt.trim_end().trim_end_matches(':'))
            .allow_empty_password(true)
            .interact()
            .map_err(from_dialoguer)
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
