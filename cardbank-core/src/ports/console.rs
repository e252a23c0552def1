//! Console port - the user-facing terminal abstraction

use std::time::Duration;

use crate::domain::result::Result;

/// How a status line should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Success,
    Warning,
    Error,
}

/// Interactive console abstraction
///
/// The banking system talks to the user only through this trait. The CLI
/// provides a terminal implementation; tests drive sessions with a scripted one.
pub trait Console {
    /// Print a plain line
    fn say(&mut self, line: &str);

    /// Print a status line with the given presentation
    fn notify(&mut self, notice: Notice, line: &str);

    /// Show `prompt` and read one line, without its trailing newline
    ///
    /// Returns [`Error::InputClosed`](crate::Error::InputClosed) once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Like [`read_line`](Console::read_line) but without echoing the input
    fn read_secret(&mut self, prompt: &str) -> Result<String>;

    /// Block for `duration`
    fn pause(&mut self, duration: Duration);
}
