//! Scripted console for testing
//!
//! Replays a fixed list of input lines and records everything the banking
//! system prints, so whole sessions can be driven without a terminal.
//! Pauses are recorded instead of slept.

use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::result::{Error, Result};
use crate::ports::{Console, Notice};

/// One thing the console was asked to do, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transcript {
    Said(String),
    Notified(Notice, String),
    Prompted(String),
    SecretPrompted(String),
    Paused(Duration),
}

/// In-memory console fed from a script
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<Transcript>,
}

impl ScriptedConsole {
    /// Create a console that will answer prompts with `lines`, in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything recorded so far
    pub fn transcript(&self) -> &[Transcript] {
        &self.transcript
    }

    /// Every printed line (plain and status) in order
    pub fn output(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                Transcript::Said(line) | Transcript::Notified(_, line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Status lines of one kind
    pub fn notices(&self, notice: Notice) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                Transcript::Notified(n, line) if *n == notice => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Every recorded pause
    pub fn pauses(&self) -> Vec<Duration> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                Transcript::Paused(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    /// Count of printed lines equal to `line`
    pub fn count_line(&self, line: &str) -> usize {
        self.output().into_iter().filter(|l| *l == line).count()
    }

    /// Input lines not yet consumed
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    fn next_input(&mut self) -> Result<String> {
        self.input.pop_front().ok_or(Error::InputClosed)
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) {
        self.transcript.push(Transcript::Said(line.to_string()));
    }

    fn notify(&mut self, notice: Notice, line: &str) {
        self.transcript
            .push(Transcript::Notified(notice, line.to_string()));
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.transcript.push(Transcript::Prompted(prompt.to_string()));
        self.next_input()
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        self.transcript
            .push(Transcript::SecretPrompted(prompt.to_string()));
        self.next_input()
    }

    fn pause(&mut self, duration: Duration) {
        self.transcript.push(Transcript::Paused(duration));
    }
}
