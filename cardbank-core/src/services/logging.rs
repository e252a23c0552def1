//! Logging service - structured event logging
//!
//! Privacy-safe: events carry names and counters only. Card numbers and PINs
//! are never logged.
//!
//! Every event is emitted through `tracing` and kept in a bounded in-memory
//! buffer so a session can be inspected after the fact.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for generating unique IDs within the same millisecond
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Entries kept in memory before the oldest are dropped
pub const DEFAULT_BUFFER_CAPACITY: usize = 1_000;

/// Generate a unique ID based on timestamp + counter
fn generate_id() -> u64 {
    // Lower 16 bits: counter, upper bits: timestamp
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed) & 0xFFFF;
    ((now_ms() as u64) << 16) | counter
}

/// Get current unix timestamp in milliseconds
fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

/// Detect the current platform
fn detect_platform() -> &'static str {
    if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    }
}

/// Entry point for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    Cli,
    Embedded,
}

impl EntryPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Cli => "cli",
            EntryPoint::Embedded => "embedded",
        }
    }
}

/// A log event to be recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub event: String,
    pub command: Option<String>,
    pub attempt: Option<u32>,
    pub error_message: Option<String>,
}

impl LogEvent {
    /// Create a new log event with just an event name
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            command: None,
            attempt: None,
            error_message: None,
        }
    }

    /// Set the menu command that triggered the event
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Set the login attempt number (1-based)
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = Some(attempt);
        self
    }

    /// Set error information
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}

/// A log entry as kept in the buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: i64,
    pub entry_point: String,
    pub app_version: String,
    pub platform: String,
    pub event: String,
    pub command: Option<String>,
    pub attempt: Option<u32>,
    pub error_message: Option<String>,
}

/// Service for structured event logging
pub struct LoggingService {
    entries: Mutex<VecDeque<LogEntry>>,
    capacity: usize,
    entry_point: EntryPoint,
    app_version: String,
    platform: &'static str,
}

impl LoggingService {
    /// Create a new logging service
    pub fn new(entry_point: EntryPoint, app_version: impl Into<String>) -> Self {
        Self::with_capacity(entry_point, app_version, DEFAULT_BUFFER_CAPACITY)
    }

    /// Create a logging service keeping at most `capacity` entries
    pub fn with_capacity(
        entry_point: EntryPoint,
        app_version: impl Into<String>,
        capacity: usize,
    ) -> Self {
        Self {
            entries: Mutex::new(VecDeque::with_capacity(capacity.min(64))),
            capacity,
            entry_point,
            app_version: app_version.into(),
            platform: detect_platform(),
        }
    }

    /// Record an event
    pub fn log(&self, event: LogEvent) {
        let entry = LogEntry {
            id: generate_id(),
            timestamp: now_ms(),
            entry_point: self.entry_point.as_str().to_string(),
            app_version: self.app_version.clone(),
            platform: self.platform.to_string(),
            event: event.event,
            command: event.command,
            attempt: event.attempt,
            error_message: event.error_message,
        };

        match &entry.error_message {
            Some(message) => tracing::warn!(
                event = %entry.event,
                command = entry.command.as_deref(),
                attempt = entry.attempt,
                entry_point = %entry.entry_point,
                error = %message,
                "bank event"
            ),
            None => tracing::info!(
                event = %entry.event,
                command = entry.command.as_deref(),
                attempt = entry.attempt,
                entry_point = %entry.entry_point,
                "bank event"
            ),
        }

        if self.capacity == 0 {
            return;
        }
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() == self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// Convenience method to log a simple event
    pub fn log_event(&self, event: &str) {
        self.log(LogEvent::new(event));
    }

    /// Most recent entries, newest first
    pub fn get_recent(&self, limit: usize) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().rev().take(limit).cloned().collect()
    }

    /// Most recent entries that carry an error, newest first
    pub fn get_errors(&self, limit: usize) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .iter()
            .rev()
            .filter(|e| e.error_message.is_some())
            .take(limit)
            .cloned()
            .collect()
    }

    /// Number of buffered entries
    pub fn count(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Names of every buffered event, oldest first
    pub fn event_names(&self) -> Vec<String> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.iter().map(|e| e.event.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        let service = LoggingService::new(EntryPoint::Cli, "1.0.0");

        service.log_event("test_event");

        let entries = service.get_recent(10);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].event, "test_event");
        assert_eq!(entries[0].entry_point, "cli");
        assert_eq!(entries[0].app_version, "1.0.0");
    }

    #[test]
    fn test_log_with_context() {
        let service = LoggingService::new(EntryPoint::Embedded, "2.0.0");

        service.log(
            LogEvent::new("login_failed")
                .with_command("Log into an account")
                .with_attempt(2),
        );

        let entries = service.get_recent(10);
        assert_eq!(entries[0].event, "login_failed");
        assert_eq!(entries[0].command.as_deref(), Some("Log into an account"));
        assert_eq!(entries[0].attempt, Some(2));
        assert_eq!(entries[0].entry_point, "embedded");
    }

    #[test]
    fn test_get_errors() {
        let service = LoggingService::new(EntryPoint::Cli, "1.0.0");

        service.log_event("ok");
        service.log(LogEvent::new("session_failed").with_error("broken pipe"));

        let errors = service.get_errors(10);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].error_message.as_deref(), Some("broken pipe"));
    }

    #[test]
    fn test_buffer_drops_oldest() {
        let service = LoggingService::with_capacity(EntryPoint::Cli, "1.0.0", 2);

        service.log_event("event1");
        service.log_event("event2");
        service.log_event("event3");

        assert_eq!(service.count(), 2);
        assert_eq!(service.event_names(), vec!["event2", "event3"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let service = LoggingService::new(EntryPoint::Cli, "1.0.0");
        service.log_event("a");
        service.log_event("b");

        let entries = service.get_recent(2);
        assert_ne!(entries[0].id, entries[1].id);
    }
}
