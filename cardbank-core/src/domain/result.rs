//! Result and error types for the core library

use thiserror::Error;

/// Core library error type
///
/// Input mistakes at a menu prompt are not errors: they are reported to the
/// user and re-prompted. Only conditions that end a session surface here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input closed")]
    InputClosed,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True when the session ended because standard input was exhausted
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_message() {
        let err = Error::config("max_login_attempts must be at least 1");
        assert_eq!(
            err.to_string(),
            "Configuration error: max_login_attempts must be at least 1"
        );
        assert!(!err.is_input_closed());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(err.to_string().starts_with("IO error"));
    }

    #[test]
    fn test_input_closed() {
        assert!(Error::InputClosed.is_input_closed());
    }
}
