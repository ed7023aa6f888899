//! Error types for the Rust Velocity Engine
//!
//! This module defines all error types that can occur while driving the
//! decision engine. Errors are designed to be descriptive and user-friendly
//! for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc. (fatal)
//! - **Parse Errors**: Malformed JSON lines, bad amounts or timestamps
//!   (recoverable - the line is skipped and processing continues)
//! - **Config Errors**: Unreadable or malformed configuration file (fatal)
//!
//! The core engine itself has no error surface: given a well-formed event,
//! evaluation always succeeds and the only outcomes are accept or reject.

use thiserror::Error;

/// Main error type for the velocity engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VelocityError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    ///
    /// This is typically a fatal error (file permissions, disk full, etc.).
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// A line of input could not be parsed
    ///
    /// This is a recoverable error - the malformed line is skipped
    /// and processing continues with the next line.
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Load amount could not be interpreted or was negative
    ///
    /// This is a recoverable error - the event is skipped.
    #[error("Invalid load amount '{amount}' for event {id}")]
    InvalidAmount {
        /// The invalid amount string
        amount: String,
        /// Event ID
        id: String,
    },

    /// The configuration file could not be read or parsed
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("Config error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

// Conversion from io::Error to VelocityError
impl From<std::io::Error> for VelocityError {
    fn from(error: std::io::Error) -> Self {
        VelocityError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to VelocityError
impl From<serde_json::Error> for VelocityError {
    fn from(error: serde_json::Error) -> Self {
        let line = error.line() as u64;

        VelocityError::ParseError {
            line: (line > 0).then_some(line),
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl VelocityError {
    /// Create a ParseError with a line number
    pub fn parse_error(line: u64, message: impl Into<String>) -> Self {
        VelocityError::ParseError {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, id: &str) -> Self {
        VelocityError::InvalidAmount {
            amount: amount.to_string(),
            id: id.to_string(),
        }
    }

    /// Create a ConfigError
    pub fn config_error(message: impl Into<String>) -> Self {
        VelocityError::ConfigError {
            message: message.into(),
        }
    }
}
