//! Unified error types for chatrace.
//!
//! Every fallible operation in the library returns [`ChatraceError`]. Lines
//! that do not match the log pattern are not errors: they are skipped and
//! counted in [`ParseStats`](crate::parser::ParseStats).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatrace operations.
///
/// # Example
///
/// ```rust
/// use chatrace::error::Result;
/// use chatrace::LogEntry;
///
/// fn load() -> Result<Vec<LogEntry>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatraceError>;

/// The error type for all chatrace operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatraceError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The log file doesn't exist
    /// - Permission denied
    /// - The output directory is not writable
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The line pattern could not be compiled or lacks the required groups.
    #[error("Invalid line pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The pattern as given by the user
        pattern: String,
        /// What is wrong with it
        message: String,
    },

    /// Invalid date in a filter option.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// No line of the log matched the pattern, so there is nothing to count.
    #[error("No messages found{}", path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    EmptyLog {
        /// The log file, if known
        path: Option<PathBuf>,
    },

    /// A configuration file could not be read or decoded.
    #[error("Invalid config{}: {message}", path.as_ref().map(|p| format!(" (file: {})", p.display())).unwrap_or_default())]
    Config {
        /// The config file, if known
        path: Option<PathBuf>,
        /// Decoder message
        message: String,
    },

    /// Drawing or encoding a frame failed.
    #[error("Render error: {0}")]
    Render(String),

    /// Unsupported export or render target.
    #[error("Unsupported output '{path}': {message}")]
    UnsupportedOutput {
        /// The offending output path
        path: PathBuf,
        /// Why it is not supported
        message: String,
    },

    /// UTF-8 encoding error.
    ///
    /// Occurs when an in-memory export is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding/decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatraceError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatraceError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatraceError {
    /// Creates an invalid pattern error.
    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        ChatraceError::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatraceError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates an empty log error.
    pub fn empty_log(path: Option<PathBuf>) -> Self {
        ChatraceError::EmptyLog { path }
    }

    /// Creates a config error.
    pub fn config(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        ChatraceError::Config {
            path,
            message: message.into(),
        }
    }

    /// Creates a render error from anything printable.
    pub fn render(message: impl std::fmt::Display) -> Self {
        ChatraceError::Render(message.to_string())
    }

    /// Creates an unsupported output error.
    pub fn unsupported_output(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ChatraceError::UnsupportedOutput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatraceError::Io(_))
    }

    /// Returns `true` if this is an invalid pattern error.
    pub fn is_invalid_pattern(&self) -> bool {
        matches!(self, ChatraceError::InvalidPattern { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatraceError::InvalidDate { .. })
    }

    /// Returns `true` if the log had no matching lines.
    pub fn is_empty_log(&self) -> bool {
        matches!(self, ChatraceError::EmptyLog { .. })
    }
}
