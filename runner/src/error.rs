//! Runner error types.

use thiserror::Error;

/// Errors that abort a run under exit-first mode.
#[derive(Debug, Error)]
pub enum RunError {
    /// The failing feature carried an underlying host fault; it is
    /// re-raised to the caller.
    #[error("{message}")]
    Fault { message: String },

    /// The failing feature was a plain assertion mismatch; the caller maps
    /// this to a failure exit status.
    #[error("assertion failed: {text}")]
    Assertion { text: String },
}

impl RunError {
    pub fn fault(message: impl Into<String>) -> Self {
        Self::Fault {
            message: message.into(),
        }
    }

    pub fn assertion(text: impl Into<String>) -> Self {
        Self::Assertion { text: text.into() }
    }
}

/// Result type for run operations.
pub type RunResult<T> = Result<T, RunError>;
