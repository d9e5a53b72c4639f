//! Signed assertion error types using thiserror 2.0.
//!
//! Every failure is returned to the caller as-is: the provider never retries,
//! logs-and-continues or substitutes a fallback value.

use rust_common::PlatformError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while retrieving a signed assertion.
#[derive(Error, Debug)]
pub enum AssertionError {
    /// No explicit path was given and the environment variable is unset or empty
    #[error("No signed assertion file configured: pass a path or set {var}")]
    MissingSource {
        /// Environment variable that was consulted
        var: String,
    },

    /// Explicit path was given but is empty
    #[error("Signed assertion file path is empty")]
    EmptyPath,

    /// Resolved path does not exist
    #[error("Signed assertion file not found: {}", path.display())]
    FileNotFound {
        /// Path that was attempted
        path: PathBuf,
    },

    /// Caller cancelled the retrieval
    #[error("Signed assertion retrieval cancelled")]
    Cancelled,

    /// Any other read failure
    #[error("Failed to read signed assertion file {}: {source}", path.display())]
    Io {
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type for signed assertion operations.
pub type AssertionResult<T> = Result<T, AssertionError>;

impl AssertionError {
    /// Check if a caller could reasonably try again.
    ///
    /// Only unexpected I/O failures qualify; configuration, missing files and
    /// cancellation need someone to change something first.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Whether the resolved file did not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Whether the caller cancelled the retrieval.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Create a missing source error for the given variable.
    #[must_use]
    pub fn missing_source(var: impl Into<String>) -> Self {
        Self::MissingSource { var: var.into() }
    }

    /// Classify an I/O error raised while reading `path`.
    #[must_use]
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::FileNotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

impl From<AssertionError> for PlatformError {
    fn from(err: AssertionError) -> Self {
        match err {
            AssertionError::MissingSource { .. } | AssertionError::EmptyPath => {
                Self::invalid_input(err.to_string())
            }
            AssertionError::FileNotFound { path } => Self::not_found(path.display().to_string()),
            AssertionError::Cancelled => Self::Cancelled,
            AssertionError::Io { source, .. } => Self::Io(source),
        }
    }
}
