//! Centralized error types for all Rust libraries.
//!
//! Library crates keep their own precise error enums and convert into
//! [`PlatformError`] at service boundaries, where callers only need to know
//! what kind of failure happened and whether trying again could help.

use thiserror::Error;

/// Common error type for platform operations.
///
/// All errors are classified as either retryable or non-retryable,
/// which helps callers decide whether to retry failed operations.
#[derive(Error, Debug)]
pub enum PlatformError {
    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input or configuration provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Caller cancelled the operation
    #[error("Operation cancelled")]
    Cancelled,

    /// Local I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlatformError {
    /// Check if this error is retryable.
    ///
    /// Only local I/O failures are treated as transient; the rest need the
    /// caller or an operator to change something first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_common::PlatformError;
    ///
    /// let err = PlatformError::Io(std::io::Error::other("disk"));
    /// assert!(err.is_retryable());
    ///
    /// let err = PlatformError::NotFound("token file".to_string());
    /// assert!(!err.is_retryable());
    /// ```
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Create a not found error with the given message.
    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid input error with the given message.
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
