//! Error types for fixture loading.
//!
//! This module provides structured error handling for fixture operations.
//! Fixture loading is test-setup code, so the propagation policy is simple:
//! no retries, no recovery - any failure aborts the calling test loudly with
//! enough context (path, diagnostic) to pinpoint the broken fixture.
//!
//! # Error Types
//!
//! The main error type is [`FixtureError`], which covers both failure modes:
//! - The fixture file is missing or unreadable
//! - The fixture content is not valid JSON, or does not satisfy the target
//!   shape (missing required field, type mismatch, wrong root kind for
//!   collection loads)
//!
//! # Result Type
//!
//! Use [`FixtureResult<T>`] as a convenient alias for `Result<T, FixtureError>`:
//!
//! ```rust
//! use companies_house_fixtures::FixtureResult;
//!
//! fn my_setup() -> FixtureResult<String> {
//!     Ok("fixture data".to_string())
//! }
//! ```

use crate::logging::{log_error, log_warn};
use std::path::PathBuf;
use thiserror::Error;

/// Convenient result type for fixture operations.
///
/// Alias for `Result<T, FixtureError>`. Use this in test setup code that
/// loads fixtures.
pub type FixtureResult<T> = std::result::Result<T, FixtureError>;

/// Errors that can occur while loading a fixture.
///
/// Each variant carries the fixture path so a failing test reports which
/// file to look at. Errors are never recovered from - a broken fixture
/// means the enclosing test must fail.
///
/// # Creating Errors
///
/// Use the constructor methods which automatically log the error:
///
/// ```rust
/// use companies_house_fixtures::FixtureError;
///
/// let err = FixtureError::parse_error("broken.json", "expected value at line 1");
/// assert!(!err.is_not_found());
/// ```
#[derive(Error, Debug)]
pub enum FixtureError {
    /// The requested fixture path does not resolve to a readable file.
    ///
    /// Check the fixture root and the relative path. The underlying I/O
    /// error is preserved as the source.
    #[error("Fixture not found: {path}")]
    FixtureNotFound {
        /// The full path that failed to resolve.
        path: PathBuf,
        /// The underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// The fixture content is not valid JSON or does not match the target shape.
    ///
    /// Covers syntax errors, missing required fields, type mismatches, and
    /// a non-array document root on collection loads. No partial value is
    /// ever returned.
    #[error("Failed to parse fixture {path}: {message}")]
    ParseError {
        /// The full path of the fixture that failed to parse.
        path: PathBuf,
        /// Details about the parsing failure.
        message: String,
    },
}

impl FixtureError {
    /// Whether this error is a missing-file failure rather than a parse failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FixtureNotFound { .. })
    }

    /// Create a fixture-not-found error (logs at ERROR level).
    pub fn fixture_not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        log_error!(
            error_type = "fixture_not_found",
            path = %path.display(),
            io_error = %source,
            "Fixture file missing or unreadable"
        );
        Self::FixtureNotFound { path, source }
    }

    /// Create a parse error (logs at WARN level).
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        let path = path.into();
        let message = message.into();
        log_warn!(
            error_type = "parse_error",
            path = %path.display(),
            message = %message,
            "Fixture content invalid for requested shape"
        );
        Self::ParseError { path, message }
    }
}
