//! Cross-cutting error types for labsync.
//!
//! Domain-specific errors (`DatabaseError`, `ScrapeError`, `PortalError`, ...)
//! live in their respective crates and converge in `lab-cli`.

use thiserror::Error;

/// Errors that can be raised by any labsync crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required field was empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
