//! Portal error types.

use thiserror::Error;

/// Errors from a single portal lookup.
#[derive(Debug, Error)]
pub enum PortalError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The portal answered with a non-success status.
    #[error("portal returned {status}: {message}")]
    Status {
        /// HTTP status code returned by the portal.
        status: u16,
        /// Response body, if any.
        message: String,
    },
}
