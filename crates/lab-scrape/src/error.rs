//! Scrape error types.

use thiserror::Error;

/// Errors raised while reading a portal document.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The response body could not be read to the end.
    #[error("failed to read document: {0}")]
    Read(#[from] std::io::Error),
}
