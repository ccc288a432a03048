//! Sync error types.

use lab_db::error::DatabaseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Pending specimens could not be read; the pass did not start.
    #[error("failed to read pending specimens: {0}")]
    Store(#[source] DatabaseError),

    /// A result commit matched zero or several rows and was rolled back.
    #[error("integrity violation: result for barcode '{barcode}' matched {affected} rows")]
    Integrity { barcode: String, affected: u64 },
}

impl SyncError {
    /// Whether the scheduler must stop instead of waiting for the next pass.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Integrity { .. })
    }
}
