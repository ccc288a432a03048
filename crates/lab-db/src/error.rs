//! Database error types for lab-db.

use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed or returned malformed data.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A result commit touched a number of rows other than one.
    ///
    /// The update has been rolled back when this is returned.
    #[error("Expected to update one row for barcode '{barcode}', matched {affected}")]
    RowCount { barcode: String, affected: u64 },

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
