//! # lab-db
//!
//! libSQL persistence for labsync specimen records.
//!
//! A single `samples` table holds every registered specimen. The reconciler
//! reads pending rows and commits parsed results back by barcode; the CLI
//! registers and lists specimens.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

use error::DatabaseError;
use libsql::Builder;

pub use service::SpecimenStore;

/// Database handle wrapping a libSQL database and its connection.
pub struct LabDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LabDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let lab_db = Self { db, conn };
        lab_db.run_migrations().await?;
        tracing::debug!(path, "specimen store ready");
        Ok(lab_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> LabDb {
        LabDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["samples"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some(), "samples should exist");
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn barcode_is_not_unique_at_schema_level() {
        let db = test_db().await;
        for _ in 0..2 {
            db.conn()
                .execute(
                    "INSERT INTO samples (name, barcode, created_time, updated_time)
                     VALUES ('Ada', 'B-1', '2024-01-01 00:00:00', '2024-01-01 00:00:00')",
                    (),
                )
                .await
                .unwrap();
        }
        let mut rows = db
            .conn()
            .query("SELECT COUNT(*) FROM samples WHERE barcode = 'B-1'", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 2);
    }
}
