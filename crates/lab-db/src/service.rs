//! Store handle shared by the reconciler and the CLI.
//!
//! `SpecimenStore` wraps `LabDb`. Repository methods are implemented as
//! `impl SpecimenStore` blocks under `repos/`.

use crate::LabDb;
use crate::error::DatabaseError;

pub struct SpecimenStore {
    db: LabDb,
}

impl SpecimenStore {
    /// Open the store at `db_path` (`":memory:"` for tests).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open(db_path: &str) -> Result<Self, DatabaseError> {
        Ok(Self {
            db: LabDb::open_local(db_path).await?,
        })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LabDb {
        &self.db
    }
}
