//! Specimen repository: registration, listing, and result commits.

use chrono::Utc;

use lab_core::{NewSpecimen, PENDING, ResolvedResult, Specimen};

use crate::error::DatabaseError;
use crate::helpers::{format_timestamp, get_opt_string, parse_datetime};
use crate::service::SpecimenStore;

const SELECT_COLUMNS: &str =
    "SELECT name, barcode, results, created_time, updated_time, sample_date FROM samples";

fn row_to_specimen(row: &libsql::Row) -> Result<Specimen, DatabaseError> {
    Ok(Specimen {
        name: row.get::<String>(0)?,
        barcode: row.get::<String>(1)?,
        results: get_opt_string(row, 2)?.unwrap_or_default(),
        created_time: parse_datetime(&row.get::<String>(3)?)?,
        updated_time: parse_datetime(&row.get::<String>(4)?)?,
        sample_date: get_opt_string(row, 5)?,
    })
}

impl SpecimenStore {
    /// Register a specimen in the pending state.
    pub async fn add_specimen(&self, new: &NewSpecimen) -> Result<Specimen, DatabaseError> {
        let now = Utc::now();
        let stamp = format_timestamp(now);

        self.db()
            .conn()
            .execute(
                "INSERT INTO samples (name, barcode, results, created_time, updated_time, sample_date)
                 VALUES (?1, ?2, ?3, ?4, ?5, NULL)",
                libsql::params![
                    new.name.as_str(),
                    new.barcode.as_str(),
                    PENDING,
                    stamp.as_str(),
                    stamp.as_str()
                ],
            )
            .await?;

        tracing::info!(name = %new.name, barcode = %new.barcode, "registered specimen");

        Ok(Specimen {
            name: new.name.clone(),
            barcode: new.barcode.clone(),
            results: PENDING.to_string(),
            created_time: now,
            updated_time: now,
            sample_date: None,
        })
    }

    /// Most recently updated specimens first.
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<Specimen>, DatabaseError> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY updated_time DESC LIMIT ?1");
        let mut rows = self
            .db()
            .conn()
            .query(&sql, [i64::from(limit)])
            .await?;

        let mut specimens = Vec::new();
        while let Some(row) = rows.next().await? {
            specimens.push(row_to_specimen(&row)?);
        }
        tracing::debug!(count = specimens.len(), "listed recent specimens");
        Ok(specimens)
    }

    /// All specimens whose `results` still contain the pending sentinel.
    pub async fn list_pending(&self) -> Result<Vec<Specimen>, DatabaseError> {
        let sql = format!("{SELECT_COLUMNS} WHERE results LIKE ?1 ORDER BY created_time");
        let pattern = format!("%{PENDING}%");
        let mut rows = self.db().conn().query(&sql, [pattern.as_str()]).await?;

        let mut specimens = Vec::new();
        while let Some(row) = rows.next().await? {
            specimens.push(row_to_specimen(&row)?);
        }
        Ok(specimens)
    }

    /// Write a parsed result onto the specimen with `barcode`.
    ///
    /// The update runs in a transaction and is only committed when it
    /// touched exactly one row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::RowCount` (after rolling back) when zero or
    /// several rows carry `barcode`, or `DatabaseError::LibSql` if the
    /// statement fails.
    pub async fn commit_result(
        &self,
        barcode: &str,
        result: &ResolvedResult,
    ) -> Result<(), DatabaseError> {
        let stamp = format_timestamp(Utc::now());
        let tx = self.db().conn().transaction().await?;

        let affected = tx
            .execute(
                "UPDATE samples SET results = ?1, updated_time = ?2, sample_date = ?3 WHERE barcode = ?4",
                libsql::params![
                    result.text.as_str(),
                    stamp.as_str(),
                    result.sample_date.as_str(),
                    barcode
                ],
            )
            .await?;

        if affected != 1 {
            tx.rollback().await?;
            return Err(DatabaseError::RowCount {
                barcode: barcode.to_string(),
                affected,
            });
        }

        tx.commit().await?;
        tracing::debug!(barcode, "committed result");
        Ok(())
    }
}
