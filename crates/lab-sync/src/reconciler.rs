//! One reconciliation pass over every pending specimen.

use std::sync::Arc;

use lab_core::{ResolvedResult, Specimen};
use lab_db::SpecimenStore;
use lab_db::error::DatabaseError;
use lab_portal::ResultLookup;
use lab_scrape::{Classification, POSITIONAL_LAYOUT, classify, extract_cells};

use crate::error::SyncError;
use crate::report::{Outcome, PassReport};
use crate::roster::Roster;

/// Looks up pending specimens on the portal and commits parsed results.
///
/// Specimens are handled one at a time; a slow lookup delays the rest of
/// the pass.
pub struct Reconciler<P> {
    store: Arc<SpecimenStore>,
    portal: P,
    roster: Roster,
}

impl<P: ResultLookup> Reconciler<P> {
    pub const fn new(store: Arc<SpecimenStore>, portal: P, roster: Roster) -> Self {
        Self {
            store,
            portal,
            roster,
        }
    }

    /// Run one full pass.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Store` if pending specimens cannot be read, and
    /// `SyncError::Integrity` as soon as a commit matches other than one row.
    /// Every other failure is counted in the report and skipped.
    pub async fn run_pass(&self) -> Result<PassReport, SyncError> {
        let pending = self
            .store
            .list_pending()
            .await
            .map_err(SyncError::Store)?;
        tracing::info!(count = pending.len(), "retrieved pending specimens");

        let mut report = PassReport {
            pending: pending.len(),
            ..PassReport::default()
        };
        for specimen in &pending {
            let outcome = self.reconcile(specimen).await?;
            if outcome.leaves_pending() {
                tracing::debug!(barcode = %specimen.barcode, ?outcome, "specimen stays pending");
            }
            report.record(outcome);
        }

        tracing::info!(
            pending = report.pending,
            resolved = report.resolved,
            still_pending = report.still_pending(),
            "reconciliation pass complete"
        );
        Ok(report)
    }

    /// Resolve a single specimen.
    ///
    /// # Errors
    ///
    /// Returns `SyncError::Integrity` if the commit matched other than one row.
    pub async fn reconcile(&self, specimen: &Specimen) -> Result<Outcome, SyncError> {
        let barcode = specimen.barcode.as_str();

        let Some(date_of_birth) = self.roster.date_of_birth_for(&specimen.name) else {
            tracing::warn!(name = %specimen.name, barcode, "no roster entry for specimen holder");
            return Ok(Outcome::NoRosterMatch);
        };

        let body = match self.portal.lookup(barcode, date_of_birth).await {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(barcode, %error, "portal lookup failed");
                return Ok(Outcome::LookupFailed);
            }
        };

        let cells: Vec<String> = match extract_cells(body.as_slice()) {
            Ok(cells) => cells.collect(),
            Err(error) => {
                tracing::warn!(barcode, %error, "failed to scrape result page");
                return Ok(Outcome::ScrapeFailed);
            }
        };
        tracing::debug!(barcode, ?cells, "extracted cells");

        match classify(&cells) {
            Classification::NotYetAvailable => {
                tracing::info!(barcode, "no result published yet");
                Ok(Outcome::NotYetAvailable)
            }
            Classification::Unrecognized { cell_count } => {
                tracing::warn!(
                    barcode,
                    cell_count,
                    layout = POSITIONAL_LAYOUT,
                    "result page does not match the expected layout"
                );
                Ok(Outcome::Unrecognized)
            }
            Classification::Resolved(result) => self.commit(barcode, &result).await,
        }
    }

    async fn commit(&self, barcode: &str, result: &ResolvedResult) -> Result<Outcome, SyncError> {
        match self.store.commit_result(barcode, result).await {
            Ok(()) => {
                tracing::info!(
                    barcode,
                    results = %result.text,
                    sample_date = %result.sample_date,
                    "resolved specimen"
                );
                Ok(Outcome::Resolved)
            }
            Err(DatabaseError::RowCount { barcode, affected }) => {
                tracing::error!(%barcode, affected, "result commit did not match exactly one row");
                Err(SyncError::Integrity { barcode, affected })
            }
            Err(error) => {
                tracing::warn!(barcode, %error, "failed to save result");
                Ok(Outcome::CommitFailed)
            }
        }
    }
}
