//! # lab-sync
//!
//! Reconciles pending specimens against the results portal.
//!
//! - [`Roster`] maps a holder name to the birth date the portal requires.
//! - [`Reconciler`] runs one pass: read pending specimens, look each up,
//!   extract and classify the page, commit resolved results.
//! - [`Scheduler`] runs a pass immediately and then on a fixed interval.
//!
//! Per-specimen failures are logged and leave the specimen pending for the
//! next pass. A commit that does not touch exactly one row is fatal and is
//! returned as [`SyncError::Integrity`].

mod error;
mod reconciler;
mod report;
mod roster;
mod scheduler;

pub use error::SyncError;
pub use reconciler::Reconciler;
pub use report::{Outcome, PassReport};
pub use roster::Roster;
pub use scheduler::Scheduler;
