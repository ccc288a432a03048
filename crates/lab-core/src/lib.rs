//! # lab-core
//!
//! Core types shared across all labsync crates:
//! - Specimen records and the pending sentinel
//! - Roster entries used to parameterize portal lookups
//! - Cross-cutting error types

pub mod entities;
pub mod errors;

pub use entities::{NewSpecimen, PENDING, ResolvedResult, RosterEntry, Specimen};
pub use errors::CoreError;
