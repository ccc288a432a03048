//! Per-pass accounting.

use serde::Serialize;

/// What happened to one pending specimen during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Resolved,
    NotYetAvailable,
    Unrecognized,
    NoRosterMatch,
    LookupFailed,
    ScrapeFailed,
    CommitFailed,
}

impl Outcome {
    /// Whether the specimen stays pending for the next pass.
    #[must_use]
    pub const fn leaves_pending(self) -> bool {
        !matches!(self, Self::Resolved)
    }
}

/// Counts of each [`Outcome`] over one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassReport {
    /// Specimens read as pending when the pass started.
    pub pending: usize,
    pub resolved: usize,
    pub not_yet_available: usize,
    pub unrecognized: usize,
    pub no_roster_match: usize,
    pub lookup_failed: usize,
    pub scrape_failed: usize,
    pub commit_failed: usize,
}

impl PassReport {
    pub(crate) const fn record(&mut self, outcome: Outcome) {
        let slot = match outcome {
            Outcome::Resolved => &mut self.resolved,
            Outcome::NotYetAvailable => &mut self.not_yet_available,
            Outcome::Unrecognized => &mut self.unrecognized,
            Outcome::NoRosterMatch => &mut self.no_roster_match,
            Outcome::LookupFailed => &mut self.lookup_failed,
            Outcome::ScrapeFailed => &mut self.scrape_failed,
            Outcome::CommitFailed => &mut self.commit_failed,
        };
        *slot += 1;
    }

    /// Specimens that will be attempted again next pass.
    #[must_use]
    pub const fn still_pending(&self) -> usize {
        self.pending.saturating_sub(self.resolved)
    }
}
