//! Identity resolution against the configured roster.

use lab_core::RosterEntry;

/// Known specimen holders, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    #[must_use]
    pub const fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// Birth date of the first entry whose name equals `name` exactly.
    #[must_use]
    pub fn date_of_birth_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.date_of_birth.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.date_of_birth_for(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
