//! Specimen and roster entities.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Value of `results` while a specimen is still waiting on the portal.
pub const PENDING: &str = "pending";

/// Date-of-birth layout expected by the portal form.
pub const DATE_OF_BIRTH_FORMAT: &str = "%m/%d/%Y";

/// A tracked lab sample. `barcode` is the portal lookup key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Specimen {
    pub name: String,
    pub barcode: String,
    pub results: String,
    pub created_time: DateTime<Utc>,
    pub updated_time: DateTime<Utc>,
    pub sample_date: Option<String>,
}

impl Specimen {
    /// Whether the portal has not produced a result for this specimen yet.
    ///
    /// Mirrors the store query, which matches the sentinel as a substring.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.results.contains(PENDING)
    }
}

/// Input for registering a specimen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSpecimen {
    pub name: String,
    pub barcode: String,
}

impl NewSpecimen {
    /// Build a registration request, trimming both fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::MissingField` if either field is blank.
    pub fn new(name: &str, barcode: &str) -> Result<Self, CoreError> {
        let name = name.trim();
        let barcode = barcode.trim();
        if name.is_empty() {
            return Err(CoreError::MissingField("name"));
        }
        if barcode.is_empty() {
            return Err(CoreError::MissingField("barcode"));
        }
        Ok(Self {
            name: name.to_string(),
            barcode: barcode.to_string(),
        })
    }
}

/// A parsed portal result ready to be committed to a specimen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResolvedResult {
    /// Rendered result rows, `" | "`-separated.
    pub text: String,
    pub sample_date: String,
}

/// A known specimen holder. `date_of_birth` is `MM/DD/YYYY`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub date_of_birth: String,
}

impl RosterEntry {
    /// Check that the date of birth is a real calendar date in portal format.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` naming the entry when it is malformed.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::MissingField("name"));
        }
        // chrono accepts unpadded fields, the portal does not
        let well_formed = self.date_of_birth.len() == 10
            && NaiveDate::parse_from_str(&self.date_of_birth, DATE_OF_BIRTH_FORMAT).is_ok();
        if well_formed {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "date_of_birth for '{}' must be MM/DD/YYYY, got '{}'",
                self.name, self.date_of_birth
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn specimen(results: &str) -> Specimen {
        Specimen {
            name: "Ada".into(),
            barcode: "B-1".into(),
            results: results.into(),
            created_time: Utc::now(),
            updated_time: Utc::now(),
            sample_date: None,
        }
    }

    #[test]
    fn pending_detection_matches_substring() {
        assert!(specimen("pending").is_pending());
        assert!(specimen("still pending review").is_pending());
        assert!(!specimen("Negative Final").is_pending());
    }

    #[test]
    fn new_specimen_trims_fields() {
        let spec = NewSpecimen::new("  Ada ", " B-1\n").unwrap();
        assert_eq!(spec.name, "Ada");
        assert_eq!(spec.barcode, "B-1");
    }

    #[test]
    fn new_specimen_rejects_blank_fields() {
        assert_eq!(
            NewSpecimen::new(" ", "B-1"),
            Err(CoreError::MissingField("name"))
        );
        assert_eq!(
            NewSpecimen::new("Ada", ""),
            Err(CoreError::MissingField("barcode"))
        );
    }

    #[test]
    fn roster_entry_accepts_portal_format() {
        let entry = RosterEntry {
            name: "Ada".into(),
            date_of_birth: "12/10/1815".into(),
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn roster_entry_rejects_other_formats() {
        for dob in ["1815-12-10", "12/10/15", "13/10/1815", "2/1/1990", ""] {
            let entry = RosterEntry {
                name: "Ada".into(),
                date_of_birth: dob.into(),
            };
            assert!(entry.validate().is_err(), "{dob} should be rejected");
        }
    }

    #[test]
    fn specimen_serializes_with_snake_case_fields() {
        let value = serde_json::to_value(specimen("pending")).unwrap();
        assert_eq!(value["results"], "pending");
        assert!(value["sample_date"].is_null());
        assert!(value.get("created_time").is_some());
    }
}
