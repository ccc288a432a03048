//! Positional result parsing.
//!
//! The portal renders one table per lookup. Its observed shape is:
//!
//! ```text
//! [0]        leading cell (barcode echo)
//! [1], [2]   header / status pair
//! [3..n-3]   zero or more paired data rows
//! [n-2]      sample date
//! [n-1]      trailing cell
//! ```
//!
//! Nothing upstream guarantees this layout. Anything else is reported as
//! [`Classification::Unrecognized`] and tagged with [`POSITIONAL_LAYOUT`] so
//! operators can tell when the page changes.

use lab_core::ResolvedResult;

/// Identifier of the table layout `classify` understands.
pub const POSITIONAL_LAYOUT: &str = "cascadia-result-table/v1";

/// Outcome of parsing one lookup's cell sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// No cells at all: the portal has nothing for this specimen yet.
    NotYetAvailable,
    /// Cells are present but do not fit the positional layout.
    Unrecognized { cell_count: usize },
    /// A result was rendered.
    Resolved(ResolvedResult),
}

/// Classify a cell sequence and render the result if it fits the layout.
///
/// Unrecognized when fewer than four cells, or five or more with an even
/// count. Exactly four cells resolve to a header-only result.
#[must_use]
pub fn classify<S: AsRef<str>>(cells: &[S]) -> Classification {
    let count = cells.len();
    if count == 0 {
        return Classification::NotYetAvailable;
    }
    if count < 4 || (count >= 5 && count % 2 == 0) {
        return Classification::Unrecognized { cell_count: count };
    }

    let cell = |i: usize| cells[i].as_ref();

    let mut text = format!("{} {}", cell(1), cell(2));
    let mut i = 3;
    while i + 3 < count {
        text.push_str(" | ");
        text.push_str(cell(i));
        text.push(' ');
        text.push_str(cell(i + 1));
        i += 2;
    }

    Classification::Resolved(ResolvedResult {
        text,
        sample_date: cell(count - 2).to_string(),
    })
}
