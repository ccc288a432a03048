//! # lab-scrape
//!
//! Recovers structured results from the portal's rendered HTML.
//!
//! Two stages, kept apart so the brittle indexing logic can be tested
//! without markup:
//! - [`cells`]: parses HTML with the tree-sitter grammar (via ast-grep) and
//!   yields the non-empty text of every `<td>` in document order.
//! - [`result`]: classifies a cell sequence and renders the positional
//!   result string and sample date.

pub mod cells;
mod entities;
pub mod error;
mod markup;
pub mod result;
mod tokens;

pub use cells::{TableCells, extract_cells};
pub use error::ScrapeError;
pub use result::{Classification, POSITIONAL_LAYOUT, classify};
