//! Table-cell text extraction.
//!
//! The extractor keeps a single "capturing" flag. A `<td>` start tag turns it
//! on; the next text run that is non-empty after trimming is emitted and
//! turns it off. Blank runs leave it on, so a cell whose content sits behind
//! inline markup (`<td>\n  <em>Positive</em></td>`) is still captured.

use std::io::Read;
use std::vec;

use crate::entities;
use crate::error::ScrapeError;
use crate::tokens::{Token, tokenize};

/// Parse an HTML document and return its table-cell texts.
///
/// The document is read to the end and parsed up front; the returned
/// iterator applies the capture rule lazily. Re-running on the same bytes
/// always yields the same sequence.
///
/// # Errors
///
/// Returns `ScrapeError::Read` if the reader fails. Malformed markup is not
/// an error: the parser recovers the way a browser would.
pub fn extract_cells<R: Read>(mut reader: R) -> Result<TableCells, ScrapeError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let source = String::from_utf8_lossy(&bytes);
    Ok(TableCells::new(tokenize(&source)))
}

/// Ordered, non-empty `<td>` texts of one document.
#[derive(Debug)]
pub struct TableCells {
    tokens: vec::IntoIter<Token>,
    capturing: bool,
}

impl TableCells {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: tokens.into_iter(),
            capturing: false,
        }
    }
}

impl Iterator for TableCells {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for token in self.tokens.by_ref() {
            match token {
                Token::CellStart => self.capturing = true,
                Token::Text(raw) if self.capturing => {
                    let decoded = entities::decode(&raw);
                    let text = decoded.trim();
                    if text.is_empty() {
                        tracing::trace!("skipping blank cell text");
                        continue;
                    }
                    tracing::trace!(cell = text, "found cell text");
                    self.capturing = false;
                    return Some(text.to_string());
                }
                Token::Text(_) => {}
            }
        }
        None
    }
}
