//! Font descriptor `/CharSet` parsing.
//!
//! A Type1 descriptor may list the glyphs its embedded subset contains as a
//! string of names, e.g. `(/A/B/space/Agrave)`.

use std::collections::BTreeSet;

use crate::error::BackendError;
use crate::lexer::{Lexer, Token};

/// Parse a `/CharSet` string into its unique glyph names, in sorted order.
///
/// Tokens other than names are skipped.
///
/// # Errors
///
/// Returns [`BackendError::Parse`] if the string cannot be tokenized.
pub fn parse_charset(data: &[u8]) -> Result<BTreeSet<String>, BackendError> {
    let mut names = BTreeSet::new();
    for token in Lexer::new(data) {
        if let Token::Name(name) = token? {
            names.insert(name);
        }
    }
    Ok(names)
}
