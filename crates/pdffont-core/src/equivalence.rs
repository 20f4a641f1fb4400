//! Encoding-equivalence check.
//!
//! Decides whether a font's `/Differences` change any glyph compared with the
//! base table they are declared over. A standard font whose differences only
//! restate its base table still qualifies for the built-in metrics.

use crate::encoding::{BaseEncoding, EncodingOverride, NOTDEF};

/// Returns true if `encoding` maps some code to a different glyph than its
/// declared base table.
///
/// No override, or an override without entries, never diverges. Otherwise
/// the declared base must be WinAnsi, MacRoman, or MacExpert; an absent or
/// unrecognized base cannot be compared, so any entry counts as divergent.
/// A `.notdef` entry matches an unassigned slot of the base.
pub fn has_real_differences(encoding: Option<&EncodingOverride>) -> bool {
    let Some(encoding) = encoding else {
        return false;
    };
    if encoding.differences().is_empty() {
        return false;
    }
    let Some(base) = encoding.base().filter(|base| base.is_declarable()) else {
        return true;
    };
    encoding
        .differences()
        .iter()
        .any(|(&code, name)| !matches_base(base, code, name))
}

fn matches_base(base: BaseEncoding, code: u32, name: &str) -> bool {
    let Ok(code) = u8::try_from(code) else {
        return false;
    };
    match base.glyph_name(code) {
        Some(base_name) => base_name == name,
        None => name == NOTDEF,
    }
}
