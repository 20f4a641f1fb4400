//! Declared glyph widths from a font dictionary.
//!
//! Parses `/FirstChar`, `/LastChar` and `/Widths`, with the descriptor's
//! `/MissingWidth` for codes outside the declared range.

use lopdf::Document;

use crate::object::{get_resolved, object_to_f64, resolve_ref};

/// Widths a font dictionary declares, in glyph space units.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredWidths {
    /// Glyph widths indexed by (code - first_char).
    widths: Vec<Option<f64>>,
    first_char: u32,
    last_char: u32,
    missing_width: Option<f64>,
}

impl DeclaredWidths {
    /// Create from already-parsed values.
    pub fn new(
        widths: Vec<Option<f64>>,
        first_char: u32,
        last_char: u32,
        missing_width: Option<f64>,
    ) -> Self {
        Self {
            widths,
            first_char,
            last_char,
            missing_width,
        }
    }

    /// Read `/Widths` from `font_dict`.
    ///
    /// Returns `None` when the dictionary has no `/Widths` array; a font that
    /// declares no widths declares no missing width either.
    pub fn from_font_dict(
        doc: &Document,
        font_dict: &lopdf::Dictionary,
        missing_width: Option<f64>,
    ) -> Option<Self> {
        let widths = get_resolved(doc, font_dict, b"Widths")?.as_array().ok()?;
        let char_code = |key: &[u8]| {
            get_resolved(doc, font_dict, key)
                .and_then(|o| o.as_i64().ok())
                .and_then(|v| u32::try_from(v).ok())
        };
        let first_char = char_code(b"FirstChar").unwrap_or(0);
        let last_char = char_code(b"LastChar")
            .unwrap_or_else(|| first_char.saturating_add(widths.len().saturating_sub(1) as u32));

        let widths = widths
            .iter()
            .map(|o| object_to_f64(resolve_ref(doc, o)))
            .collect();
        Some(Self::new(widths, first_char, last_char, missing_width))
    }

    /// Declared width of `code`.
    ///
    /// Codes outside `[first_char, last_char]`, or past the end of the array,
    /// use `/MissingWidth`.
    pub fn width(&self, code: u32) -> Option<f64> {
        if (self.first_char..=self.last_char).contains(&code) {
            let index = (code - self.first_char) as usize;
            if let Some(Some(width)) = self.widths.get(index) {
                return Some(*width);
            }
        }
        self.missing_width
    }

    pub fn first_char(&self) -> u32 {
        self.first_char
    }

    pub fn last_char(&self) -> u32 {
        self.last_char
    }
}
