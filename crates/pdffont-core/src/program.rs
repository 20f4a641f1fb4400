//! Decoded font programs.
//!
//! A decoder turns the bytes of an embedded font file into something that
//! implements [`FontProgram`]: glyph lookup by name or by character code,
//! advance widths, and the glyph name behind a raw code. [`GlyphTable`] is the
//! in-memory implementation decoders build their result from.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Binary format of an embedded font program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgramFormat {
    /// `/FontFile`: a Type 1 program.
    Type1,
    /// `/FontFile3` with `/Subtype /Type1C`: a bare CFF font.
    Cff,
    /// `/FontFile3` with `/Subtype /OpenType`: an OpenType container.
    OpenType,
}

impl ProgramFormat {
    /// Map a `/FontFile3` `/Subtype` to a format a simple Type1 font can use.
    ///
    /// `CIDFontType0C` and anything unknown yield `None`.
    pub fn from_font_file3_subtype(subtype: &[u8]) -> Option<Self> {
        match subtype {
            b"Type1C" => Some(Self::Cff),
            b"OpenType" => Some(Self::OpenType),
            _ => None,
        }
    }

    /// Returns the name of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            ProgramFormat::Type1 => "Type1",
            ProgramFormat::Cff => "CFF",
            ProgramFormat::OpenType => "OpenType",
        }
    }
}

impl fmt::Display for ProgramFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capabilities of a decoded font program.
///
/// Widths are in 1/1000 text-space units regardless of the program's own
/// units per em.
pub trait FontProgram: Send + Sync + fmt::Debug {
    /// The format the program was decoded from.
    fn format(&self) -> ProgramFormat;

    /// PostScript name recorded in the program, if any.
    fn font_name(&self) -> Option<&str> {
        None
    }

    /// Returns true if the program has a glyph called `name`.
    fn contains_glyph(&self, name: &str) -> bool;

    /// Returns true if the program's own encoding maps `code` to a glyph.
    fn contains_code(&self, code: u32) -> bool;

    /// Advance width of the glyph called `name`.
    fn glyph_width(&self, name: &str) -> Option<f64>;

    /// Advance width of the glyph the program's own encoding maps `code` to.
    fn code_width(&self, code: u32) -> Option<f64>;

    /// Name of the glyph the program's own encoding maps `code` to.
    fn glyph_name(&self, code: u32) -> Option<&str>;
}

/// A decoded program shared by every font that embeds the same object.
pub type SharedProgram = Arc<dyn FontProgram>;

/// Width of a character through a program.
///
/// Looks the glyph up by `glyph_name` when the font's encoding supplies one,
/// and falls back to the program's code lookup when it does not or the
/// program has no glyph of that name.
pub fn program_width(
    program: &dyn FontProgram,
    glyph_name: Option<&str>,
    code: u32,
) -> Option<f64> {
    glyph_name
        .and_then(|name| program.glyph_width(name))
        .or_else(|| program.code_width(code))
}

/// Whether a program can draw a character.
///
/// A glyph name from the font's encoding is authoritative; the raw code is
/// only consulted when the encoding names nothing.
pub fn program_contains(program: &dyn FontProgram, glyph_name: Option<&str>, code: u32) -> bool {
    match glyph_name {
        Some(name) => program.contains_glyph(name),
        None => program.contains_code(code),
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Glyph {
    name: Option<String>,
    width: f64,
}

/// An immutable in-memory font program.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    format: ProgramFormat,
    font_name: Option<String>,
    subset: bool,
    glyphs: Vec<Glyph>,
    by_name: HashMap<String, usize>,
    by_code: HashMap<u32, usize>,
}

impl GlyphTable {
    /// Start building a table for a program of `format`.
    pub fn builder(format: ProgramFormat) -> GlyphTableBuilder {
        GlyphTableBuilder {
            table: GlyphTable {
                format,
                font_name: None,
                subset: false,
                glyphs: Vec::new(),
                by_name: HashMap::new(),
                by_code: HashMap::new(),
            },
        }
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns true if the table has no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Whether the decoder was told the program is a subset.
    pub fn is_subset(&self) -> bool {
        self.subset
    }

    /// Wrap the table for sharing through the program cache.
    pub fn into_shared(self) -> SharedProgram {
        Arc::new(self)
    }

    fn glyph_for_code(&self, code: u32) -> Option<&Glyph> {
        self.by_code.get(&code).and_then(|&index| self.glyphs.get(index))
    }
}

impl FontProgram for GlyphTable {
    fn format(&self) -> ProgramFormat {
        self.format
    }

    fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }

    fn contains_glyph(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    fn contains_code(&self, code: u32) -> bool {
        self.by_code.contains_key(&code)
    }

    fn glyph_width(&self, name: &str) -> Option<f64> {
        self.by_name
            .get(name)
            .and_then(|&index| self.glyphs.get(index))
            .map(|glyph| glyph.width)
    }

    fn code_width(&self, code: u32) -> Option<f64> {
        self.glyph_for_code(code).map(|glyph| glyph.width)
    }

    fn glyph_name(&self, code: u32) -> Option<&str> {
        self.glyph_for_code(code)
            .and_then(|glyph| glyph.name.as_deref())
    }
}

/// Builder for [`GlyphTable`].
#[derive(Debug)]
pub struct GlyphTableBuilder {
    table: GlyphTable,
}

impl GlyphTableBuilder {
    /// Record the program's PostScript name.
    pub fn set_font_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.table.font_name = Some(name.into());
        self
    }

    /// Record whether the program is a subset.
    pub fn set_subset(&mut self, subset: bool) -> &mut Self {
        self.table.subset = subset;
        self
    }

    /// Append a glyph and return its index.
    ///
    /// When two glyphs share a name, lookups by name find the first.
    pub fn push_glyph(&mut self, name: Option<&str>, width: f64) -> usize {
        let index = self.table.glyphs.len();
        if let Some(name) = name {
            self.table
                .by_name
                .entry(name.to_string())
                .or_insert(index);
        }
        self.table.glyphs.push(Glyph {
            name: name.map(str::to_string),
            width,
        });
        index
    }

    /// Map `code` to the glyph at `index` in the program's own encoding.
    ///
    /// Returns false, leaving the table unchanged, if there is no such glyph.
    pub fn map_code(&mut self, code: u32, index: usize) -> bool {
        if index >= self.table.glyphs.len() {
            return false;
        }
        self.table.by_code.insert(code, index);
        true
    }

    /// Append a named glyph and map `code` to it.
    pub fn push_encoded_glyph(&mut self, code: u32, name: &str, width: f64) -> usize {
        let index = self.push_glyph(Some(name), width);
        self.table.by_code.insert(code, index);
        index
    }

    /// Finish the table.
    pub fn build(self) -> GlyphTable {
        self.table
    }
}
