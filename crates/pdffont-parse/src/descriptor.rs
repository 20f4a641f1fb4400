//! Font descriptor reading.
//!
//! Extracts the `/FontDescriptor` entries font resolution depends on: the
//! flags, bounding box, `/MissingWidth`, `/CharSet`, and which embedded font
//! program stream (if any) backs the font.

use lopdf::{Document, Object, ObjectId, Stream};
use pdffont_core::ProgramFormat;

use crate::object::{get_resolved, object_to_f64, reference_id};

/// Flags bit 3: the font uses symbols outside the standard Latin set.
pub const FLAG_SYMBOLIC: i64 = 1 << 2;

/// Flags bit 6: the font uses the standard Latin character set.
pub const FLAG_NONSYMBOLIC: i64 = 1 << 5;

/// An embedded font program stream.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedProgram<'a> {
    /// Format the stream is declared to hold.
    pub format: ProgramFormat,
    /// The stream itself.
    pub stream: &'a Stream,
    /// Identity of the stream object, when it is stored indirectly.
    pub id: Option<ObjectId>,
}

/// What the descriptor says about the embedded program.
#[derive(Debug, Clone, Copy)]
pub enum ProgramSlot<'a> {
    /// Neither `/FontFile` nor `/FontFile3` holds a stream.
    Absent,
    /// A stream in a format a simple Type1 font can use.
    Embedded(EmbeddedProgram<'a>),
    /// `/FontFile3` with a subtype simple Type1 fonts cannot use.
    UnsupportedSubtype(Option<&'a [u8]>),
}

/// The parts of a `/FontDescriptor` used for resolution.
#[derive(Debug, Clone)]
pub struct FontDescriptor<'a> {
    /// `/Flags`, if present.
    pub flags: Option<i64>,
    /// `/FontBBox` [llx, lly, urx, ury] in glyph space units.
    pub font_bbox: Option<[f64; 4]>,
    /// `/MissingWidth`, if present.
    pub missing_width: Option<f64>,
    /// Raw `/CharSet` string bytes.
    pub charset: Option<&'a [u8]>,
    /// Embedded program lookup result.
    pub program: ProgramSlot<'a>,
    /// Number of entries in the descriptor dictionary.
    pub entry_count: usize,
}

impl<'a> FontDescriptor<'a> {
    /// Read the descriptor of `font_dict`, or `None` if it has none.
    pub fn from_font_dict(doc: &'a Document, font_dict: &'a lopdf::Dictionary) -> Option<Self> {
        let dict = get_resolved(doc, font_dict, b"FontDescriptor")?.as_dict().ok()?;
        Some(Self::from_dict(doc, dict))
    }

    /// Read a descriptor dictionary.
    pub fn from_dict(doc: &'a Document, dict: &'a lopdf::Dictionary) -> Self {
        let flags = get_resolved(doc, dict, b"Flags").and_then(|o| o.as_i64().ok());
        let missing_width = get_resolved(doc, dict, b"MissingWidth").and_then(object_to_f64);
        let font_bbox = get_resolved(doc, dict, b"FontBBox")
            .and_then(|o| o.as_array().ok())
            .and_then(|arr| bbox_from_array(doc, arr));
        let charset = get_resolved(doc, dict, b"CharSet").and_then(|o| match o {
            Object::String(bytes, _) => Some(bytes.as_slice()),
            _ => None,
        });

        Self {
            flags,
            font_bbox,
            missing_width,
            charset,
            program: find_program(doc, dict),
            entry_count: dict.len(),
        }
    }

    /// Returns true if the descriptor has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entry_count == 0
    }

    /// The symbolic flag, if `/Flags` is present.
    pub fn is_symbolic(&self) -> Option<bool> {
        self.flags.map(|flags| flags & FLAG_SYMBOLIC != 0)
    }

    /// The embedded program, if one is usable.
    pub fn embedded_program(&self) -> Option<EmbeddedProgram<'a>> {
        match self.program {
            ProgramSlot::Embedded(program) => Some(program),
            _ => None,
        }
    }
}

/// `/FontFile` wins over `/FontFile3`; entries that are not streams are ignored.
fn find_program<'a>(doc: &'a Document, dict: &'a lopdf::Dictionary) -> ProgramSlot<'a> {
    if let Some(stream) = get_resolved(doc, dict, b"FontFile").and_then(|o| o.as_stream().ok()) {
        return ProgramSlot::Embedded(EmbeddedProgram {
            format: ProgramFormat::Type1,
            stream,
            id: reference_id(dict, b"FontFile"),
        });
    }
    if let Some(stream) = get_resolved(doc, dict, b"FontFile3").and_then(|o| o.as_stream().ok()) {
        let subtype = get_resolved(doc, &stream.dict, b"Subtype").and_then(|o| o.as_name().ok());
        return match subtype.and_then(ProgramFormat::from_font_file3_subtype) {
            Some(format) => ProgramSlot::Embedded(EmbeddedProgram {
                format,
                stream,
                id: reference_id(dict, b"FontFile3"),
            }),
            None => ProgramSlot::UnsupportedSubtype(subtype),
        };
    }
    ProgramSlot::Absent
}

fn bbox_from_array(doc: &Document, arr: &[Object]) -> Option<[f64; 4]> {
    if arr.len() != 4 {
        return None;
    }
    let mut bbox = [0.0; 4];
    for (slot, obj) in bbox.iter_mut().zip(arr) {
        *slot = object_to_f64(crate::object::resolve_ref(doc, obj))?;
    }
    Some(bbox)
}
