//! OpenType program decoding through `ttf-parser`.
//!
//! Glyph names come from the `post` table (or the CFF charset), advances
//! from `hmtx` scaled to 1000 units per em. The program's own code → glyph
//! map covers single-byte codes:
//!
//! - symbolic fonts go through the Microsoft symbol `(3,0)` cmap, trying the
//!   `0xF000` page first, then the Macintosh `(1,0)` cmap;
//! - other fonts go through the declared encoding's glyph name (looked up in
//!   `post`, then via its Unicode value in the `(3,1)` cmap), then the
//!   `(1,0)` cmap, then printable ASCII through `(3,1)`.

use pdffont_core::{
    BaseEncoding, DecodeError, GlyphTable, ProgramFormat, SharedProgram,
};
use ttf_parser::cmap::Subtable;
use ttf_parser::{Face, GlyphId, PlatformId};

use super::{DecodeHints, ProgramDecoder};

/// Decodes `/FontFile3 /Subtype /OpenType` programs.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTypeDecoder;

impl ProgramDecoder for OpenTypeDecoder {
    fn decode(&self, bytes: &[u8], hints: &DecodeHints<'_>) -> Result<SharedProgram, DecodeError> {
        if bytes.is_empty() {
            return Err(DecodeError::Malformed("empty OpenType program".to_string()));
        }
        let face = Face::parse(bytes, 0)
            .map_err(|e| DecodeError::Malformed(format!("OpenType: {e}")))?;

        let mut builder = GlyphTable::builder(ProgramFormat::OpenType);
        builder.set_subset(hints.subset);
        if let Some(name) = postscript_name(&face) {
            builder.set_font_name(name);
        }

        let units_per_em = f64::from(face.units_per_em());
        for index in 0..face.number_of_glyphs() {
            let glyph = GlyphId(index);
            let width = face
                .glyph_hor_advance(glyph)
                .map_or(0.0, |advance| f64::from(advance) * 1000.0 / units_per_em);
            builder.push_glyph(face.glyph_name(glyph), width);
        }

        let cmaps = CmapSubtables::from_face(&face);
        for code in 0..=255u8 {
            if let Some(glyph) = glyph_for_code(&face, &cmaps, code, hints) {
                builder.map_code(u32::from(code), usize::from(glyph.0));
            }
        }

        Ok(builder.build().into_shared())
    }
}

fn postscript_name(face: &Face<'_>) -> Option<String> {
    face.names()
        .into_iter()
        .find(|name| name.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
        .and_then(|name| name.to_string())
}

#[derive(Default)]
struct CmapSubtables<'a> {
    ms_symbol: Option<Subtable<'a>>,
    ms_unicode: Option<Subtable<'a>>,
    mac_roman: Option<Subtable<'a>>,
}

impl<'a> CmapSubtables<'a> {
    fn from_face(face: &Face<'a>) -> Self {
        let mut found = Self::default();
        let Some(cmap) = face.tables().cmap else {
            return found;
        };
        for subtable in cmap.subtables {
            let slot = match (subtable.platform_id, subtable.encoding_id) {
                (PlatformId::Windows, 0) => &mut found.ms_symbol,
                (PlatformId::Windows, 1) => &mut found.ms_unicode,
                (PlatformId::Macintosh, 0) => &mut found.mac_roman,
                _ => continue,
            };
            slot.get_or_insert(subtable);
        }
        found
    }
}

fn lookup(subtable: Option<&Subtable<'_>>, code_point: u32) -> Option<GlyphId> {
    subtable
        .and_then(|s| s.glyph_index(code_point))
        .filter(|glyph| glyph.0 != 0)
}

fn glyph_for_code(
    face: &Face<'_>,
    cmaps: &CmapSubtables<'_>,
    code: u8,
    hints: &DecodeHints<'_>,
) -> Option<GlyphId> {
    let code_point = u32::from(code);
    if hints.symbolic {
        if cmaps.ms_symbol.is_some() {
            return [0xF000, 0xF100, 0xF200, 0]
                .into_iter()
                .find_map(|page| lookup(cmaps.ms_symbol.as_ref(), page + code_point));
        }
        return lookup(cmaps.mac_roman.as_ref(), code_point);
    }

    if let Some(name) = hints.encoding.and_then(|e| e.name_for_code(code_point)) {
        let by_name = face
            .glyph_index_by_name(name)
            .filter(|glyph| glyph.0 != 0)
            .or_else(|| {
                unicode_for_name(name).and_then(|u| lookup(cmaps.ms_unicode.as_ref(), u))
            });
        if by_name.is_some() {
            return by_name;
        }
    }

    lookup(cmaps.mac_roman.as_ref(), code_point).or_else(|| {
        (0x20..0x7F)
            .contains(&code_point)
            .then(|| lookup(cmaps.ms_unicode.as_ref(), code_point))
            .flatten()
    })
}

/// Unicode value of a glyph name: `uniXXXX`, `uXXXX`..`uXXXXXX`, or a name
/// in WinAnsiEncoding's Latin-1 compatible ranges.
fn unicode_for_name(name: &str) -> Option<u32> {
    let hex = |digits: &str| {
        (digits.bytes().all(|b| b.is_ascii_hexdigit()))
            .then(|| u32::from_str_radix(digits, 16).ok())
            .flatten()
    };
    if let Some(digits) = name.strip_prefix("uni").filter(|d| d.len() == 4) {
        return hex(digits);
    }
    if let Some(digits) = name.strip_prefix('u').filter(|d| (4..=6).contains(&d.len())) {
        if let Some(value) = hex(digits) {
            return Some(value);
        }
    }
    BaseEncoding::WinAnsi
        .code_for(name)
        .filter(|&code| (0x20..0x7F).contains(&code) || code >= 0xA0)
        .map(u32::from)
}
