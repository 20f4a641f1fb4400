//! Program resolution and per-code font queries.
//!
//! [`FontResolver`] ties a [`SimpleFont`] to the session state it resolves
//! against: the shared [`ProgramCache`], the installed decoders and the
//! options. Every query starts from the font's resolved program and falls
//! back to the standard-14 metrics only when there is none.

use std::collections::BTreeSet;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use lopdf::{Document, ObjectId};
use pdffont_core::{
    BaseEncoding, CachedProgram, EncodingMapping, FontOptions, FontWarningCode, ProgramCache,
    SharedProgram, has_real_differences, is_standard_latin_glyph, is_standard_name,
    is_symbol_glyph, program_contains, program_width, standard_metrics,
};

use crate::charset::parse_charset;
use crate::decode::{DecodeHints, DecoderSet, decode_by_subtype};
use crate::descriptor::{EmbeddedProgram, ProgramSlot};
use crate::font::SimpleFont;
use crate::object::stream_bytes;

/// Returned by [`FontResolver::unicode_for_code`] for codes whose glyph is a
/// known Latin or Symbol glyph. It is not the character's text; it tells the
/// caller no further Unicode check is needed.
pub const KNOWN_GLYPH_SENTINEL: &str = " ";

/// How the Unicode value of a code was determined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnicodeStatus {
    /// `/ToUnicode` maps the code to this text.
    Mapped(String),
    /// No mapping, but the glyph name is in the standard Latin or Symbol set.
    KnownGlyph(String),
    /// No mapping and the glyph name is not recognized.
    UnknownGlyph(String),
    /// No glyph name could be found for the code.
    NoGlyph,
}

/// Result of comparing a `/Widths` entry against the resolved width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthConsistency {
    /// Both widths are known and agree within the tolerance.
    Consistent,
    /// Both widths are known and differ.
    Mismatch { declared: f64, actual: f64 },
    /// One of the widths is unknown.
    Unknown,
}

/// Session-wide identity of an indirectly stored font program.
///
/// Object ids are only unique within one document, so the key also holds
/// the address of the owning [`Document`]. The fingerprint of the raw stream
/// keeps a document allocated where a dropped one lived from hitting the
/// dropped document's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramKey {
    document: usize,
    object: ObjectId,
    fingerprint: u64,
}

impl ProgramKey {
    /// Key for `program` as stored in `doc`, or `None` for a direct stream.
    pub fn new(doc: &Document, program: &EmbeddedProgram<'_>) -> Option<Self> {
        let object = program.id?;
        let mut hasher = DefaultHasher::new();
        program.stream.content.hash(&mut hasher);
        Some(Self {
            document: std::ptr::from_ref(doc).addr(),
            object,
            fingerprint: hasher.finish(),
        })
    }

    pub fn object_id(&self) -> ObjectId {
        self.object
    }
}

/// Resolves fonts against session-wide state.
#[derive(Debug, Clone, Copy)]
pub struct FontResolver<'s> {
    cache: &'s ProgramCache<ProgramKey>,
    decoders: &'s DecoderSet,
    options: &'s FontOptions,
}

impl<'s> FontResolver<'s> {
    pub fn new(
        cache: &'s ProgramCache<ProgramKey>,
        decoders: &'s DecoderSet,
        options: &'s FontOptions,
    ) -> Self {
        Self {
            cache,
            decoders,
            options,
        }
    }

    pub fn options(&self) -> &'s FontOptions {
        self.options
    }

    /// The program backing `font`, if any.
    ///
    /// The first call decides; later calls for the same font return the
    /// stored outcome, `None` included. Programs stored as indirect objects
    /// are decoded once per session and shared between fonts.
    pub fn resolve(&self, font: &SimpleFont<'_>) -> Option<SharedProgram> {
        font.program
            .get_or_init(|| self.resolve_uncached(font))
            .clone()
    }

    fn resolve_uncached(&self, font: &SimpleFont<'_>) -> Option<SharedProgram> {
        let descriptor = font.descriptor()?;
        let program = match descriptor.program {
            ProgramSlot::Absent => return None,
            ProgramSlot::UnsupportedSubtype(subtype) => {
                let subtype = subtype
                    .map(|s| String::from_utf8_lossy(s).into_owned())
                    .unwrap_or_else(|| "(none)".to_string());
                tracing::debug!(
                    font = %font.base_name(),
                    %subtype,
                    "unusable /FontFile3 subtype"
                );
                self.warn(
                    font,
                    FontWarningCode::UnsupportedSubtype,
                    format!("/FontFile3 subtype {subtype} is not usable by a simple font"),
                );
                return None;
            }
            ProgramSlot::Embedded(program) => program,
        };

        let result = match ProgramKey::new(font.document(), &program) {
            Some(key) => {
                let mut decoded = false;
                let result = self.cache.get_or_insert_with(key, || {
                    decoded = true;
                    self.decode(font, program)
                });
                if !decoded {
                    tracing::trace!(
                        font = %font.base_name(),
                        object = ?key.object_id(),
                        "font program taken from cache"
                    );
                }
                result
            }
            None => self.decode(font, program),
        };

        match result {
            Ok(program) => Some(program),
            Err(e) => {
                tracing::debug!(
                    font = %font.base_name(),
                    error = %e,
                    "font program unusable"
                );
                self.warn(
                    font,
                    FontWarningCode::DecodeFailed,
                    format!("can't decode {} program: {e}", program.format),
                );
                None
            }
        }
    }

    fn decode(&self, font: &SimpleFont<'_>, program: EmbeddedProgram<'_>) -> CachedProgram {
        let bytes = stream_bytes(program.stream)?;
        self.options.check_program_size(bytes.len())?;
        let hints = DecodeHints {
            subset: font.is_subset(),
            symbolic: font.is_symbolic(),
            encoding: Some(font.declared_encoding()),
        };
        tracing::debug!(
            font = %font.base_name(),
            format = %program.format,
            bytes = bytes.len(),
            "decoding font program"
        );
        decode_by_subtype(self.decoders, program.format, &bytes, &hints)
    }

    /// Returns true if `font` is drawn with built-in standard-14 metrics.
    ///
    /// That requires a standard name, no program, and an encoding whose
    /// differences change nothing.
    pub fn is_standard(&self, font: &SimpleFont<'_>) -> bool {
        *font.standard.get_or_init(|| {
            is_standard_name(font.base_name())
                && self.resolve(font).is_none()
                && !has_real_differences(font.encoding_override())
        })
    }

    /// The code to glyph-name mapping used for lookups.
    ///
    /// A recognized declared base wins. Otherwise the differences sit over
    /// the implied base: a standard font's built-in encoding, or
    /// StandardEncoding for a non-symbolic font. Fonts with a program have
    /// no implied base; the program's own encoding covers the rest.
    pub fn effective_encoding<'f>(&self, font: &'f SimpleFont<'_>) -> &'f EncodingMapping {
        font.effective_encoding.get_or_init(|| {
            if font.declared_base().is_some() {
                return font.declared_encoding().clone();
            }
            let differences = font
                .encoding_override()
                .map(|encoding| encoding.differences().clone())
                .unwrap_or_default();
            let implied = if self.resolve(font).is_some() {
                None
            } else if let Some(metrics) = standard_metrics::lookup(font.base_name()) {
                Some(metrics.builtin_encoding())
            } else if font.is_symbolic() {
                None
            } else {
                Some(BaseEncoding::Standard)
            };
            EncodingMapping::new(implied, differences)
        })
    }

    /// Glyph name for `code`: the effective encoding first, then the
    /// program's own encoding.
    pub fn glyph_name(&self, font: &SimpleFont<'_>, code: u32) -> Option<String> {
        if let Some(name) = self.effective_encoding(font).name_for_code(code) {
            return Some(name.to_string());
        }
        self.resolve(font)?.glyph_name(code).map(str::to_string)
    }

    /// Advance width of `code` in glyph-space units.
    ///
    /// Uses the program when there is one and the standard metrics when the
    /// font is standard. `None` means the width is unknown.
    pub fn width_for_code(&self, font: &SimpleFont<'_>, code: u32) -> Option<f64> {
        let name = self.effective_encoding(font).name_for_code(code);
        if let Some(program) = self.resolve(font) {
            return program_width(program.as_ref(), name, code);
        }
        if !self.is_standard(font) {
            return None;
        }
        let metrics = standard_metrics::lookup(font.base_name())?;
        let Some(name) = name else {
            self.warn(
                font,
                FontWarningCode::MissingGlyph,
                format!("no glyph name for code {code}"),
            );
            return None;
        };
        match metrics.width(name) {
            Some(width) => Some(f64::from(width)),
            None => {
                self.warn(
                    font,
                    FontWarningCode::MissingMetrics,
                    format!("no standard metrics for glyph {name}"),
                );
                None
            }
        }
    }

    /// Returns true if the font can draw `code`.
    pub fn glyph_is_present(&self, font: &SimpleFont<'_>, code: u32) -> bool {
        let name = self.effective_encoding(font).name_for_code(code);
        if let Some(program) = self.resolve(font) {
            return program_contains(program.as_ref(), name, code);
        }
        self.is_standard(font)
            && name.is_some_and(|name| {
                standard_metrics::lookup(font.base_name()).is_some_and(|m| m.has_glyph(name))
            })
    }

    /// How the Unicode value of `code` can be determined.
    pub fn unicode_status(&self, font: &SimpleFont<'_>, code: u32) -> UnicodeStatus {
        if let Some(text) = font
            .to_unicode()
            .and_then(|cmap| cmap.lookup(code))
            .filter(|text| !text.is_empty())
        {
            return UnicodeStatus::Mapped(text.to_string());
        }
        match self.glyph_name(font, code) {
            Some(name) if is_standard_latin_glyph(&name) || is_symbol_glyph(&name) => {
                UnicodeStatus::KnownGlyph(name)
            }
            Some(name) => UnicodeStatus::UnknownGlyph(name),
            None => {
                tracing::debug!(font = %font.base_name(), code, "no glyph name for code");
                self.warn(
                    font,
                    FontWarningCode::MissingGlyph,
                    format!("no glyph name for code {code}"),
                );
                UnicodeStatus::NoGlyph
            }
        }
    }

    /// Unicode value of `code`.
    ///
    /// Returns the `/ToUnicode` text when there is one, and
    /// [`KNOWN_GLYPH_SENTINEL`] when the glyph name is a known Latin or
    /// Symbol glyph. `None` means the value could not be determined.
    pub fn unicode_for_code(&self, font: &SimpleFont<'_>, code: u32) -> Option<String> {
        match self.unicode_status(font, code) {
            UnicodeStatus::Mapped(text) => Some(text),
            UnicodeStatus::KnownGlyph(_) => Some(KNOWN_GLYPH_SENTINEL.to_string()),
            UnicodeStatus::UnknownGlyph(_) | UnicodeStatus::NoGlyph => None,
        }
    }

    /// The `/Widths` entry for `code`, with `/MissingWidth` as fallback.
    pub fn declared_width(&self, font: &SimpleFont<'_>, code: u32) -> Option<f64> {
        font.declared_widths()?.width(code)
    }

    /// Compare the declared width of `code` with the resolved one.
    pub fn check_width_consistency(&self, font: &SimpleFont<'_>, code: u32) -> WidthConsistency {
        let (Some(declared), Some(actual)) = (
            self.declared_width(font, code),
            self.width_for_code(font, code),
        ) else {
            return WidthConsistency::Unknown;
        };
        if (declared - actual).abs() <= self.options.width_tolerance {
            WidthConsistency::Consistent
        } else {
            WidthConsistency::Mismatch { declared, actual }
        }
    }

    /// Glyph names listed in the descriptor's `/CharSet`.
    ///
    /// A missing or malformed `/CharSet` gives an empty set.
    pub fn descriptor_charset<'f>(&self, font: &'f SimpleFont<'_>) -> &'f BTreeSet<String> {
        font.charset.get_or_init(|| {
            let Some(data) = font.charset_data() else {
                return BTreeSet::new();
            };
            parse_charset(data).unwrap_or_else(|e| {
                tracing::debug!(
                    font = %font.base_name(),
                    error = %e,
                    "can't parse /CharSet entry in font descriptor"
                );
                self.warn(
                    font,
                    FontWarningCode::MalformedCharSet,
                    format!("malformed /CharSet: {e}"),
                );
                BTreeSet::new()
            })
        })
    }

    fn warn(&self, font: &SimpleFont<'_>, code: FontWarningCode, description: String) {
        if self.options.collect_warnings {
            font.push_warning(code, description);
        }
    }
}
