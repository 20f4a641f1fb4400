//! pdffont-core: Backend-independent font resolution data and algorithms.
//!
//! This crate provides the glyph-name encodings, the standard-14 font
//! metrics, the encoding-equivalence check, the [`FontProgram`] capability
//! trait with its in-memory [`GlyphTable`], and the session-wide
//! [`ProgramCache`] used by pdffont. It has no PDF object model dependency.

pub mod cache;
pub mod encoding;
pub mod equivalence;
pub mod error;
pub mod program;
pub mod standard_metrics;

pub use cache::{CacheStats, CachedProgram, ProgramCache};
pub use encoding::{
    BaseEncoding, DifferenceItem, EncodingMapping, EncodingOverride, NOTDEF,
    is_standard_latin_glyph, is_symbol_glyph,
};
pub use equivalence::has_real_differences;
pub use error::{DecodeError, FontOptions, FontWarning, FontWarningCode};
pub use program::{
    FontProgram, GlyphTable, GlyphTableBuilder, ProgramFormat, SharedProgram, program_contains,
    program_width,
};
pub use standard_metrics::{STANDARD_FONT_NAMES, StandardFontMetrics, is_standard_name};
