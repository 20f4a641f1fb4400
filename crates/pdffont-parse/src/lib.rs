//! pdffont-parse: lopdf-backed resolution of simple Type1 fonts.
//!
//! This crate reads font dictionaries, descriptors, `/ToUnicode` CMaps and
//! `/CharSet` strings from a [`lopdf::Document`], decodes embedded font
//! programs through pluggable [`ProgramDecoder`]s, and answers per-code width
//! and Unicode queries through [`FontResolver`]. It depends on pdffont-core
//! for the encodings, standard metrics and program cache.

pub mod charset;
pub mod cmap;
pub mod decode;
pub mod descriptor;
pub mod error;
pub mod font;
pub mod lexer;
mod object;
pub mod resolver;
pub mod resources;
pub mod widths;

pub use charset::parse_charset;
pub use cmap::ToUnicodeMap;
pub use decode::{
    DecodeHints, DecoderSet, OpenTypeDecoder, ProgramDecoder, UnavailableDecoder,
    decode_by_subtype,
};
pub use descriptor::{EmbeddedProgram, FontDescriptor, ProgramSlot};
pub use error::BackendError;
pub use font::{DeclaredEncoding, SimpleFont};
pub use pdffont_core;
pub use resolver::{
    FontResolver, KNOWN_GLYPH_SENTINEL, ProgramKey, UnicodeStatus, WidthConsistency,
};
pub use resources::{PageFont, page_fonts};
pub use widths::DeclaredWidths;
