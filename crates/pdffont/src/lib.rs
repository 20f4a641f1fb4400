//! pdffont: Resolve the programs, widths, and Unicode values of simple Type1
//! fonts in PDF documents.
//!
//! This is the public API facade crate for pdffont. It re-exports types from
//! pdffont-core and pdffont-parse and adds [`FontSession`], which owns the
//! session-wide program cache.
//!
//! # Architecture
//!
//! - **pdffont-core**: Encodings, standard-14 metrics, encoding equivalence,
//!   the program model and cache
//! - **pdffont-parse**: lopdf-backed font dictionaries, decoders, and queries
//! - **pdffont** (this crate): Sessions tying the two together
//!
//! # Features
//!
//! - `parallel`: [`FontSession::resolve_all_parallel`] on rayon's pool
//! - `serde`: serialization of warnings, formats, and [`FontSummary`]

mod session;

pub use pdffont_core;
pub use pdffont_core::{
    BaseEncoding, CacheStats, DecodeError, EncodingMapping, EncodingOverride, FontOptions,
    FontProgram, FontWarning, FontWarningCode, GlyphTable, ProgramFormat, SharedProgram,
    has_real_differences,
};
pub use pdffont_parse;
pub use pdffont_parse::{
    BackendError, DecodeHints, DecoderSet, FontResolver, KNOWN_GLYPH_SENTINEL, OpenTypeDecoder,
    PageFont, ProgramDecoder, ProgramKey, SimpleFont, UnicodeStatus, WidthConsistency,
};
pub use session::{FontSession, FontSummary};
