//! Decoder seam for embedded font programs.
//!
//! The binary parsers for each program format live behind [`ProgramDecoder`].
//! A [`DecoderSet`] holds one decoder per [`ProgramFormat`], and
//! [`decode_by_subtype`] is the single dispatch point the resolver uses.

mod opentype;

use std::fmt;
use std::sync::Arc;

use pdffont_core::{DecodeError, EncodingMapping, ProgramFormat, SharedProgram};

pub use opentype::OpenTypeDecoder;

/// Font facts passed along with the program bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeHints<'h> {
    /// The font's `/BaseFont` carries a subset tag.
    pub subset: bool,
    /// The font is symbolic.
    pub symbolic: bool,
    /// The font's declared encoding. Only OpenType decoders receive it.
    pub encoding: Option<&'h EncodingMapping>,
}

/// Turns the bytes of one program format into a [`SharedProgram`].
pub trait ProgramDecoder: Send + Sync + fmt::Debug {
    /// Decode `bytes`.
    ///
    /// # Errors
    ///
    /// Returns a [`DecodeError`] if the bytes do not hold a usable program.
    fn decode(&self, bytes: &[u8], hints: &DecodeHints<'_>) -> Result<SharedProgram, DecodeError>;
}

/// A decoder for a format no parser is installed for.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableDecoder(pub ProgramFormat);

impl ProgramDecoder for UnavailableDecoder {
    fn decode(&self, _bytes: &[u8], _hints: &DecodeHints<'_>) -> Result<SharedProgram, DecodeError> {
        Err(DecodeError::Unsupported(format!(
            "no {} decoder installed",
            self.0
        )))
    }
}

/// One decoder per program format.
///
/// The default set decodes OpenType through `ttf-parser` and reports Type1
/// and CFF programs as unsupported.
#[derive(Debug, Clone)]
pub struct DecoderSet {
    type1: Arc<dyn ProgramDecoder>,
    cff: Arc<dyn ProgramDecoder>,
    opentype: Arc<dyn ProgramDecoder>,
}

impl Default for DecoderSet {
    fn default() -> Self {
        Self {
            type1: Arc::new(UnavailableDecoder(ProgramFormat::Type1)),
            cff: Arc::new(UnavailableDecoder(ProgramFormat::Cff)),
            opentype: Arc::new(OpenTypeDecoder),
        }
    }
}

impl DecoderSet {
    /// The default decoders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the decoder for `format`, returning the modified set.
    pub fn with_decoder(
        mut self,
        format: ProgramFormat,
        decoder: impl ProgramDecoder + 'static,
    ) -> Self {
        let decoder: Arc<dyn ProgramDecoder> = Arc::new(decoder);
        match format {
            ProgramFormat::Type1 => self.type1 = decoder,
            ProgramFormat::Cff => self.cff = decoder,
            ProgramFormat::OpenType => self.opentype = decoder,
        }
        self
    }

    /// The decoder installed for `format`.
    pub fn decoder(&self, format: ProgramFormat) -> &dyn ProgramDecoder {
        match format {
            ProgramFormat::Type1 => self.type1.as_ref(),
            ProgramFormat::Cff => self.cff.as_ref(),
            ProgramFormat::OpenType => self.opentype.as_ref(),
        }
    }
}

/// Decode `bytes` with the decoder for `format`.
///
/// Type1 decoders get no hints and CFF decoders only the subset flag. The
/// symbolic flag and the encoding are passed to OpenType decoders alone.
pub fn decode_by_subtype(
    decoders: &DecoderSet,
    format: ProgramFormat,
    bytes: &[u8],
    hints: &DecodeHints<'_>,
) -> Result<SharedProgram, DecodeError> {
    let hints = match format {
        ProgramFormat::OpenType => *hints,
        ProgramFormat::Cff => DecodeHints {
            subset: hints.subset,
            ..DecodeHints::default()
        },
        ProgramFormat::Type1 => DecodeHints::default(),
    };
    decoders.decoder(format).decode(bytes, &hints)
}
