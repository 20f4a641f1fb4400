//! Error and warning types for pdffont.
//!
//! Provides [`DecodeError`] for embedded font programs that cannot be turned
//! into a usable program, [`FontWarning`] for non-fatal diagnostics collected
//! while resolving a font, and [`FontOptions`] for configuring limits and
//! warning behavior.

use std::fmt;

/// Failure to decode an embedded font program.
///
/// A decode failure is terminal for the object it came from: the session
/// cache stores it and hands the same value to every later lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The bytes do not have the structure of the expected format.
    Malformed(String),
    /// The format is recognized but no decoder is available for it.
    Unsupported(String),
    /// The embedded program is larger than the configured limit.
    LimitExceeded {
        /// The configured limit, in bytes.
        limit: usize,
        /// The size of the embedded program, in bytes.
        actual: usize,
    },
    /// The stream holding the program could not be read or unfiltered.
    Stream(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Malformed(msg) => write!(f, "malformed font program: {msg}"),
            DecodeError::Unsupported(msg) => write!(f, "unsupported font program: {msg}"),
            DecodeError::LimitExceeded { limit, actual } => write!(
                f,
                "font program too large: {actual} bytes (limit: {limit})"
            ),
            DecodeError::Stream(msg) => write!(f, "font stream error: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Machine-readable code for a [`FontWarning`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "detail")
)]
pub enum FontWarningCode {
    /// An embedded font program failed to decode.
    DecodeFailed,
    /// `/FontFile3` declares a subtype that simple fonts cannot use.
    UnsupportedSubtype,
    /// The descriptor's `/CharSet` string could not be tokenized.
    MalformedCharSet,
    /// No glyph name could be found for a character code.
    MissingGlyph,
    /// A standard font has no metrics for the requested glyph.
    MissingMetrics,
    /// Any other warning not covered by specific variants.
    Other(String),
}

impl FontWarningCode {
    /// Returns the string tag for this warning code.
    pub fn as_str(&self) -> &str {
        match self {
            FontWarningCode::DecodeFailed => "DECODE_FAILED",
            FontWarningCode::UnsupportedSubtype => "UNSUPPORTED_SUBTYPE",
            FontWarningCode::MalformedCharSet => "MALFORMED_CHARSET",
            FontWarningCode::MissingGlyph => "MISSING_GLYPH",
            FontWarningCode::MissingMetrics => "MISSING_METRICS",
            FontWarningCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for FontWarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal diagnostic recorded while resolving a font.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontWarning {
    /// Machine-readable warning code.
    pub code: FontWarningCode,
    /// Human-readable description of the warning.
    pub description: String,
    /// `/BaseFont` of the font the warning concerns, if known.
    pub font_name: Option<String>,
}

impl FontWarning {
    /// Create a warning with a specific code and description.
    pub fn new(code: FontWarningCode, description: impl Into<String>) -> Self {
        Self {
            code,
            description: description.into(),
            font_name: None,
        }
    }

    /// Attach the font name, returning the modified warning (builder pattern).
    pub fn for_font(mut self, font_name: impl Into<String>) -> Self {
        self.font_name = Some(font_name.into());
        self
    }
}

impl fmt::Display for FontWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.description)?;
        if let Some(ref font_name) = self.font_name {
            write!(f, " [font {font_name}]")?;
        }
        Ok(())
    }
}

/// Options controlling font resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct FontOptions {
    /// Whether fonts record [`FontWarning`]s (default: true).
    pub collect_warnings: bool,
    /// Largest embedded font program accepted for decoding (default: 64 MiB).
    ///
    /// `None` disables the limit.
    pub max_program_bytes: Option<usize>,
    /// Allowed difference between a declared `/Widths` entry and the resolved
    /// glyph width, in glyph-space units (default: 1.0).
    pub width_tolerance: f64,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            collect_warnings: true,
            max_program_bytes: Some(64 * 1024 * 1024),
            width_tolerance: 1.0,
        }
    }
}

impl FontOptions {
    /// Check an embedded program's size against [`max_program_bytes`](Self::max_program_bytes).
    pub fn check_program_size(&self, actual: usize) -> Result<(), DecodeError> {
        match self.max_program_bytes {
            Some(limit) if actual > limit => Err(DecodeError::LimitExceeded { limit, actual }),
            _ => Ok(()),
        }
    }
}
