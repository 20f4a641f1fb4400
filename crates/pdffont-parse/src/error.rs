//! Error types for the document access layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. [`BackendError`] covers
//! requests that cannot be answered at all, such as opening a dictionary that
//! is not a simple Type1 font. Per-character queries never fail; they answer
//! `None` instead.

use pdffont_core::DecodeError;
use thiserror::Error;

/// Error type for PDF access operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// The dictionary is not a font this crate handles.
    #[error("font error: {0}")]
    Font(String),

    /// An embedded font program could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Error reported by lopdf.
    #[error("lopdf error: {0}")]
    Lopdf(#[from] lopdf::Error),
}
