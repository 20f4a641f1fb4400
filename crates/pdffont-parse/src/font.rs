//! Simple Type1 font dictionaries.
//!
//! [`SimpleFont`] wraps one `/Subtype /Type1` (or `/MMType1`) font
//! dictionary. It reads what the dictionary declares up front and holds the
//! memo cells that [`FontResolver`](crate::FontResolver) fills on first use:
//! the resolved program, the standard-font classification and the effective
//! encoding. Each cell is written at most once; later calls see the stored
//! value whichever resolver asks.

use std::collections::BTreeSet;
use std::sync::{Mutex, OnceLock, PoisonError};

use lopdf::{Document, Object, ObjectId};
use pdffont_core::{
    BaseEncoding, DifferenceItem, EncodingMapping, EncodingOverride, FontWarning,
    FontWarningCode, SharedProgram, standard_metrics,
};

use crate::cmap::ToUnicodeMap;
use crate::descriptor::FontDescriptor;
use crate::error::BackendError;
use crate::object::{get_resolved, name_to_string, stream_bytes};
use crate::widths::DeclaredWidths;

/// What `/Encoding` holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredEncoding {
    /// No `/Encoding` entry.
    Absent,
    /// `/Encoding /Name`, kept as written.
    Named(String),
    /// An encoding dictionary with optional `/BaseEncoding` and `/Differences`.
    Dictionary(EncodingOverride),
}

/// A simple Type1 font usage in a document.
#[derive(Debug)]
pub struct SimpleFont<'a> {
    doc: &'a Document,
    dict: &'a lopdf::Dictionary,
    id: Option<ObjectId>,
    base_name: String,
    descriptor: Option<FontDescriptor<'a>>,
    encoding: DeclaredEncoding,
    declared_mapping: EncodingMapping,
    warnings: Mutex<Vec<FontWarning>>,
    pub(crate) program: OnceLock<Option<SharedProgram>>,
    pub(crate) standard: OnceLock<bool>,
    pub(crate) effective_encoding: OnceLock<EncodingMapping>,
    to_unicode: OnceLock<Option<ToUnicodeMap>>,
    widths: OnceLock<Option<DeclaredWidths>>,
    pub(crate) charset: OnceLock<BTreeSet<String>>,
}

impl<'a> SimpleFont<'a> {
    /// Wrap a font dictionary.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Font`] if `/Subtype` is not `/Type1` or
    /// `/MMType1`.
    pub fn new(doc: &'a Document, dict: &'a lopdf::Dictionary) -> Result<Self, BackendError> {
        let subtype = get_resolved(doc, dict, b"Subtype").and_then(name_to_string);
        match subtype.as_deref() {
            Some("Type1" | "MMType1") => {}
            Some(other) => {
                return Err(BackendError::Font(format!(
                    "expected /Subtype /Type1 or /MMType1, got /{other}"
                )));
            }
            None => return Err(BackendError::Font("font has no /Subtype".to_string())),
        }

        let base_name = get_resolved(doc, dict, b"BaseFont")
            .and_then(name_to_string)
            .unwrap_or_default();
        let encoding = read_encoding(doc, dict);
        let declared_mapping = match &encoding {
            DeclaredEncoding::Absent => EncodingMapping::empty(),
            DeclaredEncoding::Named(name) => EncodingMapping::new(
                BaseEncoding::from_pdf_name(name.as_bytes()),
                Default::default(),
            ),
            DeclaredEncoding::Dictionary(encoding) => {
                EncodingMapping::new(encoding.base(), encoding.differences().clone())
            }
        };

        Ok(Self {
            doc,
            dict,
            id: None,
            base_name,
            descriptor: FontDescriptor::from_font_dict(doc, dict),
            encoding,
            declared_mapping,
            warnings: Mutex::new(Vec::new()),
            program: OnceLock::new(),
            standard: OnceLock::new(),
            effective_encoding: OnceLock::new(),
            to_unicode: OnceLock::new(),
            widths: OnceLock::new(),
            charset: OnceLock::new(),
        })
    }

    /// Wrap the font dictionary stored as object `id`.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Lopdf`] if the object does not exist or is not
    /// a dictionary, and [`BackendError::Font`] as for [`new`](Self::new).
    pub fn from_object_id(doc: &'a Document, id: ObjectId) -> Result<Self, BackendError> {
        let dict = doc.get_dictionary(id)?;
        let mut font = Self::new(doc, dict)?;
        font.id = Some(id);
        Ok(font)
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    /// The font dictionary.
    pub fn dictionary(&self) -> &'a lopdf::Dictionary {
        self.dict
    }

    /// Object id of the font dictionary, when loaded by id.
    pub fn object_id(&self) -> Option<ObjectId> {
        self.id
    }

    /// `/BaseFont`, or the empty string if absent.
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Returns true if `/BaseFont` carries a subset tag (`ABCDEF+Name`).
    pub fn is_subset(&self) -> bool {
        let bytes = self.base_name.as_bytes();
        bytes.len() > 7 && bytes[6] == b'+' && bytes[..6].iter().all(u8::is_ascii_uppercase)
    }

    /// The font's descriptor, if it has one.
    pub fn descriptor(&self) -> Option<&FontDescriptor<'a>> {
        self.descriptor.as_ref()
    }

    /// Standard metrics for the base name, used in place of a missing or
    /// empty descriptor.
    fn synthesized_metrics(&self) -> Option<&'static standard_metrics::StandardFontMetrics> {
        if self.descriptor.as_ref().is_some_and(|d| !d.is_empty()) {
            return None;
        }
        standard_metrics::lookup(&self.base_name)
    }

    /// The symbolic flag from `/Flags`.
    ///
    /// Without flags, Symbol and ZapfDingbats are symbolic and every other
    /// font is not.
    pub fn is_symbolic(&self) -> bool {
        if let Some(symbolic) = self.descriptor.as_ref().and_then(FontDescriptor::is_symbolic) {
            return symbolic;
        }
        standard_metrics::lookup(&self.base_name).is_some_and(|m| m.is_symbolic())
    }

    /// `/FontBBox` from the descriptor, or from the standard metrics when the
    /// descriptor is missing or empty.
    pub fn font_bbox(&self) -> Option<[f64; 4]> {
        if let Some(bbox) = self.descriptor.as_ref().and_then(|d| d.font_bbox) {
            return Some(bbox);
        }
        self.synthesized_metrics()
            .map(|m| m.font_bbox.map(f64::from))
    }

    /// What `/Encoding` declares.
    pub fn encoding(&self) -> &DeclaredEncoding {
        &self.encoding
    }

    /// The encoding dictionary, if `/Encoding` is one.
    pub fn encoding_override(&self) -> Option<&EncodingOverride> {
        match &self.encoding {
            DeclaredEncoding::Dictionary(encoding) => Some(encoding),
            _ => None,
        }
    }

    /// The explicitly declared mapping: a recognized base table with the
    /// differences over it, and no implied base.
    pub fn declared_encoding(&self) -> &EncodingMapping {
        &self.declared_mapping
    }

    /// The declared base table, if `/Encoding` names a recognized one.
    pub(crate) fn declared_base(&self) -> Option<BaseEncoding> {
        self.declared_mapping.base()
    }

    /// The `/ToUnicode` CMap. A CMap that cannot be read counts as absent.
    pub fn to_unicode(&self) -> Option<&ToUnicodeMap> {
        self.to_unicode
            .get_or_init(|| {
                let stream = get_resolved(self.doc, self.dict, b"ToUnicode")?.as_stream().ok()?;
                let parsed = stream_bytes(stream)
                    .map_err(BackendError::from)
                    .and_then(|bytes| ToUnicodeMap::parse(&bytes));
                match parsed {
                    Ok(cmap) => Some(cmap),
                    Err(e) => {
                        tracing::debug!(
                            font = %self.base_name,
                            error = %e,
                            "unreadable /ToUnicode CMap"
                        );
                        None
                    }
                }
            })
            .as_ref()
    }

    /// `/Widths` with `/FirstChar`, `/LastChar` and the descriptor's
    /// `/MissingWidth`.
    pub fn declared_widths(&self) -> Option<&DeclaredWidths> {
        self.widths
            .get_or_init(|| {
                let missing_width = self.descriptor.as_ref().and_then(|d| d.missing_width);
                DeclaredWidths::from_font_dict(self.doc, self.dict, missing_width)
            })
            .as_ref()
    }

    /// Raw `/CharSet` string from the descriptor.
    pub fn charset_data(&self) -> Option<&'a [u8]> {
        self.descriptor.as_ref().and_then(|d| d.charset)
    }

    /// Warnings recorded for this font so far.
    pub fn warnings(&self) -> Vec<FontWarning> {
        self.warnings
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Record a warning unless an identical one is already recorded.
    pub(crate) fn push_warning(&self, code: FontWarningCode, description: impl Into<String>) {
        let mut warning = FontWarning::new(code, description);
        if !self.base_name.is_empty() {
            warning = warning.for_font(self.base_name.clone());
        }
        let mut warnings = self.warnings.lock().unwrap_or_else(PoisonError::into_inner);
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    }
}

fn read_encoding(doc: &Document, dict: &lopdf::Dictionary) -> DeclaredEncoding {
    match get_resolved(doc, dict, b"Encoding") {
        Some(Object::Name(name)) => {
            DeclaredEncoding::Named(String::from_utf8_lossy(name).into_owned())
        }
        Some(Object::Dictionary(encoding)) => {
            let base_name = get_resolved(doc, encoding, b"BaseEncoding").and_then(name_to_string);
            let items = get_resolved(doc, encoding, b"Differences")
                .and_then(|o| o.as_array().ok())
                .map(|arr| parse_differences(doc, arr))
                .unwrap_or_default();
            DeclaredEncoding::Dictionary(EncodingOverride::from_differences(base_name, items))
        }
        _ => DeclaredEncoding::Absent,
    }
}

/// Convert a `/Differences` array, skipping entries that are neither codes
/// nor names.
fn parse_differences(doc: &Document, arr: &[Object]) -> Vec<DifferenceItem> {
    arr.iter()
        .filter_map(|obj| match crate::object::resolve_ref(doc, obj) {
            Object::Integer(code) => Some(DifferenceItem::Code(*code)),
            Object::Name(name) => Some(DifferenceItem::Name(
                String::from_utf8_lossy(name).into_owned(),
            )),
            _ => None,
        })
        .collect()
}
