//! Small helpers over the lopdf object model.

use lopdf::{Document, Object, ObjectId, Stream};
use pdffont_core::DecodeError;

/// Resolve an indirect reference, returning the referenced object.
///
/// If the object is a `Reference`, resolves it via the document.
/// Otherwise, returns the object as-is.
pub(crate) fn resolve_ref<'a>(doc: &'a Document, obj: &'a Object) -> &'a Object {
    match obj {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(obj),
        _ => obj,
    }
}

/// Look up `key` in `dict`, resolving an indirect value.
pub(crate) fn get_resolved<'a>(
    doc: &'a Document,
    dict: &'a lopdf::Dictionary,
    key: &[u8],
) -> Option<&'a Object> {
    dict.get(key).ok().map(|obj| resolve_ref(doc, obj))
}

/// Identity of the object behind `key`, if the entry is an indirect reference.
pub(crate) fn reference_id(dict: &lopdf::Dictionary, key: &[u8]) -> Option<ObjectId> {
    dict.get(key).ok().and_then(|obj| obj.as_reference().ok())
}

/// Convert a lopdf numeric object (Integer or Real) to f64.
pub(crate) fn object_to_f64(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(f64::from(*f)),
        _ => None,
    }
}

/// A name value as UTF-8 text, lossily converted.
pub(crate) fn name_to_string(obj: &Object) -> Option<String> {
    obj.as_name()
        .ok()
        .map(|name| String::from_utf8_lossy(name).into_owned())
}

/// The decoded bytes of an embedded stream.
///
/// Streams with a `/Filter` are decompressed; a filter that fails is reported
/// as [`DecodeError::Stream`].
pub(crate) fn stream_bytes(stream: &Stream) -> Result<Vec<u8>, DecodeError> {
    if stream.dict.get(b"Filter").is_ok() {
        stream
            .decompressed_content()
            .map_err(|e| DecodeError::Stream(format!("failed to decompress font stream: {e}")))
    } else {
        Ok(stream.content.clone())
    }
}
