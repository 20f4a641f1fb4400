//! Page font resources.
//!
//! Collects the simple Type1 fonts a page's `/Resources /Font` dictionary
//! names, following `/Resources` inheritance up the page tree.

use lopdf::{Document, Object, ObjectId};

use crate::error::BackendError;
use crate::font::SimpleFont;
use crate::object::resolve_ref;

/// Page tree depth beyond which `/Parent` chains are treated as cyclic.
const MAX_TREE_DEPTH: usize = 64;

/// A font named in a page's resources.
#[derive(Debug)]
pub struct PageFont<'a> {
    /// Key of the font in `/Resources /Font`, e.g. `F1`.
    pub resource_name: String,
    pub font: SimpleFont<'a>,
}

/// Look up a key in the page dictionary, walking up the page tree
/// (via /Parent) if the key is not found on the page itself.
fn resolve_inherited<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>, BackendError> {
    let mut current_id = page_id;
    for _ in 0..MAX_TREE_DEPTH {
        let dict = doc
            .get_object(current_id)
            .and_then(Object::as_dict)
            .map_err(|e| BackendError::Parse(format!("failed to get page dictionary: {e}")))?;

        if let Ok(value) = dict.get(key) {
            return Ok(Some(value));
        }

        match dict.get(b"Parent") {
            Ok(parent) => {
                current_id = parent
                    .as_reference()
                    .map_err(|e| BackendError::Parse(format!("invalid /Parent reference: {e}")))?;
            }
            Err(_) => return Ok(None),
        }
    }
    Err(BackendError::Parse(format!(
        "page tree deeper than {MAX_TREE_DEPTH} levels"
    )))
}

/// The simple Type1 fonts of the page `page_id`, in resource-name order.
///
/// Fonts of other subtypes are skipped.
///
/// # Errors
///
/// Returns [`BackendError::Parse`] if the page tree or `/Resources` is
/// malformed.
pub fn page_fonts(doc: &Document, page_id: ObjectId) -> Result<Vec<PageFont<'_>>, BackendError> {
    let Some(resources) = resolve_inherited(doc, page_id, b"Resources")? else {
        return Ok(Vec::new());
    };
    let resources = resolve_ref(doc, resources)
        .as_dict()
        .map_err(|_| BackendError::Parse("/Resources is not a dictionary".to_string()))?;
    let Some(fonts) = resources
        .get(b"Font")
        .ok()
        .and_then(|o| resolve_ref(doc, o).as_dict().ok())
    else {
        return Ok(Vec::new());
    };

    let mut page_fonts = Vec::new();
    for (name, value) in fonts.iter() {
        let resource_name = String::from_utf8_lossy(name).into_owned();
        let font = match value {
            Object::Reference(id) => SimpleFont::from_object_id(doc, *id),
            Object::Dictionary(dict) => SimpleFont::new(doc, dict),
            _ => continue,
        };
        match font {
            Ok(font) => page_fonts.push(PageFont {
                resource_name,
                font,
            }),
            Err(e) => {
                tracing::trace!(font = %resource_name, error = %e, "skipping font resource");
            }
        }
    }
    page_fonts.sort_by(|a, b| a.resource_name.cmp(&b.resource_name));
    Ok(page_fonts)
}
