//! Shared test utilities: in-memory font dictionaries and a counting decoder.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lopdf::{Document, Object, ObjectId, Stream, dictionary};
use pdffont::{
    DecodeError, DecodeHints, DecoderSet, FontSession, GlyphTable, ProgramDecoder, ProgramFormat,
    SharedProgram,
};

/// Hints one decode call received.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenHints {
    pub subset: bool,
    pub symbolic: bool,
    pub encoding_name_65: Option<String>,
}

/// A decoder that turns any bytes not starting with `broken` into a table with
/// glyphs A (600), B (700) and space (250) at their ASCII codes.
#[derive(Debug, Default)]
pub struct CountingDecoder {
    calls: AtomicUsize,
    seen: Mutex<Vec<SeenHints>>,
}

impl CountingDecoder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<SeenHints> {
        self.seen.lock().unwrap().clone()
    }
}

/// Shares one [`CountingDecoder`] between decoder slots.
#[derive(Debug)]
pub struct CountingHandle(pub Arc<CountingDecoder>);

impl ProgramDecoder for CountingHandle {
    fn decode(
        &self,
        bytes: &[u8],
        hints: &DecodeHints<'_>,
    ) -> Result<SharedProgram, DecodeError> {
        let CountingHandle(counter) = self;
        counter.record(bytes, hints)
    }
}

impl CountingDecoder {
    fn record(&self, bytes: &[u8], hints: &DecodeHints<'_>) -> Result<SharedProgram, DecodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(SeenHints {
            subset: hints.subset,
            symbolic: hints.symbolic,
            encoding_name_65: hints
                .encoding
                .and_then(|e| e.name_for_code(65))
                .map(str::to_string),
        });
        if bytes.starts_with(b"broken") {
            return Err(DecodeError::Malformed("truncated program".to_string()));
        }
        let mut builder = GlyphTable::builder(ProgramFormat::Type1);
        builder.set_subset(hints.subset);
        builder.push_encoded_glyph(32, "space", 250.0);
        builder.push_encoded_glyph(65, "A", 600.0);
        builder.push_encoded_glyph(66, "B", 700.0);
        Ok(builder.build().into_shared())
    }
}

/// A session whose Type1, CFF and OpenType decoders all count into `decoder`.
pub fn counting_session(decoder: &Arc<CountingDecoder>) -> FontSession {
    let decoders = DecoderSet::new()
        .with_decoder(ProgramFormat::Type1, CountingHandle(Arc::clone(decoder)))
        .with_decoder(ProgramFormat::Cff, CountingHandle(Arc::clone(decoder)))
        .with_decoder(ProgramFormat::OpenType, CountingHandle(Arc::clone(decoder)));
    FontSession::new().with_decoders(decoders)
}

/// A simple Type1 font dictionary.
pub fn type1_font(base_font: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base_font,
    }
}

/// Add a program stream; `subtype` goes into the stream dictionary.
pub fn add_program(doc: &mut Document, subtype: Option<&str>, bytes: &[u8]) -> ObjectId {
    let mut dict = dictionary! {};
    if let Some(subtype) = subtype {
        dict.set("Subtype", Object::Name(subtype.as_bytes().to_vec()));
    }
    doc.add_object(Stream::new(dict, bytes.to_vec()))
}

/// Add a font whose descriptor points `key` (`FontFile` or `FontFile3`) at
/// `program`; returns the font's object id.
pub fn add_embedded_font(
    doc: &mut Document,
    base_font: &str,
    flags: i64,
    key: &str,
    program: ObjectId,
) -> ObjectId {
    let mut descriptor = dictionary! {
        "Type" => "FontDescriptor",
        "FontName" => base_font,
        "Flags" => flags,
    };
    descriptor.set(key.as_bytes().to_vec(), program);
    let descriptor = doc.add_object(descriptor);
    let mut font = type1_font(base_font);
    font.set("FontDescriptor", descriptor);
    doc.add_object(font)
}

/// An encoding dictionary with `/Differences` starting at `first`.
pub fn differences(base: Option<&str>, first: i64, names: &[&str]) -> lopdf::Dictionary {
    let mut items = vec![Object::Integer(first)];
    items.extend(names.iter().map(|n| Object::Name(n.as_bytes().to_vec())));
    let mut dict = dictionary! { "Type" => "Encoding", "Differences" => items };
    if let Some(base) = base {
        dict.set("BaseEncoding", Object::Name(base.as_bytes().to_vec()));
    }
    dict
}
