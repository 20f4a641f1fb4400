//! End-to-end resolution behavior over in-memory documents.

mod common;

use std::sync::Arc;

use common::{
    CountingDecoder, SeenHints, add_embedded_font, add_program, counting_session, differences,
    type1_font,
};
use lopdf::{Document, Object, Stream, StringFormat, dictionary};
use pdffont::{
    EncodingOverride, FontSession, FontWarningCode, KNOWN_GLYPH_SENTINEL, ProgramFormat,
    SimpleFont, UnicodeStatus, WidthConsistency, has_real_differences,
};

// --- resolve --------------------------------------------------------------

#[test]
fn resolve_is_idempotent_and_decodes_once() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"type1 program");
    let font_id = add_embedded_font(&mut doc, "Garamond", 32, "FontFile", program);
    let font = SimpleFont::from_object_id(&doc, font_id).unwrap();

    let resolver = session.resolver();
    let first = resolver.resolve(&font).unwrap();
    for _ in 0..5 {
        assert!(Arc::ptr_eq(&first, &resolver.resolve(&font).unwrap()));
    }
    assert_eq!(decoder.calls(), 1);
}

#[test]
fn documents_sharing_object_numbers_keep_separate_programs() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut good = Document::with_version("1.5");
    let mut broken = Document::with_version("1.5");
    let good_program = add_program(&mut good, None, b"good program");
    let broken_program = add_program(&mut broken, None, b"broken program");
    assert_eq!(good_program, broken_program);
    let good_id = add_embedded_font(&mut good, "Garamond", 32, "FontFile", good_program);
    let broken_id = add_embedded_font(&mut broken, "Garamond", 32, "FontFile", broken_program);

    let resolver = session.resolver();
    let good_font = SimpleFont::from_object_id(&good, good_id).unwrap();
    let broken_font = SimpleFont::from_object_id(&broken, broken_id).unwrap();
    assert!(resolver.resolve(&good_font).is_some());
    assert!(resolver.resolve(&broken_font).is_none());
    assert_eq!(decoder.calls(), 2);
    assert_eq!(session.cache_stats().entries, 2);

    // a cached failure in one document leaves the other alone
    let good_again = SimpleFont::from_object_id(&good, good_id).unwrap();
    assert!(resolver.resolve(&good_again).is_some());
    assert_eq!(decoder.calls(), 2);
}

#[test]
fn resolve_none_is_idempotent() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"broken");
    let font_id = add_embedded_font(&mut doc, "Garamond", 32, "FontFile", program);
    let font = SimpleFont::from_object_id(&doc, font_id).unwrap();

    let resolver = session.resolver();
    assert!(resolver.resolve(&font).is_none());
    assert!(resolver.resolve(&font).is_none());
    assert_eq!(decoder.calls(), 1);
}

#[test]
fn fonts_sharing_a_program_share_the_instance() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, Some("Type1C"), b"cff program");
    let regular = add_embedded_font(&mut doc, "ABCDEF+Minion", 32, "FontFile3", program);
    let copy = add_embedded_font(&mut doc, "GHIJKL+Minion", 32, "FontFile3", program);

    let regular = SimpleFont::from_object_id(&doc, regular).unwrap();
    let copy = SimpleFont::from_object_id(&doc, copy).unwrap();
    let resolver = session.resolver();
    let a = resolver.resolve(&regular).unwrap();
    let b = resolver.resolve(&copy).unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(decoder.calls(), 1);
    let stats = session.cache_stats();
    assert_eq!((stats.entries, stats.decodes, stats.hits), (1, 1, 1));
}

#[test]
fn failures_are_shared_between_fonts_too() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"broken");
    let a = add_embedded_font(&mut doc, "A", 32, "FontFile", program);
    let b = add_embedded_font(&mut doc, "B", 32, "FontFile", program);
    let a = SimpleFont::from_object_id(&doc, a).unwrap();
    let b = SimpleFont::from_object_id(&doc, b).unwrap();

    let resolver = session.resolver();
    assert!(resolver.resolve(&a).is_none());
    assert!(resolver.resolve(&b).is_none());
    assert_eq!(decoder.calls(), 1);
    assert_eq!(b.warnings()[0].code, FontWarningCode::DecodeFailed);
}

#[test]
fn font_file_has_priority_over_font_file3() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let type1 = add_program(&mut doc, None, b"type1");
    let cff = add_program(&mut doc, Some("Type1C"), b"cff");
    let descriptor = doc.add_object(dictionary! { "FontFile" => type1, "FontFile3" => cff });
    let mut dict = type1_font("Garamond");
    dict.set("FontDescriptor", descriptor);
    let font = SimpleFont::new(&doc, &dict).unwrap();

    let program = session.resolver().resolve(&font).unwrap();
    assert_eq!(program.format(), ProgramFormat::Type1);
}

#[test]
fn hints_follow_the_program_format() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let encoding = doc.add_object(differences(Some("WinAnsiEncoding"), 65, &["Alpha"]));

    let mut fonts = Vec::new();
    for (subtype, key) in [
        (None, "FontFile"),
        (Some("Type1C"), "FontFile3"),
        (Some("OpenType"), "FontFile3"),
    ] {
        let program = add_program(&mut doc, subtype, key.as_bytes());
        let id = add_embedded_font(&mut doc, "ABCDEF+Symbolic", 4, key, program);
        if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(id) {
            dict.set("Encoding", encoding);
        }
        fonts.push(id);
    }
    let resolver = session.resolver();
    for id in fonts {
        let font = SimpleFont::from_object_id(&doc, id).unwrap();
        assert!(resolver.resolve(&font).is_some());
    }

    let no_hints = SeenHints {
        subset: false,
        symbolic: false,
        encoding_name_65: None,
    };
    assert_eq!(
        decoder.seen(),
        vec![
            no_hints.clone(),
            SeenHints {
                subset: true,
                ..no_hints
            },
            SeenHints {
                subset: true,
                symbolic: true,
                encoding_name_65: Some("Alpha".to_string()),
            },
        ]
    );
}

#[test]
fn unknown_font_file3_subtype_is_not_decoded() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, Some("CIDFontType0C"), b"cid");
    let id = add_embedded_font(&mut doc, "Garamond", 32, "FontFile3", program);
    let font = SimpleFont::from_object_id(&doc, id).unwrap();

    assert!(session.resolver().resolve(&font).is_none());
    assert_eq!(decoder.calls(), 0);
    assert_eq!(font.warnings()[0].code, FontWarningCode::UnsupportedSubtype);
}

#[test]
fn default_session_reports_type1_as_unsupported() {
    let session = FontSession::new();
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"%!PS-AdobeFont-1.0: Garamond");
    let id = add_embedded_font(&mut doc, "Garamond", 32, "FontFile", program);
    let font = SimpleFont::from_object_id(&doc, id).unwrap();

    assert!(session.resolver().resolve(&font).is_none());
    let warning = &font.warnings()[0];
    assert_eq!(warning.code, FontWarningCode::DecodeFailed);
    assert!(warning.description.contains("no Type1 decoder installed"));
}

#[test]
fn filtered_program_is_decompressed_before_decoding() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let mut stream = Stream::new(dictionary! {}, [&b"broken"[..], &[b' '; 256][..]].concat());
    stream.compress().unwrap();
    assert!(stream.dict.has(b"Filter"));
    let program = doc.add_object(stream);
    let id = add_embedded_font(&mut doc, "Garamond", 32, "FontFile", program);
    let font = SimpleFont::from_object_id(&doc, id).unwrap();

    // the decoder only rejects the bytes once they are inflated
    assert!(session.resolver().resolve(&font).is_none());
    assert_eq!(decoder.calls(), 1);
}

// --- equivalence ----------------------------------------------------------

#[test]
fn equivalence_properties() {
    let empty = EncodingOverride::new(Some("WinAnsiEncoding".to_string()));
    assert!(!has_real_differences(Some(&empty)));

    let same = EncodingOverride::new(Some("WinAnsiEncoding".to_string())).with_difference(65, "A");
    assert!(!has_real_differences(Some(&same)));

    let changed =
        EncodingOverride::new(Some("WinAnsiEncoding".to_string())).with_difference(65, "Agrave");
    assert!(has_real_differences(Some(&changed)));

    let unknown =
        EncodingOverride::new(Some("FancyEncoding".to_string())).with_difference(65, "A");
    assert!(has_real_differences(Some(&unknown)));

    let unknown_empty = EncodingOverride::new(Some("FancyEncoding".to_string()));
    assert!(!has_real_differences(Some(&unknown_empty)));
    assert!(!has_real_differences(None));
}

// --- standard fonts and widths -------------------------------------------

#[test]
fn helvetica_uses_builtin_metrics() {
    let session = FontSession::new();
    let doc = Document::with_version("1.5");
    let dict = type1_font("Helvetica");
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();

    assert!(resolver.is_standard(&font));
    assert_eq!(resolver.width_for_code(&font, u32::from(b'A')), Some(667.0));
    assert_eq!(resolver.width_for_code(&font, u32::from(b'i')), Some(222.0));
}

#[test]
fn standard_name_with_program_is_not_standard() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"type1");
    let id = add_embedded_font(&mut doc, "Helvetica", 32, "FontFile", program);
    let font = SimpleFont::from_object_id(&doc, id).unwrap();
    let resolver = session.resolver();

    assert!(!resolver.is_standard(&font));
    assert_eq!(resolver.width_for_code(&font, u32::from(b'A')), Some(600.0));
    // 'C' is in the Helvetica metrics but not in the program
    assert_eq!(resolver.width_for_code(&font, u32::from(b'C')), None);
}

#[test]
fn standard_font_with_restating_differences() {
    let session = FontSession::new();
    let doc = Document::with_version("1.5");
    let mut dict = type1_font("Courier-Bold");
    dict.set("Encoding", differences(Some("MacRomanEncoding"), 65, &["A", "B"]));
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();
    assert!(resolver.is_standard(&font));
    assert_eq!(resolver.width_for_code(&font, 66), Some(600.0));
}

#[test]
fn standard_font_with_real_differences() {
    let session = FontSession::new();
    let doc = Document::with_version("1.5");
    let mut dict = type1_font("Times-Roman");
    dict.set("Encoding", differences(Some("WinAnsiEncoding"), 65, &["Agrave"]));
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();
    assert!(!resolver.is_standard(&font));
    assert_eq!(resolver.width_for_code(&font, 65), None);
}

#[test]
fn width_through_differences_over_program() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"type1");
    let id = add_embedded_font(&mut doc, "Custom", 32, "FontFile", program);
    if let Ok(Object::Dictionary(dict)) = doc.get_object_mut(id) {
        dict.set("Encoding", differences(None, 1, &["B"]));
    }
    let font = SimpleFont::from_object_id(&doc, id).unwrap();
    let resolver = session.resolver();

    assert_eq!(resolver.width_for_code(&font, 1), Some(700.0));
    // no name for 65: the program's own encoding answers
    assert_eq!(resolver.width_for_code(&font, 65), Some(600.0));
}

#[test]
fn declared_widths_are_checked_against_resolved_widths() {
    let session = FontSession::new();
    let doc = Document::with_version("1.5");
    let mut dict = type1_font("Helvetica");
    dict.set("FirstChar", 32);
    dict.set("LastChar", 34);
    dict.set(
        "Widths",
        vec![Object::Integer(278), Object::Integer(300), Object::Integer(355)],
    );
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();

    assert_eq!(resolver.check_width_consistency(&font, 32), WidthConsistency::Consistent);
    assert_eq!(
        resolver.check_width_consistency(&font, 33),
        WidthConsistency::Mismatch {
            declared: 300.0,
            actual: 278.0
        }
    );
    assert_eq!(resolver.check_width_consistency(&font, 34), WidthConsistency::Consistent);
    assert_eq!(resolver.check_width_consistency(&font, 200), WidthConsistency::Unknown);
}

// --- unicode ---------------------------------------------------------------

#[test]
fn space_without_to_unicode_is_the_sentinel() {
    let session = FontSession::new();
    let doc = Document::with_version("1.5");
    let dict = type1_font("Times-Roman");
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();

    let unicode = resolver.unicode_for_code(&font, 32);
    assert_eq!(unicode.as_deref(), Some(KNOWN_GLYPH_SENTINEL));
    assert_eq!(
        resolver.unicode_status(&font, 32),
        UnicodeStatus::KnownGlyph("space".to_string())
    );
}

#[test]
fn accented_win_ansi_glyphs_are_known() {
    let session = FontSession::new();
    let doc = Document::with_version("1.5");
    let mut dict = type1_font("Helvetica");
    dict.set("Encoding", Object::Name(b"WinAnsiEncoding".to_vec()));
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();

    for (code, name) in [
        (0xE9, "eacute"),
        (0xC0, "Agrave"),
        (0xE7, "ccedilla"),
        (0xA9, "copyright"),
        (0xB0, "degree"),
        (0x80, "Euro"),
    ] {
        assert_eq!(
            resolver.unicode_status(&font, code),
            UnicodeStatus::KnownGlyph(name.to_string()),
            "{name}"
        );
        assert_eq!(resolver.unicode_for_code(&font, code).as_deref(), Some(KNOWN_GLYPH_SENTINEL));
    }
}

#[test]
fn to_unicode_entry_is_returned_verbatim() {
    let session = FontSession::new();
    let mut doc = Document::with_version("1.5");
    let cmap = doc.add_object(Stream::new(
        dictionary! {},
        b"/CIDInit /ProcSet findresource begin\n\
          1 begincodespacerange <00> <FF> endcodespacerange\n\
          2 beginbfchar <20> <0020> <41> <00C5> endbfchar\n\
          1 beginbfrange <61> <63> <0430> endbfrange\n\
          endcmap"
            .to_vec(),
    ));
    let mut dict = type1_font("Times-Roman");
    dict.set("ToUnicode", cmap);
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();

    assert_eq!(resolver.unicode_for_code(&font, 0x41).as_deref(), Some("\u{C5}"));
    assert_eq!(resolver.unicode_for_code(&font, 0x62).as_deref(), Some("\u{431}"));
    // a real space is distinguishable from the sentinel only through the status
    assert_eq!(
        resolver.unicode_status(&font, 0x20),
        UnicodeStatus::Mapped(" ".to_string())
    );
}

#[test]
fn unrecognized_glyph_has_no_unicode() {
    let session = FontSession::new();
    let doc = Document::with_version("1.5");
    let mut dict = type1_font("Custom");
    dict.set("Encoding", differences(None, 128, &["g128"]));
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();

    assert_eq!(resolver.unicode_for_code(&font, 128), None);
    assert_eq!(
        resolver.unicode_status(&font, 128),
        UnicodeStatus::UnknownGlyph("g128".to_string())
    );
}

#[test]
fn code_without_any_glyph_name() {
    let session = FontSession::new();
    let doc = Document::with_version("1.5");
    let dict = type1_font("Custom");
    let font = SimpleFont::new(&doc, &dict).unwrap();
    let resolver = session.resolver();

    assert_eq!(resolver.unicode_status(&font, 5), UnicodeStatus::NoGlyph);
    assert_eq!(font.warnings()[0].code, FontWarningCode::MissingGlyph);
}

#[test]
fn program_glyph_names_feed_unicode() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"type1");
    let id = add_embedded_font(&mut doc, "Custom", 4, "FontFile", program);
    let font = SimpleFont::from_object_id(&doc, id).unwrap();

    let unicode = session.resolver().unicode_for_code(&font, 66);
    assert_eq!(unicode.as_deref(), Some(KNOWN_GLYPH_SENTINEL));
}

// --- charset -----------------------------------------------------------------

#[test]
fn charset_is_an_ordered_unique_set() {
    let session = FontSession::new();
    let mut doc = Document::with_version("1.5");
    let descriptor = doc.add_object(dictionary! {
        "CharSet" => Object::String(b"/space/A/B/A/quoteright".to_vec(), StringFormat::Literal),
    });
    let mut dict = type1_font("ABCDEF+Minion");
    dict.set("FontDescriptor", descriptor);
    let font = SimpleFont::new(&doc, &dict).unwrap();

    let names: Vec<_> = session.resolver().descriptor_charset(&font).iter().cloned().collect();
    assert_eq!(names, ["A", "B", "quoteright", "space"]);
}

#[test]
fn malformed_charset_is_empty_not_an_error() {
    let session = FontSession::new();
    let mut doc = Document::with_version("1.5");
    let descriptor = doc.add_object(dictionary! {
        "CharSet" => Object::String(b"/A/B <zz>".to_vec(), StringFormat::Literal),
    });
    let mut dict = type1_font("ABCDEF+Minion");
    dict.set("FontDescriptor", descriptor);
    let font = SimpleFont::new(&doc, &dict).unwrap();

    assert!(session.resolver().descriptor_charset(&font).is_empty());
    assert_eq!(font.warnings()[0].code, FontWarningCode::MalformedCharSet);
}

// --- pages -------------------------------------------------------------------

#[test]
fn summaries_for_a_page() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"type1");
    let embedded = add_embedded_font(&mut doc, "ABCDEF+Garamond", 32, "FontFile", program);
    let helvetica = doc.add_object(type1_font("Helvetica"));
    let page = doc.add_object(dictionary! {
        "Type" => "Page",
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => embedded, "F2" => helvetica },
        },
    });

    let fonts = pdffont::pdffont_parse::page_fonts(&doc, page).unwrap();
    let summaries: Vec<_> = fonts.iter().map(|f| session.summarize(&f.font)).collect();
    assert_eq!(summaries[0].program_format, Some(ProgramFormat::Type1));
    assert!(summaries[0].subset);
    assert!(!summaries[0].standard);
    assert_eq!(summaries[1].program_format, None);
    assert!(summaries[1].standard);
}
