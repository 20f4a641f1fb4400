//! Sharing one session between threads.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use common::{CountingDecoder, add_embedded_font, add_program, counting_session};
use lopdf::Document;
use pdffont::SimpleFont;

const THREADS: usize = 8;

#[test]
fn racing_fonts_decode_a_shared_program_once() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, Some("Type1C"), b"cff program");
    let ids: Vec<_> = (0..THREADS)
        .map(|i| add_embedded_font(&mut doc, &format!("Font{i}"), 32, "FontFile3", program))
        .collect();
    let fonts: Vec<_> = ids
        .iter()
        .map(|&id| SimpleFont::from_object_id(&doc, id).unwrap())
        .collect();

    let barrier = Barrier::new(THREADS);
    let programs: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = fonts
            .iter()
            .map(|font| {
                let session = &session;
                let barrier = &barrier;
                s.spawn(move || {
                    barrier.wait();
                    session.resolver().resolve(font).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(decoder.calls(), 1);
    assert!(programs.iter().all(|p| Arc::ptr_eq(p, &programs[0])));
    let stats = session.cache_stats();
    assert_eq!(stats.entries, 1);
    assert_eq!(stats.hits, THREADS - 1);
}

#[test]
fn one_font_shared_between_threads_resolves_once() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let program = add_program(&mut doc, None, b"type1");
    let id = add_embedded_font(&mut doc, "Garamond", 32, "FontFile", program);
    let font = SimpleFont::from_object_id(&doc, id).unwrap();

    let barrier = Barrier::new(THREADS);
    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                barrier.wait();
                let resolver = session.resolver();
                assert!(resolver.resolve(&font).is_some());
                assert_eq!(resolver.width_for_code(&font, 65), Some(600.0));
                assert!(!resolver.is_standard(&font));
            });
        }
    });

    assert_eq!(decoder.calls(), 1);
}

#[test]
fn distinct_programs_decode_independently() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let ids: Vec<_> = (0..THREADS)
        .map(|i| {
            let program = add_program(&mut doc, None, format!("program {i}").as_bytes());
            add_embedded_font(&mut doc, &format!("Font{i}"), 32, "FontFile", program)
        })
        .collect();
    let fonts: Vec<_> = ids
        .iter()
        .map(|&id| SimpleFont::from_object_id(&doc, id).unwrap())
        .collect();

    thread::scope(|s| {
        for font in &fonts {
            let session = &session;
            s.spawn(move || session.resolver().resolve(font));
        }
    });

    assert_eq!(decoder.calls(), THREADS);
    assert_eq!(session.cache_stats().entries, THREADS);
}

#[cfg(feature = "parallel")]
#[test]
fn resolve_all_parallel_matches_sequential() {
    let decoder = Arc::new(CountingDecoder::default());
    let session = counting_session(&decoder);
    let mut doc = Document::with_version("1.5");
    let shared = add_program(&mut doc, None, b"shared");
    let ids: Vec<_> = (0..32)
        .map(|i| add_embedded_font(&mut doc, &format!("Font{i}"), 32, "FontFile", shared))
        .collect();
    let fonts: Vec<_> = ids
        .iter()
        .map(|&id| SimpleFont::from_object_id(&doc, id).unwrap())
        .collect();

    let parallel = session.resolve_all_parallel(&fonts);
    let sequential = session.resolve_all(&fonts);
    assert_eq!(parallel.len(), 32);
    for (p, s) in parallel.iter().zip(&sequential) {
        assert!(Arc::ptr_eq(p.as_ref().unwrap(), s.as_ref().unwrap()));
    }
    assert_eq!(decoder.calls(), 1);
}
