//! Session-wide cache of decoded font programs.
//!
//! Every embedded font object is decoded at most once per session, however
//! many fonts point at it and however many threads resolve them. The first
//! caller for a key runs the decode; concurrent callers for the same key wait
//! for that result. Failures are cached too, so a broken program is never
//! decoded twice.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use crate::error::DecodeError;
use crate::program::SharedProgram;

/// Outcome of decoding one embedded program.
pub type CachedProgram = Result<SharedProgram, DecodeError>;

type Slot = Arc<OnceLock<CachedProgram>>;

/// Counters describing cache activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached entries, failed decodes included.
    pub entries: usize,
    /// Number of decodes run.
    pub decodes: usize,
    /// Number of lookups answered from an existing entry.
    pub hits: usize,
}

/// Decoded programs keyed by the identity of the object they came from.
///
/// The map lock is only held to find or create a key's slot. Decoding runs
/// outside it, so decodes of different keys proceed in parallel.
#[derive(Debug)]
pub struct ProgramCache<K> {
    slots: Mutex<HashMap<K, Slot>>,
    decodes: AtomicUsize,
    hits: AtomicUsize,
}

impl<K> Default for ProgramCache<K> {
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            decodes: AtomicUsize::new(0),
            hits: AtomicUsize::new(0),
        }
    }
}

impl<K: Eq + Hash> ProgramCache<K> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the entry for `key`, running `decode` if there is none yet.
    ///
    /// `decode` runs at most once per key for the lifetime of the cache.
    pub fn get_or_insert_with<F>(&self, key: K, decode: F) -> CachedProgram
    where
        F: FnOnce() -> CachedProgram,
    {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(key).or_default())
        };
        let mut decoded = false;
        let result = slot.get_or_init(|| {
            decoded = true;
            self.decodes.fetch_add(1, Ordering::Relaxed);
            decode()
        });
        if !decoded {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        result.clone()
    }

    /// The entry for `key`, if a decode for it has completed.
    pub fn get(&self, key: &K) -> Option<CachedProgram> {
        let slot = {
            let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.get(key).map(Arc::clone)
        }?;
        slot.get().cloned()
    }

    /// Number of keys with a slot, including decodes still running.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing was ever looked up.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the cache counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            decodes: self.decodes.load(Ordering::Relaxed),
            hits: self.hits.load(Ordering::Relaxed),
        }
    }
}
