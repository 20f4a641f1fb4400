//! Resolution sessions.

use lopdf::Document;
use pdffont_core::{
    CacheStats, FontOptions, FontWarning, ProgramCache, ProgramFormat, SharedProgram,
};
use pdffont_parse::{
    BackendError, DecoderSet, FontResolver, PageFont, ProgramKey, SimpleFont, page_fonts,
};

/// Session-wide font resolution state.
///
/// A session owns the [`ProgramCache`], so every embedded program object is
/// decoded at most once for as long as the session lives, across all the
/// fonts resolved through it. Entries are keyed per document, so one session
/// can serve several documents. Share one session between worker threads to
/// share the cache.
///
/// # Example
///
/// ```ignore
/// let session = FontSession::new();
/// for page in session.fonts_on_page(&doc, 1)? {
///     let width = session.resolver().width_for_code(&page.font, 65);
/// }
/// ```
#[derive(Debug, Default)]
pub struct FontSession {
    cache: ProgramCache<ProgramKey>,
    decoders: DecoderSet,
    options: FontOptions,
}

impl FontSession {
    /// A session with default options and decoders.
    pub fn new() -> Self {
        Self::default()
    }

    /// A session with the given options.
    pub fn with_options(options: FontOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Replace the decoders, returning the modified session.
    pub fn with_decoders(mut self, decoders: DecoderSet) -> Self {
        self.decoders = decoders;
        self
    }

    /// A resolver bound to this session's cache, decoders and options.
    pub fn resolver(&self) -> FontResolver<'_> {
        FontResolver::new(&self.cache, &self.decoders, &self.options)
    }

    pub fn options(&self) -> &FontOptions {
        &self.options
    }

    pub fn decoders(&self) -> &DecoderSet {
        &self.decoders
    }

    /// Snapshot of the program cache counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// The simple Type1 fonts of page `page_number` (1-based).
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Lopdf`] if the document has no such page, and
    /// [`BackendError::Parse`] if the page's resources are malformed.
    pub fn fonts_on_page<'d>(
        &self,
        doc: &'d Document,
        page_number: u32,
    ) -> Result<Vec<PageFont<'d>>, BackendError> {
        let page_id = doc
            .get_pages()
            .get(&page_number)
            .copied()
            .ok_or(lopdf::Error::PageNumberNotFound(page_number))?;
        page_fonts(doc, page_id)
    }

    /// Resolve the programs of many fonts, in order.
    pub fn resolve_all(&self, fonts: &[SimpleFont<'_>]) -> Vec<Option<SharedProgram>> {
        let resolver = self.resolver();
        tracing::debug!(fonts = fonts.len(), "resolving font batch");
        fonts.iter().map(|font| resolver.resolve(font)).collect()
    }

    /// Resolve the programs of many fonts on rayon's thread pool.
    ///
    /// The result is ordered like `fonts`. Fonts sharing a program object
    /// still decode it once.
    #[cfg(feature = "parallel")]
    pub fn resolve_all_parallel(&self, fonts: &[SimpleFont<'_>]) -> Vec<Option<SharedProgram>> {
        use rayon::prelude::*;

        let resolver = self.resolver();
        tracing::debug!(fonts = fonts.len(), "resolving font batch in parallel");
        fonts.par_iter().map(|font| resolver.resolve(font)).collect()
    }

    /// Resolve `font` and describe the outcome.
    pub fn summarize(&self, font: &SimpleFont<'_>) -> FontSummary {
        let resolver = self.resolver();
        let program = resolver.resolve(font);
        FontSummary {
            base_name: font.base_name().to_string(),
            subset: font.is_subset(),
            symbolic: font.is_symbolic(),
            program_format: program.as_ref().map(|p| p.format()),
            standard: resolver.is_standard(font),
            charset_size: resolver.descriptor_charset(font).len(),
            warnings: font.warnings(),
        }
    }
}

/// How one font resolved.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontSummary {
    /// `/BaseFont`.
    pub base_name: String,
    pub subset: bool,
    pub symbolic: bool,
    /// Format of the resolved program, if one was usable.
    pub program_format: Option<ProgramFormat>,
    /// Whether the built-in standard-14 metrics apply.
    pub standard: bool,
    /// Number of distinct names in the descriptor's `/CharSet`.
    pub charset_size: usize,
    pub warnings: Vec<FontWarning>,
}
