//! # Incremental Lexing
//!
//! The host-facing side of the engine. A [`Lexer`] owns one pair of
//! classification caches per open document and answers the three host
//! requests: styling a byte range, folding a byte range, and releasing a
//! closed document.
//!
//! ## Modules
//!
//! - **`cache`**: Per-document raw and effective line caches
//! - **`driver`**: Decides which lines a request must reclassify and runs the
//!   classifier and block validator over them
//! - **`tokenizer`**: Per-byte style automaton seeded from effective kinds
//! - **`fold`**: Two-level fold assignment
//!
//! ## Request order
//!
//! After an edit the host sends `classify` or `fold` for the edited range
//! before anything later in the document is trusted again. Both relex the
//! lines they cover, so they may arrive in either order.

pub mod cache;
pub mod driver;
pub mod fold;
pub mod tokenizer;

use std::{collections::HashMap, ops::RangeInclusive};

use crate::{
    host::{Span, TextSource},
    parsing::LineKind,
    style::Style,
};

use cache::DocumentCaches;
pub use fold::{FoldLevel, Folder, LineFold};
pub use tokenizer::StyledSpan;

/// Opaque identity of a host document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Level reported for boundary lines; message contents sit one deeper.
    pub fold_base: u32,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            fold_base: FoldLevel::BASE,
        }
    }
}

/// Result of a `classify` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexed {
    /// Styles for exactly the requested bytes.
    pub styled: StyledSpan,
    /// Lines whose effective kind was recomputed. Bytes of these lines
    /// outside the request may have changed style; the host can re-fetch them
    /// with [`Lexer::styles`].
    pub lines: RangeInclusive<usize>,
}

/// Incremental mbox lexer holding per-document state.
#[derive(Debug, Default)]
pub struct Lexer {
    options: LexerOptions,
    documents: HashMap<DocumentId, DocumentCaches>,
}

impl Lexer {
    pub fn new(options: LexerOptions) -> Self {
        Self {
            options,
            documents: HashMap::new(),
        }
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// Styles `[start, start + length)` of `doc`, reclassifying whatever the
    /// range can affect.
    ///
    /// `initial_style` is the host's style before `start`. Every line is
    /// reseeded from its effective kind, so it is not needed.
    pub fn classify<S: TextSource + ?Sized>(
        &mut self,
        doc: DocumentId,
        host: &S,
        start: usize,
        length: usize,
        initial_style: Style,
    ) -> Lexed {
        log::trace!("classify {doc:?} at {start}+{length} from {initial_style:?}");
        let caches = self.documents.entry(doc).or_default();
        let pass = driver::relex(caches, host, start, length);
        let styled = styled_from_cache(caches, host, request_span(host, start, length));
        Lexed {
            styled,
            lines: pass.lines(),
        }
    }

    /// Styles for `range` straight from the effective cache, without
    /// reclassifying. Lines never classified style as `Ordinary`.
    pub fn styles<S: TextSource + ?Sized>(&self, doc: DocumentId, host: &S, range: Span) -> StyledSpan {
        match self.documents.get(&doc) {
            Some(caches) => styled_from_cache(caches, host, range),
            None => tokenizer::style_range(host, range, |_| LineKind::Ordinary),
        }
    }

    /// Fold levels for every line touched by `[start, start + length)`.
    pub fn fold<S: TextSource + ?Sized>(
        &mut self,
        doc: DocumentId,
        host: &S,
        start: usize,
        length: usize,
        initial_style: Style,
    ) -> Vec<LineFold> {
        log::trace!("fold {doc:?} at {start}+{length} from {initial_style:?}");
        let caches = self.documents.entry(doc).or_default();
        let line_count = host.line_count();
        let (first, last) = driver::affected_lines(host, start, length);
        // The last line's level depends on the line after it.
        let lookahead = (last + 1).min(line_count - 1);

        let from = host.line_start(first);
        let to = host.line_end(lookahead);
        driver::relex(caches, host, from, to - from);

        Folder::new(self.options.fold_base).fold_lines(first, last, line_count, |line| {
            caches.effective.get_or_ordinary(line)
        })
    }

    /// Releases the caches of `doc`. Returns whether it was open.
    pub fn document_closed(&mut self, doc: DocumentId) -> bool {
        let was_open = self.documents.remove(&doc).is_some();
        log::debug!("closed {doc:?} (open: {was_open})");
        was_open
    }

    /// Raw kind of `line` if it has been classified.
    pub fn raw_kind(&self, doc: DocumentId, line: usize) -> Option<LineKind> {
        self.documents.get(&doc)?.raw.get(line)
    }

    /// Effective kind of `line` if it has been classified.
    pub fn effective_kind(&self, doc: DocumentId, line: usize) -> Option<LineKind> {
        self.documents.get(&doc)?.effective.get(line)
    }

    /// Identities of every document holding caches, in no particular order.
    pub fn open_documents(&self) -> impl Iterator<Item = DocumentId> + '_ {
        self.documents.keys().copied()
    }
}

fn request_span<S: TextSource + ?Sized>(host: &S, start: usize, length: usize) -> Span {
    let start = start.min(host.len());
    Span {
        start,
        end: start.saturating_add(length).min(host.len()),
    }
}

fn styled_from_cache<S: TextSource + ?Sized>(
    caches: &DocumentCaches,
    host: &S,
    range: Span,
) -> StyledSpan {
    tokenizer::style_range(host, range, |line| caches.effective.get_or_ordinary(line))
}
