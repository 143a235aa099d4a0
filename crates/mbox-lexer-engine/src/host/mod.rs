//! # Host Interface
//!
//! The engine never owns document text. A host editor exposes its buffer
//! through [`TextSource`], a handful of read-only accessors over byte offsets
//! and line indices, and the engine pulls exactly the bytes it needs.
//!
//! Line indices are 0-based. A buffer of `n` line terminators has `n + 1`
//! lines; the last one is empty when the buffer ends with a terminator.
//!
//! ## Modules
//!
//! - **`span`**: `Span`, a half-open byte range
//! - **`rope`**: `RopeHost`, a reference host over an `xi_rope::Rope`

pub mod rope;
pub mod span;

pub use rope::{DocumentError, RopeHost};
pub use span::Span;

/// Read-only accessors a host buffer provides to the engine.
///
/// Implementations must be consistent with each other: `line_start(l)` is
/// the offset of the first byte of line `l`, `line_end(l)` the offset just
/// past its terminator (equal to `line_start(l + 1)`), and
/// `line_of_offset(line_start(l)) == l`.
pub trait TextSource {
    /// Total length of the buffer in bytes.
    fn len(&self) -> usize;

    /// Line containing `offset`. Offsets past the end map to the last line.
    fn line_of_offset(&self, offset: usize) -> usize;

    /// Byte offset where `line` starts.
    fn line_start(&self, line: usize) -> usize;

    /// Byte offset just past the terminator of `line`.
    fn line_end(&self, line: usize) -> usize;

    /// The byte at `offset`. Out-of-range reads return `0`.
    fn byte_at(&self, offset: usize) -> u8;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lines, including the empty line after a final terminator.
    fn line_count(&self) -> usize {
        self.line_of_offset(self.len()) + 1
    }

    /// Full span of `line`, terminator included.
    fn line_span(&self, line: usize) -> Span {
        Span {
            start: self.line_start(line),
            end: self.line_end(line),
        }
    }

    /// Copies the bytes of `line`, terminator included.
    fn line_text(&self, line: usize) -> Vec<u8> {
        let span = self.line_span(line);
        (span.start..span.end).map(|at| self.byte_at(at)).collect()
    }
}

/// A reference to a single line of the host buffer with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// 0-based line index.
    pub index: usize,
    /// Byte span of this line in the buffer (includes terminator if present).
    pub span: Span,
    /// The line bytes, terminator included.
    pub text: Vec<u8>,
}

/// Returns an iterator over lines `first..=last` with their byte spans.
///
/// Terminators are preserved; the grammars match whole lines including them.
pub fn lines_with_spans<S: TextSource + ?Sized>(
    host: &S,
    first: usize,
    last: usize,
) -> impl Iterator<Item = LineRef> + '_ {
    (first..=last).map(move |index| LineRef {
        index,
        span: host.line_span(index),
        text: host.line_text(index),
    })
}
