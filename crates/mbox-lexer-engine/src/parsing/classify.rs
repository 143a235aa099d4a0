use crate::host::LineRef;

use super::grammar;

/// What a single line is.
///
/// The same domain is used for the raw (grammar-only) classification and
/// for the effective classification produced by block validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// A message boundary line (`From sender date`).
    MessageFrom,
    /// A `Name: value` header line.
    CustomHeader,
    /// An indented line continuing the previous header's value.
    Continuation,
    /// A bare line terminator.
    Blank,
    /// Anything else.
    Ordinary,
}

impl LineKind {
    /// Header or continuation: the lines allowed after a block's boundary line.
    pub fn is_header_body(self) -> bool {
        matches!(self, LineKind::CustomHeader | LineKind::Continuation)
    }

    /// Whether a continuation line may follow a line of this kind.
    pub fn accepts_continuation(self) -> bool {
        self.is_header_body()
    }
}

/// Classifies individual lines from their own text and the raw kind of the
/// line before.
///
/// This is phase 1 of block validation: the result depends on no other
/// context, so it can be cached per line and recomputed for edited lines only.
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line. `prev` is the raw kind of the preceding line, or
    /// `None` at the start of the document.
    ///
    /// First match wins: boundary, header, blank, continuation, ordinary.
    pub fn classify(&self, lr: &LineRef, prev: Option<LineKind>) -> LineKind {
        self.classify_bytes(&lr.text, prev)
    }

    pub fn classify_bytes(&self, text: &[u8], prev: Option<LineKind>) -> LineKind {
        if grammar::is_boundary_line(text) {
            LineKind::MessageFrom
        } else if grammar::is_header_line(text) {
            LineKind::CustomHeader
        } else if grammar::is_blank_line(text) {
            LineKind::Blank
        } else if prev.is_some_and(LineKind::accepts_continuation)
            && grammar::is_continuation_line(text)
        {
            LineKind::Continuation
        } else {
            LineKind::Ordinary
        }
    }
}
