pub mod blocks;
pub mod classify;
pub mod grammar;
pub mod snapshot;

use crate::host::{TextSource, lines_with_spans};

use blocks::{BlockValidator, HeaderBlock};
pub use classify::{LineClassifier, LineKind};

/// Raw and effective classification of a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub raw: Vec<LineKind>,
    pub effective: Vec<LineKind>,
    pub blocks: Vec<HeaderBlock>,
}

/// Classifies and validates every line of `host` in one pass.
///
/// This is the non-incremental reference: the incremental lexer must always
/// agree with it.
pub fn classify_document<S: TextSource + ?Sized>(host: &S) -> ParsedDoc {
    let classifier = LineClassifier;
    let mut validator = BlockValidator::new(0, None);
    let mut raw = Vec::with_capacity(host.line_count());
    let mut prev = None;

    for lr in lines_with_spans(host, 0, host.line_count() - 1) {
        let kind = classifier.classify(&lr, prev);
        raw.push(kind);
        validator.push(kind);
        prev = Some(kind);
    }

    let validated = validator.finish(None);
    ParsedDoc {
        raw,
        effective: validated.effective,
        blocks: validated.blocks,
    }
}
