//! Incremental driver: decides which lines an edit forces us to reclassify.
//!
//! Raw kinds depend on the line's own text and the previous line's raw kind;
//! effective kinds depend on the whole block a line belongs to plus the
//! lines just outside it. A pass therefore starts after the nearest cached
//! blank or ordinary line before the edit and runs until the edited range
//! is covered and the last block in it has seen its terminator.

use crate::{
    host::{TextSource, lines_with_spans},
    parsing::{LineClassifier, LineKind, blocks::BlockValidator},
};

use super::cache::DocumentCaches;

/// Lines reclassified and revalidated by one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pass {
    pub first_line: usize,
    pub last_line: usize,
}

impl Pass {
    pub fn lines(&self) -> std::ops::RangeInclusive<usize> {
        self.first_line..=self.last_line
    }
}

/// Line range covered by the byte range `[start, start + length)`.
pub fn affected_lines<S: TextSource + ?Sized>(
    host: &S,
    start: usize,
    length: usize,
) -> (usize, usize) {
    let len = host.len();
    let start = start.min(len);
    let end = start.saturating_add(length).min(len);
    let first = host.line_of_offset(start);
    let last = if end == start {
        first
    } else if end == len {
        // Reaching the end of the buffer includes the empty last line.
        host.line_of_offset(len)
    } else {
        host.line_of_offset(end - 1)
    };
    (first, last)
}

/// Walks back from `line` to the first line whose predecessor cannot carry
/// block state into it: document start, or a trusted blank or ordinary line.
///
/// Untrusted predecessors are walked over too, so a pass over a cold or
/// stale cache still sees every block from its start.
pub fn resolve_start_line(caches: &DocumentCaches, line: usize) -> usize {
    let mut start = line;
    while start > 0 {
        match caches.trusted_raw(start - 1) {
            Some(LineKind::Blank | LineKind::Ordinary) => break,
            _ => start -= 1,
        }
    }
    start
}

/// Reclassifies and revalidates the lines an edit of `[start, start + length)`
/// can affect, updating both caches.
pub fn relex<S: TextSource + ?Sized>(
    caches: &mut DocumentCaches,
    host: &S,
    start: usize,
    length: usize,
) -> Pass {
    let (first_requested, last_requested) = affected_lines(host, start, length);
    let first_line = resolve_start_line(caches, first_requested);
    let last_doc_line = host.line_count() - 1;

    let preceding = first_line.checked_sub(1).map(|l| caches.raw.get_or_ordinary(l));
    let classifier = LineClassifier;
    let mut validator = BlockValidator::new(first_line, preceding);
    let mut prev = preceding;
    let mut last_line = first_line;

    for lr in lines_with_spans(host, first_line, last_doc_line) {
        let kind = classifier.classify(&lr, prev);
        log::trace!("line {}: {kind:?}", lr.index);
        caches.raw.set(lr.index, kind);
        validator.push(kind);
        prev = Some(kind);
        last_line = lr.index;

        // A blank or ordinary line closes any open block, so nothing after
        // it can change the lines already pushed.
        if lr.index >= last_requested && matches!(kind, LineKind::Blank | LineKind::Ordinary) {
            break;
        }
    }

    let following = (last_line < last_doc_line).then(|| caches.raw.get_or_ordinary(last_line + 1));
    let validated = validator.finish(following);
    for (offset, &kind) in validated.effective.iter().enumerate() {
        caches.effective.set(validated.first_line + offset, kind);
    }
    // The request marks everything from its first line on as changed; only
    // what this pass recomputed is known to be current.
    caches.trusted_lines = last_line + 1;

    log::debug!(
        "relexed lines {first_line}..={last_line} for request {first_requested}..={last_requested}"
    );
    Pass {
        first_line,
        last_line,
    }
}
