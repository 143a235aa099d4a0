//! Per-character sub-tokenizer.
//!
//! Each line is styled by a small automaton seeded with the line's effective
//! kind. The automaton is a transition table over (state, two-byte
//! lookahead); a hit styles both lookahead bytes with the current state and
//! moves to the next state for the rest of the line.

use crate::{
    host::{Span, TextSource},
    parsing::LineKind,
    style::Style,
};

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Style,
    pub lookahead: [u8; 2],
    pub to: Style,
}

/// Every state change the automaton can make. States not listed persist to
/// the end of the line.
pub const TRANSITIONS: [Transition; 2] = [
    // `From ` ends at the `m` of `From` and the space after it.
    Transition {
        from: Style::MessageFrom,
        lookahead: *b"m ",
        to: Style::MessageFromValue,
    },
    Transition {
        from: Style::CustomHeader,
        lookahead: *b": ",
        to: Style::CustomHeaderValue,
    },
];

/// Initial automaton state for a line of the given effective kind.
///
/// Continuation lines are part of a header value and start in that state.
pub fn seed(kind: LineKind) -> Style {
    match kind {
        LineKind::MessageFrom => Style::MessageFrom,
        LineKind::CustomHeader => Style::CustomHeader,
        LineKind::Continuation => Style::CustomHeaderValue,
        LineKind::Blank => Style::Blank,
        LineKind::Ordinary => Style::Ordinary,
    }
}

/// Looks up the transition taken from `state` on `lookahead`.
pub fn next_state(state: Style, lookahead: [u8; 2]) -> Option<Style> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == state && t.lookahead == lookahead)
        .map(|t| t.to)
}

/// Styles every byte of one line, terminator included.
pub fn tokenize_line(kind: LineKind, text: &[u8]) -> Vec<Style> {
    let mut styles = Vec::with_capacity(text.len());
    let mut state = seed(kind);
    let mut i = 0;

    while i < text.len() {
        let next = text
            .get(i + 1)
            .and_then(|&b| next_state(state, [text[i], b]));
        match next {
            Some(to) => {
                styles.extend([state, state]);
                state = to;
                i += 2;
            }
            None => {
                styles.push(state);
                i += 1;
            }
        }
    }

    styles
}

/// Styles for a contiguous byte range of the host buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledSpan {
    /// Offset of `styles[0]`.
    pub start: usize,
    pub styles: Vec<Style>,
}

impl StyledSpan {
    pub fn end(&self) -> usize {
        self.start + self.styles.len()
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end(),
        }
    }

    /// Style of the byte at `offset`, if it lies in this span.
    pub fn style_at(&self, offset: usize) -> Option<Style> {
        offset
            .checked_sub(self.start)
            .and_then(|i| self.styles.get(i))
            .copied()
    }

    /// Maximal runs of equal style, as `(span, style)` pairs.
    pub fn runs(&self) -> Vec<(Span, Style)> {
        let mut runs: Vec<(Span, Style)> = vec![];
        for (i, &style) in self.styles.iter().enumerate() {
            let at = self.start + i;
            match runs.last_mut() {
                Some((span, last)) if *last == style => span.end = at + 1,
                _ => runs.push((Span { start: at, end: at + 1 }, style)),
            }
        }
        runs
    }
}

/// Styles `range` of `host`, reading each line's effective kind from
/// `effective`. Lines are always tokenized from their first byte.
pub fn style_range<S, F>(host: &S, range: Span, effective: F) -> StyledSpan
where
    S: TextSource + ?Sized,
    F: Fn(usize) -> LineKind,
{
    let range = Span {
        start: range.start.min(host.len()),
        end: range.end.min(host.len()),
    };
    let mut out = StyledSpan {
        start: range.start,
        styles: Vec::with_capacity(range.len()),
    };
    if range.is_empty() {
        return out;
    }

    let first = host.line_of_offset(range.start);
    let last = host.line_of_offset(range.end - 1);
    for line in first..=last {
        let span = host.line_span(line);
        let Some(wanted) = span.intersect(range) else {
            continue;
        };
        let styles = tokenize_line(effective(line), &host.line_text(line));
        out.styles
            .extend_from_slice(&styles[wanted.start - span.start..wanted.end - span.start]);
    }

    out
}
