use serde::Serialize;

use crate::{
    host::{Span, TextSource},
    parsing::{LineKind, ParsedDoc},
};

/// One classified line in a stable, human-readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSnap {
    pub line: usize,
    pub span: (usize, usize),
    pub raw: &'static str,
    pub effective: &'static str,
    pub text: String,
}

/// Short tag for a line kind, used in snapshots.
pub fn tag(kind: LineKind) -> &'static str {
    match kind {
        LineKind::MessageFrom => "from",
        LineKind::CustomHeader => "header",
        LineKind::Continuation => "cont",
        LineKind::Blank => "blank",
        LineKind::Ordinary => "text",
    }
}

/// Extracts the line text without its terminator, truncating to `max`
/// characters with "..." suffix if needed.
pub fn preview<S: TextSource + ?Sized>(host: &S, sp: Span, max: usize) -> String {
    let bytes: Vec<u8> = (sp.start..sp.end).map(|at| host.byte_at(at)).collect();
    let text = String::from_utf8_lossy(&bytes);
    let text = text.trim_end_matches(['\r', '\n']);
    if text.chars().count() > max {
        let mut s: String = text.chars().take(max).collect();
        s.push_str("...");
        s
    } else {
        text.to_string()
    }
}

pub fn normalize<S: TextSource + ?Sized>(host: &S, doc: &ParsedDoc) -> Vec<LineSnap> {
    doc.raw
        .iter()
        .zip(&doc.effective)
        .enumerate()
        .map(|(line, (&raw, &effective))| {
            let span = host.line_span(line);
            LineSnap {
                line,
                span: (span.start, span.end),
                raw: tag(raw),
                effective: tag(effective),
                text: preview(host, span, 60),
            }
        })
        .collect()
}

/// Renders rows as `line raw effective text`, one per line.
pub fn render(rows: &[LineSnap]) -> String {
    rows.iter()
        .map(|r| {
            format!("{:<3} {:<6} {:<6} {}", r.line, r.raw, r.effective, r.text)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
