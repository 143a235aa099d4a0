use mbox_lexer_engine::{
    DocumentId, LineFold, LineKind, Lexer, RopeHost, Span, Style, TextSource, classify_document,
    lexing::Folder,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;
use common::{CountingHost, generate_mbox};

const DOC: DocumentId = DocumentId(7);

fn effective_kinds(lexer: &Lexer, doc: DocumentId, host: &RopeHost) -> Vec<LineKind> {
    (0..host.line_count())
        .map(|line| lexer.effective_kind(doc, line).unwrap_or(LineKind::Ordinary))
        .collect()
}

/// Fold levels for `lines` computed from a full classification of `host`.
fn reference_folds(host: &RopeHost, lines: std::ops::RangeInclusive<usize>) -> Vec<LineFold> {
    let full = classify_document(host);
    Folder::default().fold_lines(*lines.start(), *lines.end(), full.effective.len(), |line| {
        full.effective[line]
    })
}

/// Styles the edit, then the rest of the buffer from where that pass
/// stopped, the way a host restyles everything after the edit.
fn relex_after_edit(lexer: &mut Lexer, host: &RopeHost, edit: Span) {
    let lexed = lexer.classify(DOC, host, edit.start, edit.len(), Style::Ordinary);
    let resume = host.line_end(*lexed.lines.end());
    lexer.classify(DOC, host, resume, host.len() - resume, Style::Ordinary);
}

#[test]
fn single_line_edit_touches_only_enclosing_block() {
    let mut host = RopeHost::from(generate_mbox(100).as_str());
    assert_eq!(host.line_count(), 1001);

    let mut lexer = Lexer::default();
    lexer.classify(DOC, &host, 0, host.len(), Style::Ordinary);

    // "Subject: message 50" sits on line 501, inside the block 500..=502.
    let at = host.line_start(501) + 9;
    let edit = host.replace(at..at + 1, "M");

    let counting = CountingHost::new(&host);
    let lexed = lexer.classify(DOC, &counting, edit.start, edit.len(), Style::Ordinary);

    assert_eq!(lexed.lines, 500..=503);
    let block_bytes = host.line_end(503) - host.line_start(500);
    assert!(
        counting.reads() <= 2 * block_bytes,
        "read {} bytes for a {block_bytes} byte block",
        counting.reads()
    );
    assert!(counting.reads() < host.len() / 50);
}

#[test]
fn body_edit_stops_at_first_settled_line() {
    let mut host = RopeHost::from(generate_mbox(100).as_str());
    let mut lexer = Lexer::default();
    lexer.classify(DOC, &host, 0, host.len(), Style::Ordinary);

    let at = host.line_start(705);
    let edit = host.replace(at..at + 4, "Text");
    let counting = CountingHost::new(&host);
    let lexed = lexer.classify(DOC, &counting, edit.start, edit.len(), Style::Ordinary);

    assert_eq!(lexed.lines, 705..=705);
    assert_eq!(counting.reads(), 2 * host.line_span(705).len());
}

#[rstest]
#[case::break_header(11, 0..8, "Subjectx")]
#[case::double_colon(11, 0..7, "Subject:")]
#[case::delete_terminating_blank(13, 0..1, "")]
#[case::insert_blank_in_body(15, 0..0, "\n")]
#[case::type_boundary_into_body(16, 0..0, "\nFrom z Sun Dec 31 23:59:59 2023\nX-Note: typed\n")]
#[case::indent_boundary(20, 0..0, " ")]
#[case::join_messages(19, 0..1, "")]
fn incremental_matches_full_after_edit(
    #[case] line: usize,
    #[case] range: std::ops::Range<usize>,
    #[case] text: &str,
) {
    let mut host = RopeHost::from(generate_mbox(5).as_str());
    let mut lexer = Lexer::default();
    lexer.classify(DOC, &host, 0, host.len(), Style::Ordinary);

    let base = host.line_start(line);
    let edit = host.replace(base + range.start..base + range.end, text);
    relex_after_edit(&mut lexer, &host, edit);

    let full = classify_document(&host);
    assert_eq!(effective_kinds(&lexer, DOC, &host), full.effective);
    for (line, &raw) in full.raw.iter().enumerate() {
        assert_eq!(lexer.raw_kind(DOC, line), Some(raw), "raw kind of line {line}");
    }
}

#[test]
fn repeated_edits_stay_consistent() {
    let mut host = RopeHost::from(generate_mbox(20).as_str());
    let mut lexer = Lexer::default();
    lexer.classify(DOC, &host, 0, host.len(), Style::Ordinary);

    let edits: [(usize, &str); 6] = [
        (42, "Cc:"),
        (43, "\n"),
        (60, " "),
        (0, "x"),
        (95, "From q Mon Jan 01 00:00:00 2024\n"),
        (3, "Reply-To: a\n"),
    ];
    for (line, text) in edits {
        let at = host.line_start(line);
        let edit = host.replace(at..at, text);
        relex_after_edit(&mut lexer, &host, edit);
        assert_eq!(
            effective_kinds(&lexer, DOC, &host),
            classify_document(&host).effective,
            "after inserting {text:?} at line {line}"
        );
    }
}

#[test]
fn documents_are_isolated() {
    let mbox = RopeHost::from("From a Mon Jan 01 00:00:00 2020\nSubject: x\n\n");
    let prose = RopeHost::from("Subject: x\nFrom a Mon Jan 01 00:00:00 2020\n\n");
    let (first, second) = (DocumentId(1), DocumentId(2));

    let mut lexer = Lexer::default();
    lexer.classify(first, &mbox, 0, mbox.len(), Style::Ordinary);
    lexer.classify(second, &prose, 0, prose.len(), Style::Ordinary);

    assert_eq!(lexer.effective_kind(first, 0), Some(LineKind::MessageFrom));
    assert_eq!(lexer.effective_kind(second, 0), Some(LineKind::Ordinary));
    assert_eq!(lexer.effective_kind(second, 1), Some(LineKind::Ordinary));

    // Re-styling one document leaves the other's caches alone.
    lexer.classify(second, &prose, 0, 1, Style::Ordinary);
    assert_eq!(lexer.effective_kind(first, 1), Some(LineKind::CustomHeader));

    assert!(lexer.document_closed(second));
    assert_eq!(lexer.effective_kind(second, 0), None);
    assert_eq!(lexer.effective_kind(first, 0), Some(LineKind::MessageFrom));
    assert_eq!(lexer.open_documents().collect::<Vec<_>>(), vec![first]);
}

#[test]
fn revalidated_lines_before_request_can_be_restated() {
    let mut host = RopeHost::from("From a Mon Jan 01 00:00:00 2020\nSubject: x\n\nbody\n");
    let mut lexer = Lexer::default();
    lexer.classify(DOC, &host, 0, host.len(), Style::Ordinary);

    // Breaking the header invalidates the boundary line above it.
    let at = host.line_start(1) + 7;
    let edit = host.replace(at..at + 1, "");
    let lexed = lexer.classify(DOC, &host, edit.start, 1, Style::Ordinary);
    assert_eq!(lexed.lines, 0..=1);

    let restated = lexer.styles(DOC, &host, host.line_span(0));
    assert!(restated.styles.iter().all(|&s| s == Style::Ordinary));
}

#[test]
fn fold_after_edit_uses_fresh_classification() {
    let mut host = RopeHost::from(generate_mbox(3).as_str());
    let mut lexer = Lexer::default();
    lexer.classify(DOC, &host, 0, host.len(), Style::Ordinary);

    // Make the second message's boundary detached from its blank line.
    let at = host.line_start(9);
    let edit = host.replace(at..at, "x");
    lexer.classify(DOC, &host, edit.start, edit.len(), Style::Ordinary);

    let folds = lexer.fold(DOC, &host, host.line_start(9), 1, Style::Ordinary);
    // Line 10 is no longer a boundary, so line 9 stays nested.
    assert_eq!(folds[0].level.bits(), 0x401);
    assert_eq!(lexer.effective_kind(DOC, 10), Some(LineKind::Ordinary));
}

#[test]
fn fold_before_classify_sees_the_edit() {
    let mut host = RopeHost::from("From a Mon Jan 01 00:00:00 2020\nSubject: x\n\nbody\n");
    let mut lexer = Lexer::default();
    lexer.classify(DOC, &host, 0, host.len(), Style::Ordinary);

    // Dropping the space after the colon turns the header into prose.
    let at = host.line_start(1) + 8;
    let edit = host.replace(at..at + 1, "");
    let folds = lexer.fold(DOC, &host, edit.start, edit.len(), Style::Ordinary);

    assert_eq!(folds, reference_folds(&host, 1..=1));
    assert_eq!(lexer.effective_kind(DOC, 0), Some(LineKind::Ordinary));
    let boundary = lexer.fold(DOC, &host, 0, 1, Style::Ordinary);
    assert_eq!(boundary, reference_folds(&host, 0..=0));
    assert!(!boundary[0].level.header);
}

#[rstest]
#[case::break_header(11, 0..8, "Subjectx")]
#[case::delete_terminating_blank(13, 0..1, "")]
#[case::insert_blank_in_body(15, 0..0, "\n")]
#[case::type_boundary_into_body(16, 0..0, "\nFrom z Sun Dec 31 23:59:59 2023\nX-Note: typed\n")]
#[case::indent_boundary(20, 0..0, " ")]
#[case::join_messages(19, 0..1, "")]
fn fold_first_matches_full_after_edit(
    #[case] line: usize,
    #[case] range: std::ops::Range<usize>,
    #[case] text: &str,
) {
    let mut host = RopeHost::from(generate_mbox(5).as_str());
    let mut lexer = Lexer::default();
    lexer.classify(DOC, &host, 0, host.len(), Style::Ordinary);

    let base = host.line_start(line);
    let edit = host.replace(base + range.start..base + range.end, text);
    let folds = lexer.fold(DOC, &host, edit.start, edit.len(), Style::Ordinary);

    let first = folds.first().map(|f| f.line).unwrap();
    let last = folds.last().map(|f| f.line).unwrap();
    assert_eq!(folds, reference_folds(&host, first..=last));
}
