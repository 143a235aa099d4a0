use crate::parsing::{LineKind, ParsedDoc};

/// Validates classifier output invariants.
///
/// Asserts that:
/// - Raw and effective maps cover the same lines
/// - Every line of a valid block keeps its raw kind, and the block opens
///   with a boundary line followed only by headers and continuations
/// - Every other non-blank line is effectively `Ordinary`
/// - Blank lines stay blank and never sit inside a block
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &ParsedDoc) {
    assert_eq!(
        doc.raw.len(),
        doc.effective.len(),
        "raw and effective classification differ in length"
    );

    for b in &doc.blocks {
        assert!(
            b.begin <= b.end && b.end < doc.raw.len(),
            "block out of bounds: {b:?} (lines: {})",
            doc.raw.len()
        );
        for line in b.begin..=b.end {
            assert_ne!(
                doc.raw[line],
                LineKind::Blank,
                "blank line {line} inside block {b:?}"
            );
        }
        if b.is_valid() {
            assert_eq!(doc.raw[b.begin], LineKind::MessageFrom, "block {b:?}");
            assert!(
                doc.raw[b.begin + 1..=b.end]
                    .iter()
                    .all(|k| k.is_header_body()),
                "non-header line inside valid block {b:?}"
            );
        }
    }

    for (line, (&raw, &effective)) in doc.raw.iter().zip(&doc.effective).enumerate() {
        let in_valid_block = doc.blocks.iter().any(|b| b.is_valid() && b.contains(line));
        let expected = if in_valid_block || raw == LineKind::Blank {
            raw
        } else {
            LineKind::Ordinary
        };
        assert_eq!(
            effective, expected,
            "line {line}: raw {raw:?} has effective {effective:?}"
        );
    }
}
