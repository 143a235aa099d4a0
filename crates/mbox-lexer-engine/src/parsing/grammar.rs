//! Whole-line recognizers for the three mbox line grammars.
//!
//! Every recognizer sees the full line including its terminator and must
//! match the entire line, not a prefix. Patterns are byte-oriented with
//! Unicode classes off, so `\s` is ASCII whitespace and non-UTF-8 bytes are
//! ordinary non-whitespace.

use std::sync::OnceLock;

use regex::bytes::Regex;

/// Literal every boundary line starts with.
pub const BOUNDARY_PREFIX: &[u8] = b"From ";

const BOUNDARY_PATTERN: &str = concat!(
    r"(?s-u)\AFrom\s+",
    r#"(?:"[^"]*"|\S+)\s+"#,
    r"(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun)\s+",
    r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+",
    r"(?:0?[1-9]|[12][0-9]|3[01])\s+",
    r"(?:[01][0-9]|2[0-4]):[0-5][0-9]:[0-5][0-9]\s+",
    r"[0-9]{4}(?:\s.*)?\z",
);

const HEADER_PATTERN: &str = r"(?s-u)\A[^\s:]+:\s.*\z";

const CONTINUATION_PATTERN: &str = r"(?s-u)\A\s+\S.*\z";

fn boundary_regex() -> &'static Regex {
    static BOUNDARY_REGEX: OnceLock<Regex> = OnceLock::new();
    BOUNDARY_REGEX.get_or_init(|| Regex::new(BOUNDARY_PATTERN).expect("Invalid boundary regex"))
}

fn header_regex() -> &'static Regex {
    static HEADER_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADER_REGEX.get_or_init(|| Regex::new(HEADER_PATTERN).expect("Invalid header regex"))
}

fn continuation_regex() -> &'static Regex {
    static CONTINUATION_REGEX: OnceLock<Regex> = OnceLock::new();
    CONTINUATION_REGEX
        .get_or_init(|| Regex::new(CONTINUATION_PATTERN).expect("Invalid continuation regex"))
}

/// `From <sender> <weekday> <month> <day> <hh:mm:ss> <year> [trailing]`.
pub fn is_boundary_line(line: &[u8]) -> bool {
    line.starts_with(BOUNDARY_PREFIX) && boundary_regex().is_match(line)
}

/// `<name>:<whitespace><anything>` where the name has no whitespace or colon.
pub fn is_header_line(line: &[u8]) -> bool {
    line.contains(&b':') && header_regex().is_match(line)
}

/// Leading whitespace followed by at least one non-whitespace byte.
pub fn is_continuation_line(line: &[u8]) -> bool {
    continuation_regex().is_match(line)
}

/// A bare line terminator, or the empty line at the end of the buffer.
pub fn is_blank_line(line: &[u8]) -> bool {
    matches!(line, b"" | b"\n" | b"\r\n")
}
