/// Why a candidate header block was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockDefect {
    /// The first line is not a message boundary line.
    MissingBoundary,
    /// The boundary line is not preceded by a blank line or document start.
    DetachedBoundary,
    /// The given line inside the block is neither a header nor a continuation.
    NonHeaderLine(usize),
    /// The block is not followed by a blank line or document end.
    Unterminated,
}

/// A candidate header block: the lines `begin..=end` of a maximal run of
/// non-ordinary, non-blank lines.
///
/// Transient: produced while validating and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderBlock {
    /// First line of the run (0-based).
    pub begin: usize,
    /// Last line of the run, inclusive.
    pub end: usize,
    /// The first failed validity condition, if any.
    pub defect: Option<BlockDefect>,
}

impl HeaderBlock {
    pub fn is_valid(&self) -> bool {
        self.defect.is_none()
    }

    pub fn contains(&self, line: usize) -> bool {
        (self.begin..=self.end).contains(&line)
    }
}
