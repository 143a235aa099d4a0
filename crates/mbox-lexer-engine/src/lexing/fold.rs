use crate::parsing::LineKind;

/// Two-level fold levels: each message boundary line heads a fold that
/// covers everything up to the next boundary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldLevel {
    pub level: u32,
    pub header: bool,
}

impl FoldLevel {
    /// Conventional base level hosts start folding from.
    pub const BASE: u32 = 0x400;
    /// Bit set on the encoded level of a fold header line.
    pub const HEADER_FLAG: u32 = 0x2000;
    /// Bits holding the numeric level.
    pub const NUMBER_MASK: u32 = 0x0FFF;

    /// Encodes as `level | HEADER_FLAG` for header lines.
    pub fn bits(self) -> u32 {
        let flag = if self.header { Self::HEADER_FLAG } else { 0 };
        (self.level & Self::NUMBER_MASK) | flag
    }

    pub fn from_bits(bits: u32) -> Self {
        Self {
            level: bits & Self::NUMBER_MASK,
            header: bits & Self::HEADER_FLAG != 0,
        }
    }
}

/// Fold level assigned to one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFold {
    pub line: usize,
    pub level: FoldLevel,
}

/// Assigns fold levels from effective line kinds.
#[derive(Debug, Clone, Copy)]
pub struct Folder {
    base: u32,
}

impl Folder {
    pub fn new(base: u32) -> Self {
        Self { base }
    }

    /// Level for a line of kind `current` followed by a line of kind `next`
    /// (`None` at document end).
    pub fn fold_line(&self, current: LineKind, next: Option<LineKind>) -> FoldLevel {
        if current == LineKind::MessageFrom {
            FoldLevel {
                level: self.base,
                header: true,
            }
        } else if next == Some(LineKind::MessageFrom) {
            // Last line of a message: close the fold here.
            FoldLevel {
                level: self.base,
                header: false,
            }
        } else {
            FoldLevel {
                level: self.base + 1,
                header: false,
            }
        }
    }

    /// Folds `first..=last`, reading effective kinds through `effective`.
    /// `line_count` bounds the lookahead for the last line.
    pub fn fold_lines<F>(&self, first: usize, last: usize, line_count: usize, effective: F) -> Vec<LineFold>
    where
        F: Fn(usize) -> LineKind,
    {
        (first..=last)
            .map(|line| {
                let next = (line + 1 < line_count).then(|| effective(line + 1));
                LineFold {
                    line,
                    level: self.fold_line(effective(line), next),
                }
            })
            .collect()
    }
}

impl Default for Folder {
    fn default() -> Self {
        Self::new(FoldLevel::BASE)
    }
}
