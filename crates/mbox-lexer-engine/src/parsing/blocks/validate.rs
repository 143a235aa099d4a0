use crate::parsing::classify::LineKind;

use super::types::{BlockDefect, HeaderBlock};

#[derive(Debug, Clone, Copy)]
enum RunState {
    /// Between blocks. `after_separator` records whether the previous line
    /// was blank (or the document start), which a boundary line needs.
    Idle { after_separator: bool },
    /// Inside a candidate block starting at `begin`.
    Open {
        begin: usize,
        defect: Option<BlockDefect>,
    },
}

/// Result of validating a contiguous window of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    /// Line index of `effective[0]`.
    pub first_line: usize,
    /// Effective kind of every line pushed, in order.
    pub effective: Vec<LineKind>,
    /// Every candidate block closed in the window, valid or not.
    pub blocks: Vec<HeaderBlock>,
}

impl Validated {
    /// Effective kind of `line`, if it lies in the window.
    pub fn effective_at(&self, line: usize) -> Option<LineKind> {
        line.checked_sub(self.first_line)
            .and_then(|i| self.effective.get(i))
            .copied()
    }

    /// Last line of the window, or `None` if nothing was pushed.
    pub fn last_line(&self) -> Option<usize> {
        (!self.effective.is_empty()).then(|| self.first_line + self.effective.len() - 1)
    }
}

/// Push-based header block validator.
///
/// Feed raw kinds for consecutive lines with [`push`](Self::push), then call
/// [`finish`](Self::finish) with the kind of the line after the window.
/// Lines of an open block are held back until the block is closed, because
/// none of them can be decided before its terminator is seen.
pub struct BlockValidator {
    first_line: usize,
    next_line: usize,
    run: RunState,
    pending: Vec<LineKind>,
    effective: Vec<LineKind>,
    blocks: Vec<HeaderBlock>,
}

impl BlockValidator {
    /// Starts a window at `first_line`. `preceding` is the raw kind of the
    /// line before it, or `None` at document start.
    ///
    /// The window must not start inside a block: `preceding` should be
    /// `None`, `Blank` or `Ordinary`.
    pub fn new(first_line: usize, preceding: Option<LineKind>) -> Self {
        Self {
            first_line,
            next_line: first_line,
            run: RunState::Idle {
                after_separator: is_separator(preceding),
            },
            pending: vec![],
            effective: vec![],
            blocks: vec![],
        }
    }

    pub fn push(&mut self, raw: LineKind) {
        let line = self.next_line;
        self.next_line += 1;

        match raw {
            LineKind::Blank | LineKind::Ordinary => {
                self.close_run(Some(raw));
                self.effective.push(raw);
                self.run = RunState::Idle {
                    after_separator: raw == LineKind::Blank,
                };
            }
            _ => self.extend_run(line, raw),
        }
    }

    /// Closes the window. `following` is the raw kind of the line after the
    /// last one pushed, or `None` at document end.
    pub fn finish(mut self, following: Option<LineKind>) -> Validated {
        // EOF flush
        self.close_run(following);
        Validated {
            first_line: self.first_line,
            effective: self.effective,
            blocks: self.blocks,
        }
    }

    fn extend_run(&mut self, line: usize, raw: LineKind) {
        self.run = match self.run {
            RunState::Idle { after_separator } => {
                let defect = if raw != LineKind::MessageFrom {
                    Some(BlockDefect::MissingBoundary)
                } else if !after_separator {
                    Some(BlockDefect::DetachedBoundary)
                } else {
                    None
                };
                RunState::Open { begin: line, defect }
            }
            RunState::Open { begin, defect } => RunState::Open {
                begin,
                defect: defect.or_else(|| {
                    (!raw.is_header_body()).then_some(BlockDefect::NonHeaderLine(line))
                }),
            },
        };
        self.pending.push(raw);
    }

    fn close_run(&mut self, following: Option<LineKind>) {
        let prev = std::mem::replace(
            &mut self.run,
            RunState::Idle {
                after_separator: false,
            },
        );
        let RunState::Open { begin, defect } = prev else {
            self.run = prev; // nothing open, keep separator state
            return;
        };

        let defect = defect.or_else(|| {
            (!is_separator(following)).then_some(BlockDefect::Unterminated)
        });
        let block = HeaderBlock {
            begin,
            end: begin + self.pending.len() - 1,
            defect,
        };

        if block.is_valid() {
            self.effective.append(&mut self.pending);
        } else {
            log::trace!("downgrading lines {}..={}: {defect:?}", block.begin, block.end);
            self.effective
                .extend(std::iter::repeat_n(LineKind::Ordinary, self.pending.len()));
            self.pending.clear();
        }
        self.blocks.push(block);
    }
}

fn is_separator(kind: Option<LineKind>) -> bool {
    matches!(kind, None | Some(LineKind::Blank))
}
