use crate::parsing::LineKind;

/// Per-line classification map for one document.
///
/// Entries are only ever overwritten, never removed; a line that was never
/// classified reads as `None`.
#[derive(Debug, Default, Clone)]
pub struct LineCache {
    kinds: Vec<Option<LineKind>>,
}

impl LineCache {
    pub fn get(&self, line: usize) -> Option<LineKind> {
        self.kinds.get(line).copied().flatten()
    }

    pub fn set(&mut self, line: usize, kind: LineKind) {
        if line >= self.kinds.len() {
            self.kinds.resize(line + 1, None);
        }
        self.kinds[line] = Some(kind);
    }

    /// Reads `line`, treating a missing entry as `Ordinary`.
    pub fn get_or_ordinary(&self, line: usize) -> LineKind {
        self.get(line).unwrap_or(LineKind::Ordinary)
    }

    pub fn contains(&self, line: usize) -> bool {
        self.get(line).is_some()
    }

    /// Number of lines with an entry.
    pub fn cached_lines(&self) -> usize {
        self.kinds.iter().filter(|k| k.is_some()).count()
    }
}

/// The two classification caches owned by one open document.
#[derive(Debug, Default, Clone)]
pub struct DocumentCaches {
    /// Grammar-only classification.
    pub raw: LineCache,
    /// Block-validated classification used for styling and folding.
    pub effective: LineCache,
    /// Lines `0..trusted_lines` are known to match the current text. Entries
    /// past it may be left over from before an edit.
    pub trusted_lines: usize,
}

impl DocumentCaches {
    /// Raw kind of `line` if it is cached and current.
    pub fn trusted_raw(&self, line: usize) -> Option<LineKind> {
        if line < self.trusted_lines {
            self.raw.get(line)
        } else {
            None
        }
    }
}
