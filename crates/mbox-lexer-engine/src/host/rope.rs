use xi_rope::Rope;

use super::{Span, TextSource};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Reference host buffer backed by an `xi_rope::Rope`.
///
/// Used by the command-line front-end and by tests. Edits go through
/// [`RopeHost::replace`], which returns the span a host would hand back to
/// the lexer as the affected range.
#[derive(Debug, Clone)]
pub struct RopeHost {
    buffer: Rope,
    /// Version counter incremented on each edit.
    version: u64,
}

impl RopeHost {
    /// Create a host buffer from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocumentError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from(text))
    }

    /// Get the buffer content as raw bytes (exact round-trip).
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    /// Get the current text content.
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Get the current version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Replace `range` with `text` and return the span of the inserted text.
    ///
    /// Out-of-range bounds are clamped to the buffer.
    pub fn replace(&mut self, range: std::ops::Range<usize>, text: &str) -> Span {
        let len = self.buffer.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.buffer.edit(start..end, text);
        self.version += 1;
        Span {
            start,
            end: start + text.len(),
        }
    }

    /// Slice the buffer to a cow string, clamping the range to the buffer.
    pub fn slice_to_cow(&self, range: std::ops::Range<usize>) -> std::borrow::Cow<'_, str> {
        let len = self.buffer.len();
        let start = range.start.min(len);
        let end = range.end.min(len).max(start);
        self.buffer.slice_to_cow(start..end)
    }

    fn last_line(&self) -> usize {
        self.buffer.line_of_offset(self.buffer.len())
    }
}

impl From<&str> for RopeHost {
    fn from(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            version: 0,
        }
    }
}

impl TextSource for RopeHost {
    fn len(&self) -> usize {
        self.buffer.len()
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        self.buffer.line_of_offset(offset.min(self.buffer.len()))
    }

    fn line_start(&self, line: usize) -> usize {
        self.buffer.offset_of_line(line.min(self.last_line() + 1))
    }

    fn line_end(&self, line: usize) -> usize {
        self.buffer
            .offset_of_line((line + 1).min(self.last_line() + 1))
    }

    fn byte_at(&self, offset: usize) -> u8 {
        if offset < self.buffer.len() {
            self.buffer.byte_at(offset)
        } else {
            0
        }
    }
}
