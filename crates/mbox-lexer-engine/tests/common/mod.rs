// Shared by several integration test binaries; each uses a different subset.
#![allow(dead_code)]

use std::cell::Cell;

use mbox_lexer_engine::{RopeHost, TextSource};

/// Host wrapper that counts every byte the engine reads.
pub struct CountingHost<'a> {
    inner: &'a RopeHost,
    reads: Cell<usize>,
}

impl<'a> CountingHost<'a> {
    pub fn new(inner: &'a RopeHost) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }
}

impl TextSource for CountingHost<'_> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn line_of_offset(&self, offset: usize) -> usize {
        self.inner.line_of_offset(offset)
    }

    fn line_start(&self, line: usize) -> usize {
        self.inner.line_start(line)
    }

    fn line_end(&self, line: usize) -> usize {
        self.inner.line_end(line)
    }

    fn byte_at(&self, offset: usize) -> u8 {
        self.reads.set(self.reads.get() + 1);
        self.inner.byte_at(offset)
    }
}

/// `messages` messages of ten lines each: boundary, two headers, blank,
/// five body lines, blank. Message `i` starts at line `10 * i`.
pub fn generate_mbox(messages: usize) -> String {
    let mut content = String::new();
    for i in 0..messages {
        content.push_str(&format!("From user{i}@example.com Mon Jan 01 00:00:00 2024\n"));
        content.push_str(&format!("Subject: message {i}\n"));
        content.push_str("To: list@example.com\n");
        content.push('\n');
        for j in 0..5 {
            content.push_str(&format!("Line {j} of message {i}.\n"));
        }
        content.push('\n');
    }
    content
}

pub fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.mbox",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}
