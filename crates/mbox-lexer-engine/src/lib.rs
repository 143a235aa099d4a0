pub mod host;
pub mod io;
pub mod lexing;
pub mod parsing;
pub mod style;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use host::{DocumentError, RopeHost, Span, TextSource};
pub use io::{IoError, read_mbox, write_mbox};
pub use lexing::{DocumentId, FoldLevel, Lexed, Lexer, LexerOptions, LineFold, StyledSpan};
pub use parsing::{LineKind, ParsedDoc, classify_document};
pub use style::{LEXER_NAME, Style};
