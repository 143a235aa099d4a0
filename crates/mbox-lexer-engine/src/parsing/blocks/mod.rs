//! # Block Validation
//!
//! Phase 2 of classification. Raw per-line kinds are grouped into candidate
//! header blocks and each block is accepted or downgraded as a whole.
//!
//! ## Modules
//!
//! - **`types`**: `HeaderBlock` and the `BlockDefect` that rejected it
//! - **`validate`**: `BlockValidator`, a push-based validator producing the
//!   effective kind of every line it sees
//!
//! ## Key Invariants
//!
//! - A block is a maximal run of lines that are neither `Ordinary` nor `Blank`
//! - A block is valid iff it opens with a boundary line that follows a blank
//!   line or document start, every later line is a header or continuation,
//!   and it is followed by a blank line or document end
//! - Lines of a valid block keep their raw kind; lines of an invalid block
//!   become `Ordinary`; blank and ordinary lines keep their kind
//! - Blank lines always end a block, they never sit inside one

pub mod types;
pub mod validate;

pub use types::{BlockDefect, HeaderBlock};
pub use validate::{BlockValidator, Validated};
