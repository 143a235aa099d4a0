//! # Snapshot Testing Support
//!
//! Utilities for testing classification via snapshot assertions and
//! invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a classified document into stable `LineSnap`
//!   rows and renders them as a plain-text table for `insta` snapshots and
//!   the command-line `lines` mode
//! - **`invariants`**: Runtime checks that raw and effective classification
//!   agree with the header block rules

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{LineSnap, normalize, render};
