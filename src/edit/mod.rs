//! Transactional update engine.
//!
//! [`Editor::update`] runs one protected section per call:
//!
//! 1. For `create`, make sure the file exists (so there is something to lock)
//! 2. Acquire `<path>.lock`
//! 3. Read the current content fresh
//! 4. Compute the new content in memory ([`transform`])
//! 5. Commit via `<path>.tmp` + rename, or skip the write if nothing changed
//! 6. Release the lock, whatever happened in 3–5
//!
//! # Normalized replace
//!
//! When a `replace` search text only matches after normalization, the
//! committed file is the normalized whole file: CRLF line endings become LF
//! and trailing whitespace disappears from every line. Downstream tooling
//! relies on this canonicalization, so it is kept deliberately.

mod engine;
mod operation;
pub mod transform;


pub use engine::Editor;
pub use operation::{Change, Operation, UpdateOutcome};
pub use transform::normalize;
