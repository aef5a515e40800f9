//! memedit: crash-tolerant concurrent editing of shared text files.
//!
//! Independent processes coordinate purely through the filesystem:
//!
//! - [`locks::LockManager`] grants exclusive access to a file by creating a
//!   `<file>.lock` directory, waits with jittered retries while another
//!   process holds it, and prunes markers left behind by crashed holders.
//! - [`edit::Editor`] runs a read-modify-write cycle under that lock and
//!   commits through `<file>.tmp` + rename, so readers only ever observe
//!   complete versions of the file.
//!
//! ```no_run
//! use memedit::config::LockConfig;
//! use memedit::edit::{Editor, Operation};
//! use memedit::locks::LockManager;
//! use std::path::Path;
//!
//! let editor = Editor::new(LockManager::new(LockConfig::default()));
//! let outcome = editor.update(
//!     Path::new("MEMORY.md"),
//!     &Operation::Append { content: "- shipped the release".to_string() },
//! )?;
//! assert!(outcome.modified);
//! # Ok::<(), memedit::error::EditError>(())
//! ```

pub mod config;
pub mod edit;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod locks;

#[cfg(test)]
mod test_support;
