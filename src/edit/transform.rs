//! Pure text transforms applied inside the protected section.
//!
//! Nothing here touches the filesystem; the engine feeds in the freshly read
//! content and commits whatever comes back.

use super::operation::{Change, Operation};
use crate::error::{EditError, Result};
use std::path::Path;

/// New file content computed from the current content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Staged {
    pub content: String,
    pub change: Change,
}

impl Staged {
    fn unchanged(current: &str) -> Self {
        Self {
            content: current.to_string(),
            change: Change::Unchanged,
        }
    }
}

/// Canonicalize line endings to `\n` and strip trailing whitespace per line.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Apply `op` to `current`, the content of `path` read under the lock.
///
/// `created` tells whether the engine created the file for this call.
pub fn apply(current: &str, op: &Operation, path: &Path, created: bool) -> Result<Staged> {
    match op {
        Operation::Create { content } => Ok(create(current, content.as_deref(), created)),
        Operation::Replace {
            search,
            replacement,
        } => replace(current, search, replacement, path),
        Operation::Append { content } => Ok(append(current, content)),
    }
}

fn create(current: &str, content: Option<&str>, created: bool) -> Staged {
    let body = match content.filter(|c| !c.is_empty()) {
        Some(content) => with_trailing_newline(content),
        None if created => {
            return Staged {
                content: current.to_string(),
                change: Change::Created,
            };
        }
        None => return Staged::unchanged(current),
    };

    let change = if created {
        Change::Created
    } else if body == current {
        Change::Unchanged
    } else {
        Change::Overwritten
    };
    Staged {
        content: body,
        change,
    }
}

fn replace(current: &str, search: &str, replacement: &str, path: &Path) -> Result<Staged> {
    if search.is_empty() {
        return Err(EditError::InvalidOperation(
            "replace requires a non-empty search text".to_string(),
        ));
    }

    if current.contains(search) {
        let content = current.replacen(search, replacement, 1);
        return Ok(finish(current, content, Change::ExactReplace));
    }

    let normalized_search = normalize(search);
    // Whitespace-only search text normalizes to nothing and would match anywhere.
    if normalized_search.is_empty() {
        return Err(EditError::NoMatch(path.to_path_buf()));
    }

    let normalized = normalize(current);
    if normalized.contains(&normalized_search) {
        let content = normalized.replacen(&normalized_search, replacement, 1);
        return Ok(finish(current, content, Change::NormalizedReplace));
    }

    Err(EditError::NoMatch(path.to_path_buf()))
}

fn append(current: &str, content: &str) -> Staged {
    if content.is_empty() {
        return Staged::unchanged(current);
    }

    let mut next = String::with_capacity(current.len() + content.len() + 2);
    next.push_str(current);
    if !next.is_empty() && !next.ends_with('\n') {
        next.push('\n');
    }
    next.push_str(content);
    if !content.ends_with('\n') {
        next.push('\n');
    }

    Staged {
        content: next,
        change: Change::Appended,
    }
}

fn finish(current: &str, content: String, change: Change) -> Staged {
    if content == current {
        Staged::unchanged(current)
    } else {
        Staged { content, change }
    }
}

fn with_trailing_newline(content: &str) -> String {
    if content.ends_with('\n') {
        content.to_string()
    } else {
        format!("{}\n", content)
    }
}
