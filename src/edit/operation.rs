//! Operation descriptors and outcomes for the update engine.

use serde::Serialize;

/// A requested modification of a target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Ensure the file exists. With `content`, the content (terminated by a
    /// line break) becomes the whole file body.
    Create { content: Option<String> },

    /// Replace the first occurrence of `search` with `replacement`.
    ///
    /// An exact substring match is tried first. Failing that, both the file
    /// and `search` are normalized (CRLF and lone CR become LF, trailing
    /// whitespace is stripped from every line) and matched again. A match on
    /// the normalized view commits the **normalized whole file**, so every
    /// line of the file is re-formatted, not only the matched region.
    Replace { search: String, replacement: String },

    /// Append `content` on its own line(s), ending with a line break.
    Append { content: String },
}

impl Operation {
    /// Short name used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Create { .. } => "create",
            Operation::Replace { .. } => "replace",
            Operation::Append { .. } => "append",
        }
    }
}

/// What an update did to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Change {
    /// The file did not exist and was created.
    Created,
    /// An existing file's body was replaced by `create` content.
    Overwritten,
    /// The search text matched verbatim.
    ExactReplace,
    /// The search text matched only after normalization; the whole file was
    /// normalized.
    NormalizedReplace,
    /// Content was appended.
    Appended,
    /// Nothing needed to change; no write happened.
    Unchanged,
}

impl Change {
    /// Human-readable status line for this change.
    pub fn describe(self) -> &'static str {
        match self {
            Change::Created => "File created.",
            Change::Overwritten => "Content written.",
            Change::ExactReplace => "Exact match successful.",
            Change::NormalizedReplace => "Normalized match successful.",
            Change::Appended => "Append successful.",
            Change::Unchanged => "No changes needed.",
        }
    }
}

/// Result of a successful [`crate::edit::Editor::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpdateOutcome {
    /// Whether the file on disk changed (created or rewritten).
    pub modified: bool,
    pub change: Change,
}
