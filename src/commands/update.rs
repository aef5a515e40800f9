//! Implementation of the `memedit update` command.

use crate::cli::{OperationKind, UpdateArgs};
use memedit::config::Config;
use memedit::edit::{Editor, Operation, UpdateOutcome};
use memedit::error::{EditError, Result};
use memedit::locks::LockManager;
use serde::Serialize;
use std::path::Path;

/// Run one update against `args.file` and report the outcome on stdout.
pub(super) fn cmd_update(args: UpdateArgs, config: &Config) -> Result<()> {
    let op = build_operation(&args)?;
    let editor = Editor::new(LockManager::new(config.lock_config()));

    let outcome = editor.update(&args.file, &op)?;

    print!("{}", render_outcome(&args.file, outcome, args.json)?);
    Ok(())
}

/// Stdout text for a finished update, either status lines or a JSON document.
fn render_outcome(file: &Path, outcome: UpdateOutcome, json: bool) -> Result<String> {
    if json {
        let report = UpdateReport { file, outcome };
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| EditError::UserError(format!("failed to serialize outcome: {}", e)))?;
        return Ok(format!("{}\n", json));
    }

    if outcome.modified {
        Ok(format!(
            "Status: {}\nSuccess: {} updated safely.\n",
            outcome.change.describe(),
            file.display()
        ))
    } else {
        Ok("No changes needed.\n".to_string())
    }
}

#[derive(Serialize)]
struct UpdateReport<'a> {
    file: &'a Path,
    #[serde(flatten)]
    outcome: UpdateOutcome,
}

/// Turn parsed arguments into an operation, reading any `--*-file` inputs.
///
/// Missing required text is rejected here, before any lock is taken.
fn build_operation(args: &UpdateArgs) -> Result<Operation> {
    let old = text_input(args.old.as_deref(), args.old_file.as_deref())?;
    let new = text_input(args.new.as_deref(), args.new_file.as_deref())?;
    let content = text_input(args.content.as_deref(), args.content_file.as_deref())?;

    match args.operation {
        OperationKind::Replace => match (old, new) {
            (Some(search), Some(replacement)) => Ok(Operation::Replace {
                search,
                replacement,
            }),
            _ => Err(EditError::UserError(
                "replace requires --old and --new (or --old-file and --new-file)".to_string(),
            )),
        },
        OperationKind::Append => match content {
            Some(content) if !content.is_empty() => Ok(Operation::Append { content }),
            _ => Err(EditError::UserError(
                "append requires --content (or --content-file)".to_string(),
            )),
        },
        OperationKind::Create => Ok(Operation::Create { content }),
    }
}

/// An inline value, or the trimmed contents of `file` when given.
fn text_input(inline: Option<&str>, file: Option<&Path>) -> Result<Option<String>> {
    match file {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                EditError::UserError(format!(
                    "failed to read input file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            Ok(Some(text.trim().to_string()))
        }
        None => Ok(inline.map(str::to_string)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memedit::edit::Change;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(operation: OperationKind) -> UpdateArgs {
        UpdateArgs {
            file: PathBuf::from("MEMORY.md"),
            operation,
            old: None,
            new: None,
            content: None,
            content_file: None,
            old_file: None,
            new_file: None,
            json: false,
        }
    }

    #[test]
    fn replace_uses_inline_text() {
        let args = UpdateArgs {
            old: Some("foo".to_string()),
            new: Some("bar".to_string()),
            ..args(OperationKind::Replace)
        };

        assert_eq!(
            build_operation(&args).unwrap(),
            Operation::Replace {
                search: "foo".to_string(),
                replacement: "bar".to_string(),
            }
        );
    }

    #[test]
    fn replace_requires_both_texts() {
        let args = UpdateArgs {
            old: Some("foo".to_string()),
            ..args(OperationKind::Replace)
        };

        let err = build_operation(&args).unwrap_err();
        assert!(matches!(err, EditError::UserError(_)));
        assert!(err.to_string().contains("--old and --new"));
    }

    #[test]
    fn replace_allows_empty_replacement() {
        let args = UpdateArgs {
            old: Some("drop me".to_string()),
            new: Some(String::new()),
            ..args(OperationKind::Replace)
        };

        assert!(build_operation(&args).is_ok());
    }

    #[test]
    fn file_inputs_are_trimmed_and_take_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let old_file = temp_dir.path().join("old.txt");
        let new_file = temp_dir.path().join("new.txt");
        std::fs::write(&old_file, "\n  - old entry\n\n").unwrap();
        std::fs::write(&new_file, "- new entry\n").unwrap();

        let args = UpdateArgs {
            old: Some("ignored".to_string()),
            old_file: Some(old_file),
            new_file: Some(new_file),
            ..args(OperationKind::Replace)
        };

        assert_eq!(
            build_operation(&args).unwrap(),
            Operation::Replace {
                search: "- old entry".to_string(),
                replacement: "- new entry".to_string(),
            }
        );
    }

    #[test]
    fn missing_input_file_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let args = UpdateArgs {
            content_file: Some(temp_dir.path().join("absent.txt")),
            ..args(OperationKind::Append)
        };

        let err = build_operation(&args).unwrap_err();
        assert!(err.to_string().contains("failed to read input file"));
    }

    #[test]
    fn append_requires_content() {
        let err = build_operation(&args(OperationKind::Append)).unwrap_err();
        assert!(err.to_string().contains("append requires --content"));

        let empty = UpdateArgs {
            content: Some(String::new()),
            ..args(OperationKind::Append)
        };
        assert!(build_operation(&empty).is_err());
    }

    #[test]
    fn create_content_is_optional() {
        assert_eq!(
            build_operation(&args(OperationKind::Create)).unwrap(),
            Operation::Create { content: None }
        );

        let with_body = UpdateArgs {
            content: Some("# Memory".to_string()),
            ..args(OperationKind::Create)
        };
        assert_eq!(
            build_operation(&with_body).unwrap(),
            Operation::Create {
                content: Some("# Memory".to_string())
            }
        );
    }

    #[test]
    fn cmd_update_applies_operation() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("MEMORY.md");
        std::fs::write(&file, "a").unwrap();

        let args = UpdateArgs {
            file: file.clone(),
            content: Some("X".to_string()),
            ..args(OperationKind::Append)
        };
        cmd_update(args, &Config::default()).unwrap();

        assert_eq!(std::fs::read_to_string(&file).unwrap(), "a\nX\n");
    }

    #[test]
    fn render_outcome_prints_status_lines() {
        let modified = UpdateOutcome {
            modified: true,
            change: Change::ExactReplace,
        };
        assert_eq!(
            render_outcome(Path::new("MEMORY.md"), modified, false).unwrap(),
            "Status: Exact match successful.\nSuccess: MEMORY.md updated safely.\n"
        );

        let unchanged = UpdateOutcome {
            modified: false,
            change: Change::Unchanged,
        };
        assert_eq!(
            render_outcome(Path::new("MEMORY.md"), unchanged, false).unwrap(),
            "No changes needed.\n"
        );
    }

    #[test]
    fn render_outcome_as_json() {
        let outcome = UpdateOutcome {
            modified: true,
            change: Change::NormalizedReplace,
        };

        let text = render_outcome(Path::new("notes/MEMORY.md"), outcome, true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["file"], "notes/MEMORY.md");
        assert_eq!(value["modified"], true);
        assert_eq!(value["change"], "normalized_replace");
    }

    #[test]
    fn cmd_update_surfaces_no_match() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("MEMORY.md");
        std::fs::write(&file, "alpha\n").unwrap();

        let args = UpdateArgs {
            file: file.clone(),
            old: Some("zzz".to_string()),
            new: Some("y".to_string()),
            ..args(OperationKind::Replace)
        };
        let err = cmd_update(args, &Config::default()).unwrap_err();

        assert!(matches!(err, EditError::NoMatch(_)));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "alpha\n");
    }
}
