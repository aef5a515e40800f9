//! Implementation of the `memedit lock` subcommands.

use crate::cli::{LockClearArgs, LockStatusArgs};
use memedit::config::Config;
use memedit::error::{EditError, Result};
use memedit::locks::{LockInfo, LockManager};

pub(super) fn cmd_lock_status(args: LockStatusArgs, config: &Config) -> Result<()> {
    let manager = LockManager::new(config.lock_config());
    let info = manager.inspect(&args.file)?;

    if args.json {
        let json = serde_json::to_string_pretty(&info)
            .map_err(|e| EditError::UserError(format!("failed to serialize lock status: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    match info {
        None => println!("{} is not locked.", args.file.display()),
        Some(info) => {
            print_lock(&info);
            if info.is_stale {
                println!(
                    "Note: the lock exceeds the {} ms stale threshold and will be pruned by the next writer.",
                    config.lock_stale_ms
                );
            }
        }
    }
    Ok(())
}

pub(super) fn cmd_lock_clear(args: LockClearArgs, config: &Config) -> Result<()> {
    if !args.force {
        return Err(EditError::UserError(format!(
            "refusing to clear lock without --force flag.\n\n\
             Clearing a lock while its holder is still writing can lose that update.\n\
             Only clear locks if you are certain the lock holder has crashed.\n\n\
             To clear the lock, run:\n  memedit lock clear --file {} --force",
            args.file.display()
        )));
    }

    let manager = LockManager::new(config.lock_config());
    let cleared = manager.clear(&args.file)?;

    println!("Cleared lock:");
    print_lock(&cleared);
    Ok(())
}

fn print_lock(info: &LockInfo) {
    println!("  Target:     {}", info.target.display());
    println!("  Lock:       {}", info.lock_path.display());
    println!(
        "  Created:    {}",
        info.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!("  Age:        {}", info.age_string());
    if info.is_stale {
        println!("  Status:     STALE");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memedit::locks::lock_path_for;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn locked_file() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("MEMORY.md");
        std::fs::write(&file, "").unwrap();
        std::fs::create_dir(lock_path_for(&file)).unwrap();
        (temp_dir, file)
    }

    #[test]
    fn clear_requires_force() {
        let (_temp_dir, file) = locked_file();

        let err = cmd_lock_clear(
            LockClearArgs {
                file: file.clone(),
                force: false,
            },
            &Config::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("--force"));
        assert!(lock_path_for(&file).is_dir());
    }

    #[test]
    fn clear_with_force_removes_lock() {
        let (_temp_dir, file) = locked_file();

        cmd_lock_clear(
            LockClearArgs {
                file: file.clone(),
                force: true,
            },
            &Config::default(),
        )
        .unwrap();

        assert!(!lock_path_for(&file).exists());
    }

    #[test]
    fn clear_unlocked_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = cmd_lock_clear(
            LockClearArgs {
                file: temp_dir.path().join("MEMORY.md"),
                force: true,
            },
            &Config::default(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("no lock is held"));
    }

    #[test]
    fn status_does_not_modify_lock() {
        let (_temp_dir, file) = locked_file();

        for json in [false, true] {
            cmd_lock_status(
                LockStatusArgs {
                    file: file.clone(),
                    json,
                },
                &Config::default(),
            )
            .unwrap();
        }

        assert!(lock_path_for(&file).is_dir());
    }
}
