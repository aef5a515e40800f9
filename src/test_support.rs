use crate::config::LockConfig;
use crate::locks::lock_path_for;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A temp directory holding `MEMORY.md` with the given content.
pub(crate) fn create_target(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("MEMORY.md");
    std::fs::write(&target, content).unwrap();
    (temp_dir, target)
}

/// Lock tuning with millisecond waits so contention tests finish quickly.
pub(crate) fn fast_lock_config(max_attempts: u32) -> LockConfig {
    LockConfig {
        stale: Duration::from_secs(15),
        retry_delay: Duration::from_millis(1),
        retry_jitter: Duration::from_millis(2),
        max_attempts,
    }
}

/// Set the modification time of `path` to `age` in the past.
pub(crate) fn backdate(path: &Path, age: Duration) {
    let file = File::open(path).unwrap();
    file.set_modified(SystemTime::now() - age).unwrap();
}

/// Leave a marker behind as a crashed holder would, aged by `age`.
pub(crate) fn plant_marker(target: &Path, age: Duration) -> PathBuf {
    let lock_path = lock_path_for(target);
    std::fs::create_dir(&lock_path).unwrap();
    backdate(&lock_path, age);
    lock_path
}
