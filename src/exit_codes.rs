//! Exit code constants for the memedit CLI.
//!
//! - 0: Success (including "no changes needed")
//! - 1: User error (bad args, invalid config, malformed operation)
//! - 2: Replace text not found
//! - 3: Target file not found
//! - 4: Lock acquisition failure
//! - 5: Filesystem I/O failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or a malformed operation.
pub const USER_ERROR: i32 = 1;

/// Neither the exact nor the normalized search text was found.
pub const NO_MATCH: i32 = 2;

/// The target file does not exist and the operation requires it.
pub const NOT_FOUND: i32 = 3;

/// Lock acquisition failure: the retry budget was exhausted.
pub const LOCK_FAILURE: i32 = 4;

/// Read, write, rename, or directory creation failed.
pub const IO_FAILURE: i32 = 5;
