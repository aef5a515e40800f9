//! Lock information structures.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Snapshot of an existing lock marker.
///
/// The marker directory carries no payload; everything here is derived from
/// its path and modification time.
#[derive(Debug, Clone, Serialize)]
pub struct LockInfo {
    /// The marker directory path (`<target>.lock`).
    pub lock_path: PathBuf,

    /// The file the marker protects.
    pub target: PathBuf,

    /// Marker modification time, used as its creation time.
    pub created_at: DateTime<Utc>,

    /// Age of the marker when the snapshot was taken.
    #[serde(rename = "age_ms", serialize_with = "serialize_millis")]
    pub age: Duration,

    /// Whether the age exceeds the configured staleness threshold.
    pub is_stale: bool,
}

impl LockInfo {
    /// Format the age as a human-readable string.
    pub fn age_string(&self) -> String {
        let secs = self.age.as_secs();
        let minutes = secs / 60;
        let hours = minutes / 60;

        if hours > 0 {
            format!("{}h {}m", hours, minutes % 60)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, secs % 60)
        } else {
            format!("{}.{:03}s", secs, self.age.subsec_millis())
        }
    }
}

fn serialize_millis<S: serde::Serializer>(age: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(age.as_millis()).unwrap_or(u64::MAX))
}

impl std::fmt::Display for LockInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (age: {}{})",
            self.lock_path.display(),
            self.age_string(),
            if self.is_stale { ", STALE" } else { "" }
        )
    }
}
