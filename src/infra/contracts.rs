use chrono::{DateTime, Utc};

use crate::{domain::thread::Thread, infra::error::AppError};

/// Host-provided persistent key-value store holding serialized
/// snapshots. One key maps to one opaque string value; the repository
/// keeps the whole thread collection under a single well-known key.
pub trait SnapshotStore {
    /// Returns the stored value for `key`, or `None` when nothing has
    /// been persisted yet.
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Overwrites the full value under `key` synchronously. There is no
    /// partial-write protection; a crash mid-write can corrupt the
    /// stored value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// Supplies the initial thread collection used when no snapshot exists.
pub trait SeedProvider {
    fn initial_threads(&self, now: DateTime<Utc>) -> Vec<Thread>;
}
