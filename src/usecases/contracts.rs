use chrono::{DateTime, Utc};

use crate::domain::thread::Thread;

/// Durable, process-wide store of threads.
pub trait ThreadRepository {
    /// All threads sorted descending by `last_activity`. Ties keep their
    /// stored order; no secondary key is defined.
    fn list_threads(&self) -> Vec<Thread>;

    /// The thread with the given id, or `None`. A missing thread is not
    /// an error; callers decide what absence means.
    fn get_thread(&self, thread_id: &str) -> Option<Thread>;

    /// Replaces the thread with a matching id or appends it, then
    /// persists the full collection synchronously.
    fn upsert_thread(&mut self, thread: Thread) -> Result<Thread, RepositoryWriteError>;
}

/// Errors a repository write can surface to usecases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryWriteError {
    /// The backing store rejected the snapshot write.
    PersistUnavailable,
}

/// Time source port so usecases stay deterministic under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Mints collision-resistant ids for new threads and messages.
pub trait IdGenerator {
    fn new_id(&self, prefix: &str) -> String;
}
