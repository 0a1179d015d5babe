//! Read-side queries over the thread repository.
//!
//! Ordering is owned by the repository (descending `last_activity`,
//! stable ties); these queries pass its answers through untouched so
//! every caller sees the same ordering contract.

use crate::{domain::thread::Thread, usecases::contracts::ThreadRepository};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListThreadsOutput {
    pub threads: Vec<Thread>,
}

pub fn list_threads(repository: &dyn ThreadRepository) -> ListThreadsOutput {
    ListThreadsOutput {
        threads: repository.list_threads(),
    }
}

/// Looks up one thread. Absence is an answer, not a failure; callers
/// (navigation, display) decide how to react.
pub fn get_thread(repository: &dyn ThreadRepository, thread_id: &str) -> Option<Thread> {
    repository.get_thread(thread_id)
}
