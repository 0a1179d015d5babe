//! Snapshot-backed thread repository.
//!
//! The whole collection lives in memory and is rewritten to the backing
//! store as one serialized value on every upsert. There is no batching
//! and no partial-write protection; concurrent writers from other
//! processes resolve as last-write-wins.

use chrono::{DateTime, Utc};

use crate::{
    domain::thread::Thread,
    infra::{
        contracts::{SeedProvider, SnapshotStore},
        error::AppError,
    },
    usecases::contracts::{RepositoryWriteError, ThreadRepository},
};

/// Callback invoked with the fresh collection after an external-change
/// reload.
#[cfg_attr(not(test), allow(dead_code))]
pub type ReloadListener = Box<dyn Fn(&[Thread])>;

pub struct PersistedThreadRepository {
    store: Box<dyn SnapshotStore>,
    snapshot_key: String,
    threads: Vec<Thread>,
    reload_listeners: Vec<ReloadListener>,
}

impl PersistedThreadRepository {
    /// Loads the persisted collection, seeding and persisting the
    /// provider's fixtures when no snapshot exists yet.
    ///
    /// A snapshot that exists but fails to parse is recoverable: the
    /// condition is logged and the seed is used in memory. The corrupt
    /// value stays on disk until the next upsert overwrites it.
    pub fn load(
        store: Box<dyn SnapshotStore>,
        snapshot_key: impl Into<String>,
        seed: &dyn SeedProvider,
        now: DateTime<Utc>,
    ) -> Result<Self, AppError> {
        let snapshot_key = snapshot_key.into();
        let mut repository = Self {
            store,
            snapshot_key,
            threads: Vec::new(),
            reload_listeners: Vec::new(),
        };

        match repository.store.read(&repository.snapshot_key)? {
            Some(raw) => match parse_snapshot(&raw) {
                Ok(threads) => repository.threads = threads,
                Err(error) => {
                    tracing::warn!(
                        key = %repository.snapshot_key,
                        error = %error,
                        "snapshot is malformed, falling back to seed data"
                    );
                    repository.threads = seed.initial_threads(now);
                }
            },
            None => {
                repository.threads = seed.initial_threads(now);
                repository.persist()?;
                tracing::debug!(
                    key = %repository.snapshot_key,
                    threads = repository.threads.len(),
                    "seeded initial snapshot"
                );
            }
        }

        Ok(repository)
    }

    /// Re-reads the snapshot after an external storage-change signal and
    /// notifies subscribers. Unseen local state is replaced wholesale;
    /// last writer wins.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn reload(&mut self) -> Result<(), AppError> {
        if let Some(raw) = self.store.read(&self.snapshot_key)? {
            match parse_snapshot(&raw) {
                Ok(threads) => self.threads = threads,
                Err(error) => {
                    tracing::warn!(
                        key = %self.snapshot_key,
                        error = %error,
                        "reload found malformed snapshot, keeping current collection"
                    );
                    return Ok(());
                }
            }
        }

        for listener in &self.reload_listeners {
            listener(&self.threads);
        }

        Ok(())
    }

    /// Registers a callback fired after each successful [`reload`].
    /// Subscription is opt-in; nothing listens by default.
    ///
    /// [`reload`]: PersistedThreadRepository::reload
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn subscribe(&mut self, listener: ReloadListener) {
        self.reload_listeners.push(listener);
    }

    fn persist(&mut self) -> Result<(), AppError> {
        let raw =
            serde_json::to_string(&self.threads).map_err(|source| AppError::SnapshotEncode {
                key: self.snapshot_key.clone(),
                source,
            })?;

        self.store.write(&self.snapshot_key, &raw)
    }
}

fn parse_snapshot(raw: &str) -> Result<Vec<Thread>, serde_json::Error> {
    serde_json::from_str(raw)
}

impl ThreadRepository for PersistedThreadRepository {
    fn list_threads(&self) -> Vec<Thread> {
        let mut threads = self.threads.clone();
        // Stable sort: equal timestamps keep their stored order.
        threads.sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        threads
    }

    fn get_thread(&self, thread_id: &str) -> Option<Thread> {
        self.threads
            .iter()
            .find(|thread| thread.id == thread_id)
            .cloned()
    }

    fn upsert_thread(&mut self, thread: Thread) -> Result<Thread, RepositoryWriteError> {
        match self
            .threads
            .iter()
            .position(|existing| existing.id == thread.id)
        {
            Some(index) => self.threads[index] = thread.clone(),
            None => self.threads.push(thread.clone()),
        }

        self.persist().map_err(|error| {
            tracing::warn!(
                key = %self.snapshot_key,
                error = %error,
                "snapshot write failed"
            );
            RepositoryWriteError::PersistUnavailable
        })?;

        tracing::debug!(
            key = %self.snapshot_key,
            thread_id = %thread.id,
            threads = self.threads.len(),
            "persisted thread collection"
        );

        Ok(thread)
    }
}
