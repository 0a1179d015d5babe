use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    io,
    rc::Rc,
    sync::{Mutex, MutexGuard},
};

use chrono::{DateTime, Utc};

use crate::{
    infra::{contracts::SnapshotStore, error::AppError},
    usecases::contracts::{Clock, IdGenerator},
};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that mutate process environment variables.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// In-memory [`SnapshotStore`] fake. The entry map can be shared between
/// instances to simulate two sessions writing the same backing store.
#[derive(Default)]
pub struct MemorySnapshotStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes_fail: Cell<bool>,
}

impl MemorySnapshotStore {
    /// Builds a store over an existing entry map.
    pub fn sharing(entries: Rc<RefCell<HashMap<String, String>>>) -> Self {
        Self {
            entries,
            writes_fail: Cell::new(false),
        }
    }

    /// Handle to the backing entry map for inspection or external writes.
    pub fn entries(&self) -> Rc<RefCell<HashMap<String, String>>> {
        Rc::clone(&self.entries)
    }

    /// Makes every subsequent write fail, for error-path tests.
    pub fn fail_writes(&self) {
        self.writes_fail.set(true);
    }
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Deterministic id generator: `<prefix>-1`, `<prefix>-2`, ...
#[derive(Default)]
pub struct SequenceIds {
    counter: Cell<usize>,
}

impl IdGenerator for SequenceIds {
    fn new_id(&self, prefix: &str) -> String {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        format!("{prefix}-{next}")
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        if self.writes_fail.get() {
            return Err(AppError::SnapshotWrite {
                key: key.to_owned(),
                source: io::Error::new(io::ErrorKind::Other, "writes disabled by test"),
            });
        }

        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
