use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use crate::infra::{contracts::SnapshotStore, error::AppError};

/// File-backed snapshot store: each key maps to `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(source) if source.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(AppError::SnapshotRead {
                key: key.to_owned(),
                source,
            }),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        fs::write(self.path_for(key), value).map_err(|source| AppError::SnapshotWrite {
            key: key.to_owned(),
            source,
        })
    }
}
