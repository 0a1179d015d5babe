use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
    #[error("failed to resolve storage paths: {details}")]
    StoragePathResolution { details: String },
    #[error("failed to create storage directory {path}: {source}")]
    StorageDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read snapshot under key {key}: {source}")]
    SnapshotRead {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write snapshot under key {key}: {source}")]
    SnapshotWrite {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode snapshot under key {key}: {source}")]
    SnapshotEncode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
