use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub storage: StorageConfig,
    pub profile: ProfileConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Well-known key the full thread collection is persisted under.
    pub snapshot_key: String,
    /// Overrides the XDG-derived data directory when set.
    pub data_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            snapshot_key: "nebula-threads-v2".to_owned(),
            data_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileConfig {
    /// Id of the user the host session acts as.
    pub current_user_id: String,
    /// Peer used when a fresh direct send names no recipient.
    pub default_peer_id: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            current_user_id: "1".to_owned(),
            default_peer_id: "2".to_owned(),
        }
    }
}
