use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, LogConfig, ProfileConfig, StorageConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub storage: Option<FileStorageConfig>,
    pub profile: Option<FileProfileConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(storage) = self.storage {
            storage.merge_into(&mut config.storage);
        }

        if let Some(profile) = self.profile {
            profile.merge_into(&mut config.profile);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileStorageConfig {
    pub snapshot_key: Option<String>,
    pub data_dir: Option<PathBuf>,
}

impl FileStorageConfig {
    fn merge_into(self, config: &mut StorageConfig) {
        if let Some(snapshot_key) = self.snapshot_key {
            config.snapshot_key = snapshot_key;
        }

        if let Some(data_dir) = self.data_dir {
            config.data_dir = Some(data_dir);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileProfileConfig {
    pub current_user_id: Option<String>,
    pub default_peer_id: Option<String>,
}

impl FileProfileConfig {
    fn merge_into(self, config: &mut ProfileConfig) {
        if let Some(current_user_id) = self.current_user_id {
            config.current_user_id = current_user_id;
        }

        if let Some(default_peer_id) = self.default_peer_id {
            config.default_peer_id = default_peer_id;
        }
    }
}
