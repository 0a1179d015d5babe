use crate::infra::{config::AppConfig, repository::PersistedThreadRepository};

/// Everything a command handler needs, built once at process start and
/// passed by reference. There is no ambient global state; the repository
/// instance here is the single owner of the thread collection.
pub struct AppContext {
    pub config: AppConfig,
    pub repository: PersistedThreadRepository,
}

impl AppContext {
    pub fn new(config: AppConfig, repository: PersistedThreadRepository) -> Self {
        Self { config, repository }
    }
}
