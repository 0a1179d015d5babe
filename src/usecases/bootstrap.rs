use std::path::Path;

use chrono::Utc;

use crate::{
    infra::{
        self,
        error::AppError,
        repository::PersistedThreadRepository,
        seed::DefaultSeed,
        storage_layout::StorageLayout,
        store::FileSnapshotStore,
    },
    usecases::context::AppContext,
};

pub fn bootstrap(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let context = build_context(config_path)?;
    infra::logging::init(&context.config.logging)?;

    Ok(context)
}

fn build_context(config_path: Option<&Path>) -> Result<AppContext, AppError> {
    let config = infra::config::load(config_path)?;

    let layout = match &config.storage.data_dir {
        Some(data_dir) => StorageLayout::with_data_dir(data_dir.clone()),
        None => StorageLayout::resolve()?,
    };
    layout.ensure_dirs()?;

    let store = FileSnapshotStore::new(layout.data_dir.clone());
    let repository = PersistedThreadRepository::load(
        Box::new(store),
        config.storage.snapshot_key.clone(),
        &DefaultSeed,
        Utc::now(),
    )?;

    Ok(AppContext::new(config, repository))
}
