//! Infrastructure layer: adapters for config, logging, and the persisted
//! thread store.

pub mod clock;
pub mod config;
pub mod contracts;
pub mod error;
pub mod id;
pub mod logging;
pub mod repository;
pub mod seed;
pub mod storage_layout;
pub mod store;
