//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod contracts;
pub mod context;
pub mod create_group;
pub mod list_threads;
pub mod send_media;
pub mod send_message;
pub mod start_chat;
