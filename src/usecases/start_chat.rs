//! Use case for opening a direct conversation with another user.
//!
//! Reuses an existing 1-to-1 thread between the two users when one
//! exists; otherwise creates an empty direct thread and persists it.

use crate::{
    domain::thread::Thread,
    usecases::contracts::{Clock, IdGenerator, RepositoryWriteError, ThreadRepository},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartChatCommand {
    pub current_user_id: String,
    pub peer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartChatError {
    /// A user cannot open a direct chat with themselves.
    SelfChat,
    /// The repository could not persist the new thread.
    PersistUnavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartChatOutcome {
    pub thread: Thread,
    /// Whether a new thread was created rather than reused.
    pub created: bool,
}

pub fn start_direct_chat(
    repository: &mut dyn ThreadRepository,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
    command: StartChatCommand,
) -> Result<StartChatOutcome, StartChatError> {
    if command.current_user_id == command.peer_id {
        return Err(StartChatError::SelfChat);
    }

    let existing = repository
        .list_threads()
        .into_iter()
        .find(|thread| thread.is_direct_between(&command.current_user_id, &command.peer_id));

    if let Some(thread) = existing {
        return Ok(StartChatOutcome {
            thread,
            created: false,
        });
    }

    let thread = Thread::direct(
        ids.new_id("thread"),
        &command.current_user_id,
        &command.peer_id,
        clock.now(),
    );

    let thread = repository
        .upsert_thread(thread)
        .map_err(|RepositoryWriteError::PersistUnavailable| StartChatError::PersistUnavailable)?;

    Ok(StartChatOutcome {
        thread,
        created: true,
    })
}
