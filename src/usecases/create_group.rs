//! Use case for creating a named group thread.

use std::collections::HashSet;

use crate::{
    domain::thread::Thread,
    usecases::contracts::{Clock, IdGenerator, RepositoryWriteError, ThreadRepository},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGroupCommand {
    pub creator_id: String,
    pub name: String,
    /// Other members; the creator is always included and need not be
    /// listed.
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateGroupError {
    /// Group name is empty after trimming whitespace.
    EmptyName,
    /// The participant list names the same user twice.
    DuplicateParticipant,
    /// A group needs at least one member besides the creator.
    NoOtherParticipants,
    /// The repository could not persist the new thread.
    PersistUnavailable,
}

pub fn create_group(
    repository: &mut dyn ThreadRepository,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
    command: CreateGroupCommand,
) -> Result<Thread, CreateGroupError> {
    let name = command.name.trim();
    if name.is_empty() {
        return Err(CreateGroupError::EmptyName);
    }

    let mut participants = vec![command.creator_id.clone()];
    participants.extend(
        command
            .participants
            .iter()
            .filter(|id| **id != command.creator_id)
            .cloned(),
    );

    let mut seen = HashSet::new();
    if !participants.iter().all(|id| seen.insert(id.clone())) {
        return Err(CreateGroupError::DuplicateParticipant);
    }

    if participants.len() < 2 {
        return Err(CreateGroupError::NoOtherParticipants);
    }

    let thread = Thread::group(ids.new_id("thread"), name, participants, clock.now());

    repository
        .upsert_thread(thread)
        .map_err(|RepositoryWriteError::PersistUnavailable| CreateGroupError::PersistUnavailable)
}
