//! Use case for sending a text message into a thread.
//!
//! Orchestrates the full append pipeline: classify the text, build the
//! message, append it to the target thread (creating a fresh direct
//! thread when none exists yet), and persist the updated thread.

use chrono::{DateTime, Utc};

use crate::{
    domain::{classifier::classify, message::Message, thread::Thread},
    usecases::contracts::{Clock, IdGenerator, RepositoryWriteError, ThreadRepository},
};

/// Command to send a text message.
///
/// `thread` is the already-fetched target, or `None` to start a fresh
/// direct conversation with `peer_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendTextCommand {
    pub thread: Option<Thread>,
    pub sender_id: String,
    pub peer_id: Option<String>,
    pub text: String,
}

/// Domain-level errors for the send-text operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Message text is empty after trimming whitespace.
    EmptyMessage,
    /// A fresh direct send named no peer.
    MissingPeer,
    /// A fresh direct send named the sender as its own peer.
    SelfChat,
    /// The sender is not a participant of the target thread.
    SenderNotParticipant,
    /// The repository could not persist the updated thread.
    PersistUnavailable,
}

/// Sends a text message and returns the updated thread.
///
/// The text is classified through the lexicon classifier and the thread's
/// derived fields (`last_activity`, aggregate sentiment) are recomputed
/// by the append. Empty text is rejected here even though upstream
/// surfaces validate it too; the append primitive refuses to record
/// blank messages.
pub fn send_text_message(
    repository: &mut dyn ThreadRepository,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
    command: SendTextCommand,
) -> Result<Thread, SendMessageError> {
    let text = command.text.trim();
    if text.is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    let now = clock.now();
    let mut thread = resolve_target_thread(
        command.thread,
        &command.sender_id,
        command.peer_id.as_deref(),
        ids,
        now,
    )?;

    let message = Message {
        id: ids.new_id("msg"),
        thread_id: thread.id.clone(),
        sender_id: command.sender_id,
        content: text.to_owned(),
        timestamp: now,
        sentiment: classify(text),
        media_url: None,
    };

    thread.append_message(message);
    repository
        .upsert_thread(thread)
        .map_err(map_repository_error)
}

pub(super) fn resolve_target_thread(
    thread: Option<Thread>,
    sender_id: &str,
    peer_id: Option<&str>,
    ids: &dyn IdGenerator,
    now: DateTime<Utc>,
) -> Result<Thread, SendMessageError> {
    match thread {
        Some(thread) => {
            if !thread.has_participant(sender_id) {
                return Err(SendMessageError::SenderNotParticipant);
            }
            Ok(thread)
        }
        None => {
            let peer = peer_id
                .filter(|peer| !peer.trim().is_empty())
                .ok_or(SendMessageError::MissingPeer)?;
            if peer == sender_id {
                return Err(SendMessageError::SelfChat);
            }
            Ok(Thread::direct(ids.new_id("thread"), sender_id, peer, now))
        }
    }
}

pub(super) fn map_repository_error(error: RepositoryWriteError) -> SendMessageError {
    match error {
        RepositoryWriteError::PersistUnavailable => SendMessageError::PersistUnavailable,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        domain::sentiment::Sentiment,
        test_support::{FixedClock, SequenceIds},
    };

    struct StubRepository {
        upserted: Vec<Thread>,
        fail_writes: bool,
    }

    impl StubRepository {
        fn new() -> Self {
            Self {
                upserted: Vec::new(),
                fail_writes: false,
            }
        }

        fn failing() -> Self {
            Self {
                upserted: Vec::new(),
                fail_writes: true,
            }
        }
    }

    impl ThreadRepository for StubRepository {
        fn list_threads(&self) -> Vec<Thread> {
            self.upserted.clone()
        }

        fn get_thread(&self, thread_id: &str) -> Option<Thread> {
            self.upserted
                .iter()
                .find(|thread| thread.id == thread_id)
                .cloned()
        }

        fn upsert_thread(&mut self, thread: Thread) -> Result<Thread, RepositoryWriteError> {
            if self.fail_writes {
                return Err(RepositoryWriteError::PersistUnavailable);
            }
            self.upserted.push(thread.clone());
            Ok(thread)
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap())
    }

    fn fresh_send(text: &str) -> SendTextCommand {
        SendTextCommand {
            thread: None,
            sender_id: "1".to_owned(),
            peer_id: Some("2".to_owned()),
            text: text.to_owned(),
        }
    }

    #[test]
    fn rejects_empty_message_text() {
        let mut repository = StubRepository::new();

        let result = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            fresh_send(""),
        );

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert!(repository.upserted.is_empty());
    }

    #[test]
    fn rejects_whitespace_only_message() {
        let mut repository = StubRepository::new();

        let result = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            fresh_send("   \n\t  "),
        );

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
    }

    #[test]
    fn creates_direct_thread_when_none_exists() {
        let mut repository = StubRepository::new();

        let thread = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            fresh_send("This is amazing"),
        )
        .expect("send must succeed");

        assert_eq!(thread.participants, vec!["1", "2"]);
        assert_eq!(thread.messages.len(), 1);
        assert_eq!(thread.messages[0].sentiment, Sentiment::Positive);
        assert_eq!(thread.sentiment, Sentiment::Positive);
        assert_eq!(repository.upserted.len(), 1);
    }

    #[test]
    fn classifies_text_before_attaching_to_message() {
        let mut repository = StubRepository::new();

        let thread = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            fresh_send("this is bad and terrible"),
        )
        .expect("send must succeed");

        assert_eq!(thread.messages[0].sentiment, Sentiment::Negative);
    }

    #[test]
    fn appends_to_existing_thread_and_recomputes_derived_fields() {
        let mut repository = StubRepository::new();
        let ids = SequenceIds::default();
        let existing = Thread::direct(
            "thread-7",
            "1",
            "2",
            Utc.with_ymd_and_hms(2026, 8, 29, 9, 0, 0).unwrap(),
        );

        let thread = send_text_message(
            &mut repository,
            &ids,
            &clock(),
            SendTextCommand {
                thread: Some(existing),
                sender_id: "2".to_owned(),
                peer_id: None,
                text: "wonderful".to_owned(),
            },
        )
        .expect("send must succeed");

        assert_eq!(thread.id, "thread-7");
        assert_eq!(thread.messages.len(), 1);
        assert_eq!(thread.last_activity, clock().0);
        assert_eq!(thread.sentiment, Sentiment::Positive);
    }

    #[test]
    fn trims_text_before_recording() {
        let mut repository = StubRepository::new();

        let thread = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            fresh_send("  hello there  "),
        )
        .expect("send must succeed");

        assert_eq!(thread.messages[0].content, "hello there");
    }

    #[test]
    fn message_belongs_to_its_thread() {
        let mut repository = StubRepository::new();

        let thread = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            fresh_send("hello"),
        )
        .expect("send must succeed");

        assert_eq!(thread.messages[0].thread_id, thread.id);
        assert_eq!(thread.messages[0].sender_id, "1");
    }

    #[test]
    fn rejects_fresh_send_without_peer() {
        let mut repository = StubRepository::new();

        let result = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            SendTextCommand {
                thread: None,
                sender_id: "1".to_owned(),
                peer_id: None,
                text: "hello".to_owned(),
            },
        );

        assert_eq!(result, Err(SendMessageError::MissingPeer));
    }

    #[test]
    fn rejects_fresh_send_to_self() {
        let mut repository = StubRepository::new();

        let result = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            SendTextCommand {
                thread: None,
                sender_id: "1".to_owned(),
                peer_id: Some("1".to_owned()),
                text: "hello".to_owned(),
            },
        );

        assert_eq!(result, Err(SendMessageError::SelfChat));
    }

    #[test]
    fn rejects_sender_outside_participant_list() {
        let mut repository = StubRepository::new();
        let existing = Thread::direct("thread-7", "1", "2", clock().0);

        let result = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            SendTextCommand {
                thread: Some(existing),
                sender_id: "99".to_owned(),
                peer_id: None,
                text: "hello".to_owned(),
            },
        );

        assert_eq!(result, Err(SendMessageError::SenderNotParticipant));
        assert!(repository.upserted.is_empty());
    }

    #[test]
    fn end_to_end_first_send_through_a_real_repository() {
        use crate::{
            infra::{repository::PersistedThreadRepository, seed::EmptySeed},
            test_support::MemorySnapshotStore,
        };

        let mut repository = PersistedThreadRepository::load(
            Box::new(MemorySnapshotStore::default()),
            "test-threads",
            &EmptySeed,
            clock().0,
        )
        .expect("repository must load");

        let thread = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            SendTextCommand {
                thread: None,
                sender_id: "u1".to_owned(),
                peer_id: Some("2".to_owned()),
                text: "This is amazing".to_owned(),
            },
        )
        .expect("send must succeed");

        assert_eq!(thread.messages.len(), 1);
        assert_eq!(thread.messages[0].sentiment, Sentiment::Positive);
        assert_eq!(thread.sentiment, Sentiment::Positive);

        let listed = repository.list_threads();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], thread);
    }

    #[test]
    fn maps_persist_failure() {
        let mut repository = StubRepository::failing();

        let result = send_text_message(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            fresh_send("hello"),
        );

        assert_eq!(result, Err(SendMessageError::PersistUnavailable));
    }
}
