//! Use case for sharing media into a thread.
//!
//! Media messages are never classified: their sentiment is always
//! neutral and their content is a fixed placeholder per media kind. The
//! append still recomputes the thread's derived fields, so a run of
//! media messages steers the aggregate back toward neutral.

use crate::{
    domain::{
        message::{MediaKind, Message},
        sentiment::Sentiment,
        thread::Thread,
    },
    usecases::{
        contracts::{Clock, IdGenerator, ThreadRepository},
        send_message::{map_repository_error, resolve_target_thread, SendMessageError},
    },
};

/// Command to share a media item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMediaCommand {
    pub thread: Option<Thread>,
    pub sender_id: String,
    pub peer_id: Option<String>,
    pub media: MediaKind,
}

/// Shares a media item and returns the updated thread.
///
/// Same shape as sending text, minus text validation: there is no text
/// to validate, the placeholder content is fixed per kind.
pub fn send_media(
    repository: &mut dyn ThreadRepository,
    ids: &dyn IdGenerator,
    clock: &dyn Clock,
    command: SendMediaCommand,
) -> Result<Thread, SendMessageError> {
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
        content: command.media.placeholder_content().to_owned(),
        timestamp: now,
        sentiment: Sentiment::Neutral,
        media_url: command.media.media_url().map(str::to_owned),
    };

    thread.append_message(message);
    repository
        .upsert_thread(thread)
        .map_err(map_repository_error)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        domain::classifier::classify,
        test_support::{FixedClock, SequenceIds},
        usecases::contracts::RepositoryWriteError,
    };

    struct StubRepository {
        upserted: Vec<Thread>,
    }

    impl StubRepository {
        fn new() -> Self {
            Self {
                upserted: Vec::new(),
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
            self.upserted.push(thread.clone());
            Ok(thread)
        }
    }

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap())
    }

    fn share(media: MediaKind, thread: Option<Thread>) -> SendMediaCommand {
        SendMediaCommand {
            thread,
            sender_id: "1".to_owned(),
            peer_id: Some("2".to_owned()),
            media,
        }
    }

    #[test]
    fn media_message_is_always_neutral() {
        let mut repository = StubRepository::new();

        let thread = send_media(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            share(MediaKind::Image, None),
        )
        .expect("share must succeed");

        // The placeholder would even classify neutral, but the rule is
        // stronger: media is never run through the classifier.
        assert_eq!(thread.messages[0].sentiment, Sentiment::Neutral);
        assert_eq!(classify(thread.messages[0].content.as_str()), Sentiment::Neutral);
    }

    #[test]
    fn records_placeholder_content_and_media_url() {
        let mut repository = StubRepository::new();

        let thread = send_media(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            share(MediaKind::Video, None),
        )
        .expect("share must succeed");

        assert_eq!(thread.messages[0].content, "Shared a video");
        assert!(thread.messages[0].media_url.is_some());
    }

    #[test]
    fn audio_share_has_no_media_url() {
        let mut repository = StubRepository::new();

        let thread = send_media(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            share(MediaKind::Audio, None),
        )
        .expect("share must succeed");

        assert_eq!(thread.messages[0].content, "Shared audio");
        assert_eq!(thread.messages[0].media_url, None);
    }

    #[test]
    fn media_append_recomputes_thread_sentiment() {
        let mut repository = StubRepository::new();
        let ids = SequenceIds::default();
        let mut existing = Thread::direct("thread-7", "1", "2", clock().0);
        existing.append_message(Message {
            id: "msg-old".to_owned(),
            thread_id: "thread-7".to_owned(),
            sender_id: "2".to_owned(),
            content: "great".to_owned(),
            timestamp: clock().0,
            sentiment: Sentiment::Positive,
            media_url: None,
        });
        assert_eq!(existing.sentiment, Sentiment::Positive);

        let thread = send_media(
            &mut repository,
            &ids,
            &clock(),
            share(MediaKind::Image, Some(existing)),
        )
        .expect("share must succeed");

        // One positive and one neutral: the positive lead is gone.
        assert_eq!(thread.sentiment, Sentiment::Neutral);
        assert_eq!(thread.last_activity, clock().0);
    }

    #[test]
    fn creates_direct_thread_when_none_exists() {
        let mut repository = StubRepository::new();

        let thread = send_media(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            share(MediaKind::Image, None),
        )
        .expect("share must succeed");

        assert_eq!(thread.participants, vec!["1", "2"]);
        assert_eq!(thread.sentiment, Sentiment::Neutral);
        assert_eq!(repository.upserted.len(), 1);
    }

    #[test]
    fn rejects_fresh_share_without_peer() {
        let mut repository = StubRepository::new();

        let result = send_media(
            &mut repository,
            &SequenceIds::default(),
            &clock(),
            SendMediaCommand {
                thread: None,
                sender_id: "1".to_owned(),
                peer_id: None,
                media: MediaKind::Image,
            },
        );

        assert_eq!(result, Err(SendMessageError::MissingPeer));
    }
}
