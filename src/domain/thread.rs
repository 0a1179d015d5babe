use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{aggregate::aggregate_sentiment, message::Message, sentiment::Sentiment};

/// A conversation between a fixed set of participants with an ordered,
/// append-only message history.
///
/// `last_activity` and `sentiment` are derived fields: they are
/// recomputed inside [`Thread::append_message`] and must never be set
/// independently by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: String,
    pub participants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    pub messages: Vec<Message>,
    pub last_activity: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub summary: Option<String>,
    pub sentiment: Sentiment,
}

impl Thread {
    /// Creates an empty 1-to-1 thread between two distinct users.
    pub fn direct(
        id: impl Into<String>,
        user_id: &str,
        peer_id: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            participants: vec![user_id.to_owned(), peer_id.to_owned()],
            name: None,
            messages: Vec::new(),
            last_activity: created_at,
            summary: None,
            sentiment: Sentiment::Neutral,
        }
    }

    /// Creates an empty named group thread.
    pub fn group(
        id: impl Into<String>,
        name: impl Into<String>,
        participants: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            participants,
            name: Some(name.into()),
            messages: Vec::new(),
            last_activity: created_at,
            summary: None,
            sentiment: Sentiment::Neutral,
        }
    }

    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|id| id == user_id)
    }

    /// True for a 1-to-1 thread connecting exactly these two users.
    pub fn is_direct_between(&self, user_id: &str, peer_id: &str) -> bool {
        self.participants.len() == 2
            && self.has_participant(user_id)
            && self.has_participant(peer_id)
    }

    /// Appends a message and recomputes the derived fields.
    ///
    /// Messages arrive in chronological order, so `last_activity` takes
    /// the appended message's timestamp. Thread sentiment is re-derived
    /// from the updated history on every append, media messages
    /// included.
    pub fn append_message(&mut self, message: Message) {
        self.last_activity = message.timestamp;
        self.messages.push(message);
        self.sentiment = aggregate_sentiment(&self.messages);
    }
}
