use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::sentiment::Sentiment;

/// Kind of media attachment a message can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Fixed placeholder content recorded for a media message.
    pub fn placeholder_content(&self) -> &'static str {
        match self {
            MediaKind::Image => "Shared an image",
            MediaKind::Video => "Shared a video",
            MediaKind::Audio => "Shared audio",
        }
    }

    /// Preview URL attached to the message, if the kind has one.
    pub fn media_url(&self) -> Option<&'static str> {
        match self {
            MediaKind::Image => Some(
                "https://images.unsplash.com/photo-1462331940025-496dfbfc7564?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxzZWFyY2h8MTF8fG5lYnVsYXxlbnwwfHwwfHx8MA%3D%3D",
            ),
            MediaKind::Video => Some(
                "https://images.unsplash.com/photo-1506703719100-a0b3a3bebc1c?q=80&w=2070&auto=format&fit=crop&ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D",
            ),
            MediaKind::Audio => None,
        }
    }
}

/// A single chat message. Created once, never mutated, owned exclusively
/// by one thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub thread_id: String,
    pub sender_id: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub sentiment: Sentiment,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub media_url: Option<String>,
}
