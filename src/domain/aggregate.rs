//! Thread-level sentiment aggregation.

use crate::domain::{message::Message, sentiment::Sentiment};

/// Number of most-recent messages considered when deriving thread mood.
const SENTIMENT_WINDOW: usize = 5;

/// Derives a thread's overall sentiment from its message history.
///
/// Only the last [`SENTIMENT_WINDOW`] messages count. A label wins only
/// with a strict majority over both other labels; every other split
/// (ties included, and the empty thread) is `Neutral`. The scan is
/// repeated from the full list on every call rather than kept
/// incrementally, so the rule stays trivially auditable.
pub fn aggregate_sentiment(messages: &[Message]) -> Sentiment {
    let window_start = messages.len().saturating_sub(SENTIMENT_WINDOW);

    let mut positive = 0usize;
    let mut negative = 0usize;
    let mut neutral = 0usize;

    for message in &messages[window_start..] {
        match message.sentiment {
            Sentiment::Positive => positive += 1,
            Sentiment::Negative => negative += 1,
            Sentiment::Neutral => neutral += 1,
        }
    }

    if positive > negative && positive > neutral {
        Sentiment::Positive
    } else if negative > positive && negative > neutral {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
