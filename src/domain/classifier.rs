//! Lexicon-based sentiment classification.
//!
//! Deliberately simple word counting against fixed positive/negative
//! lexicons. Not a natural-language model; the lexicons must stay stable
//! because persisted snapshots carry labels produced by them.

use crate::domain::sentiment::Sentiment;

const POSITIVE_LEXICON: [&str; 10] = [
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "love",
    "happy",
    "exciting",
    "yes",
    "awesome",
];

const NEGATIVE_LEXICON: [&str; 10] = [
    "bad",
    "terrible",
    "horrible",
    "awful",
    "sad",
    "hate",
    "unhappy",
    "concerning",
    "no",
    "problem",
];

/// Classifies message text into a [`Sentiment`] label.
///
/// Tokens are lowercased with punctuation stripped, then matched exactly
/// against the lexicons (no stemming). More positive hits than negative
/// wins `Positive`, the reverse wins `Negative`, and any tie (including
/// no hits at all) is `Neutral`. Empty or whitespace-only input is
/// `Neutral`.
pub fn classify(text: &str) -> Sentiment {
    if text.trim().is_empty() {
        return Sentiment::Neutral;
    }

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in cleaned.split_whitespace() {
        if POSITIVE_LEXICON.contains(&token) {
            positive += 1;
        }
        if NEGATIVE_LEXICON.contains(&token) {
            negative += 1;
        }
    }

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}
