use serde::{Deserialize, Serialize};

/// Coarse three-way mood label attached to a message or derived for a thread.
///
/// No ordering is defined; the label is only compared for equality and
/// counted during majority votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Lowercase label, matching the persisted representation.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}
