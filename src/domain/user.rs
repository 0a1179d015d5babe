use serde::{Deserialize, Serialize};

/// Immutable reference data about a chat participant.
///
/// Users are supplied by the host application; the core never creates or
/// mutates them, it only refers to them by id from thread participant
/// lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub avatar_url: Option<String>,
}

/// Resolves a display name for a participant id, falling back to
/// "Unknown" for ids missing from the directory.
pub fn display_name<'a>(directory: &'a [User], user_id: &str) -> &'a str {
    directory
        .iter()
        .find(|user| user.id == user_id)
        .map(|user| user.name.as_str())
        .unwrap_or("Unknown")
}
