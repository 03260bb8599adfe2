//! Conversation - One chat thread in the sidebar list

use serde::{Deserialize, Serialize};

/// A chat thread.
///
/// The record does not carry an `active` flag. Which conversation is active
/// is owned by the chat container's active id, so the flag is computed when
/// a view of the list is produced.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Conversation {
    pub id: String,
    pub title: String,
}

impl Conversation {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Create a conversation with a freshly generated id.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self::new(super::new_id(), title)
    }
}

/// The conversations a fresh client starts with.
pub fn seed_conversations() -> Vec<Conversation> {
    [
        ("1", "How can I help you?"),
        ("2", "JSON Data for Table"),
        ("3", "Enhancing Donut Chart"),
        ("4", "Modern Hero Slider"),
        ("5", "Tailwind UI Refinement"),
    ]
    .into_iter()
    .map(|(id, title)| Conversation::new(id, title))
    .collect()
}
