//! Model module - Chat data types
//!
//! Shared conversation and message types used by the store and the pages.

mod conversation;
mod message;

pub use conversation::{seed_conversations, Conversation};
pub use message::{Message, Role};

/// Generate a fresh identifier for a conversation or message.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
