//! Read-only views over the store, one per field a page renders.

use chat_core::{Conversation, Message};

use crate::store::{ConnectionStatus, ConversationView, Store};

/// Header title used when the active id names no conversation.
pub const UNTITLED_CHAT: &str = "New Chat";

pub fn chats(store: &Store) -> Vec<ConversationView> {
    store.chat().views()
}

pub fn active_chat_id(store: &Store) -> Option<&str> {
    store.chat().active_chat()
}

pub fn messages(store: &Store) -> &[Message] {
    store.chat().messages()
}

pub fn active_chat(store: &Store) -> Option<&Conversation> {
    active_chat_id(store).and_then(|id| store.chat().find(id))
}

pub fn active_chat_title(store: &Store) -> &str {
    active_chat(store)
        .map(|c| c.title.as_str())
        .unwrap_or(UNTITLED_CHAT)
}

pub fn connection_status(store: &Store) -> ConnectionStatus {
    store.connection().status
}

pub fn is_sending(store: &Store) -> bool {
    store.connection().is_sending
}

pub fn is_connected(store: &Store) -> bool {
    store.connection().is_connected()
}

pub fn is_sidebar_open(store: &Store) -> bool {
    store.ui().is_sidebar_open
}

pub fn show_new_chat_modal(store: &Store) -> bool {
    store.ui().show_new_chat_modal
}

pub fn new_chat_name(store: &Store) -> &str {
    &store.ui().new_chat_name
}
