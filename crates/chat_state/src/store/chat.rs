//! Chat container - conversation list, active chat and message log

use chat_core::model::seed_conversations;
use chat_core::{Conversation, Message};
use serde::{Deserialize, Serialize};

/// Conversation list entry as the sidebar renders it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ConversationView {
    pub id: String,
    pub title: String,
    /// Computed from the container's active id.
    pub active: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    chats: Vec<Conversation>,
    active_chat: Option<String>,
    messages: Vec<Message>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::seeded()
    }
}

impl ChatState {
    /// The starting list with the first seeded conversation active.
    pub fn seeded() -> Self {
        let chats = seed_conversations();
        let active_chat = chats.first().map(|c| c.id.clone());
        Self {
            chats,
            active_chat,
            messages: Vec::new(),
        }
    }

    /// No conversations, nothing active.
    pub fn empty() -> Self {
        Self {
            chats: Vec::new(),
            active_chat: None,
            messages: Vec::new(),
        }
    }

    pub fn chats(&self) -> &[Conversation] {
        &self.chats
    }

    pub fn active_chat(&self) -> Option<&str> {
        self.active_chat.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_chat.as_deref() == Some(id)
    }

    /// The list with each entry's `active` flag resolved.
    pub fn views(&self) -> Vec<ConversationView> {
        self.chats
            .iter()
            .map(|c| ConversationView {
                id: c.id.clone(),
                title: c.title.clone(),
                active: self.is_active(&c.id),
            })
            .collect()
    }

    pub fn find(&self, id: &str) -> Option<&Conversation> {
        self.chats.iter().find(|c| c.id == id)
    }

    pub fn set_chats(&mut self, chats: Vec<Conversation>) {
        self.chats = chats;
    }

    /// Insert at the top of the list.
    pub fn add_chat(&mut self, chat: Conversation) {
        self.chats.insert(0, chat);
    }

    pub fn set_active_chat(&mut self, id: impl Into<String>) {
        self.active_chat = Some(id.into());
    }

    pub fn set_messages(&mut self, messages: Vec<Message>) {
        self.messages = messages;
    }

    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use chat_core::Role;

    use super::*;

    #[test]
    fn test_seeded_has_first_active() {
        let state = ChatState::seeded();
        assert_eq!(state.active_chat(), Some("1"));
        let views = state.views();
        assert_eq!(views.iter().filter(|v| v.active).count(), 1);
        assert!(views[0].active);
    }

    #[test]
    fn test_add_chat_prepends() {
        let mut state = ChatState::seeded();
        state.add_chat(Conversation::new("new", "Fresh"));
        assert_eq!(state.chats()[0].id, "new");
        assert_eq!(state.chats().len(), 6);
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut state = ChatState::empty();
        for i in 0..10 {
            state.add_message(Message::new(i.to_string(), Role::User, format!("m{i}")));
        }
        assert_eq!(state.messages().len(), 10);
        let ids: Vec<_> = state.messages().iter().map(|m| m.id.clone()).collect();
        let expected: Vec<_> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_active_follows_set_active_chat() {
        let mut state = ChatState::seeded();
        state.set_active_chat("3");
        let active: Vec<_> = state.views().into_iter().filter(|v| v.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, "3");

        // An id that names no conversation leaves nothing active.
        state.set_active_chat("missing");
        assert!(state.views().iter().all(|v| !v.active));
    }

    #[test]
    fn test_replacing_list_keeps_single_active() {
        let mut state = ChatState::seeded();
        state.set_chats(vec![
            Conversation::new("1", "kept"),
            Conversation::new("9", "other"),
        ]);
        let active: Vec<_> = state.views().into_iter().filter(|v| v.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "kept");
    }
}
