//! Store - the three containers and the dispatcher that mutates them

use serde::Serialize;

use super::actions::{Container, StoreAction};
use super::chat::ChatState;
use super::connection::ConnectionState;
use super::ui::UiState;

const MAX_HISTORY: usize = 50;

/// Record of one dispatched action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dispatched {
    pub action: &'static str,
    pub container: Container,
    /// Whether the container differs after the action.
    pub changed: bool,
}

/// The application state, owned by the front end and passed to pages by
/// reference.
#[derive(Debug, Clone)]
pub struct Store {
    chat: ChatState,
    connection: ConnectionState,
    ui: UiState,
    /// Dispatch history (limited).
    history: Vec<Dispatched>,
    max_history: usize,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Seeded chat list, disconnected, all UI flags off.
    pub fn new() -> Self {
        Self::with_state(ChatState::seeded(), ConnectionState::default(), UiState::default())
    }

    pub fn with_state(chat: ChatState, connection: ConnectionState, ui: UiState) -> Self {
        Self {
            chat,
            connection,
            ui,
            history: Vec::new(),
            max_history: MAX_HISTORY,
        }
    }

    pub fn chat(&self) -> &ChatState {
        &self.chat
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.connection
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn history(&self) -> &[Dispatched] {
        &self.history
    }

    /// Apply an action to the container that owns it.
    pub fn dispatch(&mut self, action: StoreAction) -> Dispatched {
        let name = action.name();
        let container = action.container();
        let changed = self.apply(action);

        tracing::trace!(action = name, ?container, changed, "dispatch");

        let record = Dispatched {
            action: name,
            container,
            changed,
        };

        self.history.push(record.clone());
        if self.history.len() > self.max_history {
            self.history.remove(0);
        }

        record
    }

    fn apply(&mut self, action: StoreAction) -> bool {
        use StoreAction::*;

        match action {
            // ========== Chat ==========
            SetChats(chats) => {
                let changed = self.chat.chats() != chats.as_slice();
                self.chat.set_chats(chats);
                changed
            }
            AddChat(chat) => {
                self.chat.add_chat(chat);
                true
            }
            SetActiveChat(id) => {
                let changed = !self.chat.is_active(&id);
                self.chat.set_active_chat(id);
                changed
            }
            SetMessages(messages) => {
                let changed = self.chat.messages() != messages.as_slice();
                self.chat.set_messages(messages);
                changed
            }
            AddMessage(message) => {
                self.chat.add_message(message);
                true
            }
            ClearMessages => {
                let changed = !self.chat.messages().is_empty();
                self.chat.clear_messages();
                changed
            }

            // ========== Connection ==========
            SetConnectionStatus(status) => self.update_connection(|c| c.set_status(status)),
            SetIsSending(sending) => self.update_connection(|c| c.set_is_sending(sending)),
            MarkConnected => self.update_connection(ConnectionState::mark_connected),
            MarkDisconnected => self.update_connection(ConnectionState::mark_disconnected),
            MarkConnecting => self.update_connection(ConnectionState::mark_connecting),

            // ========== UI ==========
            SetIsSidebarOpen(open) => self.update_ui(|ui| ui.set_sidebar_open(open)),
            ToggleSidebar => self.update_ui(UiState::toggle_sidebar),
            SetShowNewChatModal(show) => self.update_ui(|ui| ui.set_show_new_chat_modal(show)),
            SetNewChatName(name) => self.update_ui(|ui| ui.set_new_chat_name(name)),
            ResetNewChatModal => self.update_ui(UiState::reset_new_chat_modal),
        }
    }

    fn update_connection(&mut self, f: impl FnOnce(&mut ConnectionState)) -> bool {
        let before = self.connection.clone();
        f(&mut self.connection);
        before != self.connection
    }

    fn update_ui(&mut self, f: impl FnOnce(&mut UiState)) -> bool {
        let before = self.ui.clone();
        f(&mut self.ui);
        before != self.ui
    }

    /// Drop the dispatch history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use chat_core::{Conversation, Message};

    use super::*;
    use crate::store::ConnectionStatus;

    fn active_count(store: &Store) -> usize {
        store.chat().views().iter().filter(|v| v.active).count()
    }

    #[test]
    fn test_dispatch_routes_to_containers() {
        let mut store = Store::new();

        store.dispatch(StoreAction::MarkConnecting);
        assert_eq!(store.connection().status, ConnectionStatus::Connecting);

        store.dispatch(StoreAction::SetIsSidebarOpen(true));
        assert!(store.ui().is_sidebar_open);

        store.dispatch(StoreAction::AddMessage(Message::user("hello")));
        assert_eq!(store.chat().messages().len(), 1);
    }

    #[test]
    fn test_changed_flag() {
        let mut store = Store::new();
        assert!(!store.dispatch(StoreAction::ClearMessages).changed);
        assert!(!store.dispatch(StoreAction::SetActiveChat("1".into())).changed);
        assert!(store.dispatch(StoreAction::SetActiveChat("2".into())).changed);
        assert!(!store.dispatch(StoreAction::MarkDisconnected).changed);
        assert!(store.dispatch(StoreAction::ToggleSidebar).changed);
    }

    #[test]
    fn test_at_most_one_active_across_actions() {
        let mut store = Store::new();
        let actions = vec![
            StoreAction::AddChat(Conversation::new("a", "A")),
            StoreAction::SetActiveChat("a".into()),
            StoreAction::AddChat(Conversation::new("b", "B")),
            StoreAction::SetActiveChat("3".into()),
            StoreAction::SetChats(vec![Conversation::new("x", "X"), Conversation::new("y", "Y")]),
            StoreAction::SetActiveChat("y".into()),
            StoreAction::AddChat(Conversation::new("z", "Z")),
        ];
        for action in actions {
            store.dispatch(action);
            assert!(active_count(&store) <= 1);
        }
        assert_eq!(active_count(&store), 1);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut store = Store::new();
        for _ in 0..(MAX_HISTORY + 10) {
            store.dispatch(StoreAction::ToggleSidebar);
        }
        assert_eq!(store.history().len(), MAX_HISTORY);
        assert_eq!(store.history()[0].action, "toggle_sidebar");

        store.clear_history();
        assert!(store.history().is_empty());
    }
}
