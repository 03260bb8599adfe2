//! Chat page - sidebar, new-chat modal, message pane and composer

use chat_core::{Conversation, Message};
use chat_state::{selectors, Store, StoreAction};

use crate::error::ChatAppError;
use crate::transport::{ChatTransport, IncomingMessage, PromptEvent, TransportEvent};

/// Keys the new-chat modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKey {
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The prompt went out; carries the appended user message.
    Sent(Message),
    /// Empty input or a send already in flight.
    Ignored,
}

pub struct ChatPage<T> {
    transport: T,
}

impl<T: ChatTransport> ChatPage<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    // ========== Sidebar ==========

    pub fn open_sidebar(&self, store: &mut Store) {
        store.dispatch(StoreAction::SetIsSidebarOpen(true));
    }

    pub fn close_sidebar(&self, store: &mut Store) {
        store.dispatch(StoreAction::SetIsSidebarOpen(false));
    }

    pub fn toggle_sidebar(&self, store: &mut Store) {
        store.dispatch(StoreAction::ToggleSidebar);
    }

    // ========== New chat modal ==========

    pub fn open_new_chat_modal(&self, store: &mut Store) {
        store.dispatch(StoreAction::SetShowNewChatModal(true));
    }

    pub fn set_new_chat_name(&self, store: &mut Store, name: impl Into<String>) {
        store.dispatch(StoreAction::SetNewChatName(name.into()));
    }

    /// Create a conversation from the modal draft and switch to it.
    /// Returns the new conversation id, or `None` when the draft is blank.
    pub fn create_new_chat(&self, store: &mut Store) -> Option<String> {
        let title = selectors::new_chat_name(store).trim().to_string();
        if title.is_empty() {
            return None;
        }

        let chat = Conversation::with_title(title);
        let id = chat.id.clone();
        tracing::info!(chat_id = %id, title = %chat.title, "creating chat");

        store.dispatch(StoreAction::AddChat(chat));
        store.dispatch(StoreAction::SetActiveChat(id.clone()));
        store.dispatch(StoreAction::ClearMessages);
        store.dispatch(StoreAction::SetIsSidebarOpen(false));
        store.dispatch(StoreAction::ResetNewChatModal);
        Some(id)
    }

    pub fn cancel_new_chat(&self, store: &mut Store) {
        store.dispatch(StoreAction::ResetNewChatModal);
    }

    pub fn handle_modal_key(&self, store: &mut Store, key: ModalKey) -> Option<String> {
        match key {
            ModalKey::Enter => self.create_new_chat(store),
            ModalKey::Escape => {
                self.cancel_new_chat(store);
                None
            }
            ModalKey::Other => None,
        }
    }

    // ========== Conversation list ==========

    /// Switch conversations. The log is cleared and refilled from the
    /// transport's history, if it has any.
    pub async fn select_chat(&self, store: &mut Store, chat_id: &str) {
        store.dispatch(StoreAction::SetActiveChat(chat_id.to_string()));
        store.dispatch(StoreAction::SetIsSidebarOpen(false));
        store.dispatch(StoreAction::ClearMessages);

        match self.transport.load_history(chat_id).await {
            Ok(history) if !history.is_empty() => {
                tracing::debug!(chat_id, count = history.len(), "loaded history");
                store.dispatch(StoreAction::SetMessages(history));
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(chat_id, "failed to load history: {}", e),
        }
    }

    // ========== Messages ==========

    /// Append the user's message and emit it as a prompt. The sending flag
    /// stays set until the transport call resolves.
    pub async fn send_message(
        &self,
        store: &mut Store,
        input: &str,
    ) -> Result<SendOutcome, ChatAppError> {
        let text = input.trim();
        if text.is_empty() || selectors::is_sending(store) {
            return Ok(SendOutcome::Ignored);
        }

        let message = Message::user(text);
        store.dispatch(StoreAction::AddMessage(message.clone()));
        store.dispatch(StoreAction::SetIsSending(true));

        let prompt = PromptEvent {
            chat_id: selectors::active_chat_id(store).unwrap_or_default().to_string(),
            prompt: message.content.clone(),
        };
        let result = self.transport.send_prompt(prompt).await;
        store.dispatch(StoreAction::SetIsSending(false));

        match result {
            Ok(()) => Ok(SendOutcome::Sent(message)),
            Err(e) => {
                tracing::error!("Failed to send prompt: {}", e);
                Err(e.into())
            }
        }
    }

    pub fn handle_incoming_message(&self, store: &mut Store, incoming: IncomingMessage) {
        store.dispatch(StoreAction::AddMessage(incoming.into_message()));
    }

    // ========== Connection ==========

    pub fn mark_connected(&self, store: &mut Store) {
        store.dispatch(StoreAction::MarkConnected);
    }

    pub fn mark_disconnected(&self, store: &mut Store) {
        store.dispatch(StoreAction::MarkDisconnected);
    }

    pub fn handle_event(&self, store: &mut Store, event: TransportEvent) {
        match event {
            TransportEvent::Connected => self.mark_connected(store),
            TransportEvent::Disconnected => self.mark_disconnected(store),
            TransportEvent::Response(incoming) => self.handle_incoming_message(store, incoming),
        }
    }

    /// Wait for one transport event and apply it. Returns false once the
    /// transport has closed, after marking the connection disconnected.
    pub async fn pump(&mut self, store: &mut Store) -> bool {
        match self.transport.next_event().await {
            Some(event) => {
                self.handle_event(store, event);
                true
            }
            None => {
                self.mark_disconnected(store);
                false
            }
        }
    }
}
