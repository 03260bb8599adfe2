//! Store actions - Every mutation a page can dispatch into the store

use chat_core::{Conversation, Message};
use serde::{Deserialize, Serialize};

use super::connection::ConnectionStatus;

/// Which container an action mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Container {
    Chat,
    Connection,
    Ui,
}

/// Defines the mutations that can be applied to the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StoreAction {
    // ========== Chat ==========
    /// Replace the whole conversation list.
    SetChats(Vec<Conversation>),

    /// Put a conversation at the top of the list.
    AddChat(Conversation),

    /// Make the given conversation id the active one.
    SetActiveChat(String),

    /// Replace the message log.
    SetMessages(Vec<Message>),

    /// Append one message to the log.
    AddMessage(Message),

    ClearMessages,

    // ========== Connection ==========
    SetConnectionStatus(ConnectionStatus),

    SetIsSending(bool),

    MarkConnected,

    MarkDisconnected,

    MarkConnecting,

    // ========== UI ==========
    SetIsSidebarOpen(bool),

    ToggleSidebar,

    SetShowNewChatModal(bool),

    /// Update the draft title in the new-chat modal.
    SetNewChatName(String),

    /// Hide the modal and clear its draft.
    ResetNewChatModal,
}

impl StoreAction {
    pub fn container(&self) -> Container {
        match self {
            Self::SetChats(_)
            | Self::AddChat(_)
            | Self::SetActiveChat(_)
            | Self::SetMessages(_)
            | Self::AddMessage(_)
            | Self::ClearMessages => Container::Chat,
            Self::SetConnectionStatus(_)
            | Self::SetIsSending(_)
            | Self::MarkConnected
            | Self::MarkDisconnected
            | Self::MarkConnecting => Container::Connection,
            Self::SetIsSidebarOpen(_)
            | Self::ToggleSidebar
            | Self::SetShowNewChatModal(_)
            | Self::SetNewChatName(_)
            | Self::ResetNewChatModal => Container::Ui,
        }
    }

    /// Stable name used in logs and the dispatch history.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetChats(_) => "set_chats",
            Self::AddChat(_) => "add_chat",
            Self::SetActiveChat(_) => "set_active_chat",
            Self::SetMessages(_) => "set_messages",
            Self::AddMessage(_) => "add_message",
            Self::ClearMessages => "clear_messages",
            Self::SetConnectionStatus(_) => "set_connection_status",
            Self::SetIsSending(_) => "set_is_sending",
            Self::MarkConnected => "mark_connected",
            Self::MarkDisconnected => "mark_disconnected",
            Self::MarkConnecting => "mark_connecting",
            Self::SetIsSidebarOpen(_) => "set_is_sidebar_open",
            Self::ToggleSidebar => "toggle_sidebar",
            Self::SetShowNewChatModal(_) => "set_show_new_chat_modal",
            Self::SetNewChatName(_) => "set_new_chat_name",
            Self::ResetNewChatModal => "reset_new_chat_modal",
        }
    }
}
