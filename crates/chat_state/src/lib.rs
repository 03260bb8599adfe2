//! chat_state - Client-side state store for the PingBot chat client
//!
//! Three flat containers (chat, connection, UI) composed into one [`Store`]
//! that the pages read from and dispatch [`StoreAction`]s into.

pub mod selectors;
pub mod store;

// Re-export commonly used types
pub use store::{
    ChatState, ConnectionState, ConnectionStatus, Container, ConversationView, Dispatched, Store,
    StoreAction, UiState,
};
