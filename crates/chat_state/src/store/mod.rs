//! Store module
//!
//! Contains the state containers and the action dispatcher.

mod actions;
mod chat;
mod connection;
mod dispatch;
mod ui;

pub use actions::{Container, StoreAction};
pub use chat::{ChatState, ConversationView};
pub use connection::{ConnectionState, ConnectionStatus};
pub use dispatch::{Dispatched, Store};
pub use ui::UiState;
