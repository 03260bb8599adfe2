//! chat_core - Core types and configuration for the PingBot chat client
//!
//! This crate provides the foundational types used across all client crates:
//! - `model` - Conversation, Message, Role
//! - `config` - Client configuration (base URL, proxies, credentials)
//! - `paths` - Locations of the per-user settings files

pub mod config;
pub mod model;
pub mod paths;

// Re-export commonly used types
pub use config::{Config, ProxyAuth};
pub use model::{new_id, Conversation, Message, Role};
