//! Real-time transport seam
//!
//! The chat page only needs two things from a transport: a way to send a
//! prompt out and a stream of inbound events. [`ChannelTransport`] provides
//! both over in-process channels; a network transport implements the same
//! trait without touching the page.

use std::collections::HashMap;

use async_trait::async_trait;
use chat_core::{Message, Role};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::error::TransportError;

const CHANNEL_CAPACITY: usize = 64;

/// Outbound prompt for the active conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptEvent {
    pub chat_id: String,
    pub prompt: String,
}

/// Inbound message as the backend sends it. Missing fields are filled in
/// when the message is appended to the log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingMessage {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub content: Option<String>,
}

impl IncomingMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Resolve defaults: fresh id, model role, empty content.
    pub fn into_message(self) -> Message {
        Message::new(
            self.id.unwrap_or_else(chat_core::new_id),
            self.role.unwrap_or(Role::Model),
            self.content.unwrap_or_default(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    Connected,
    Disconnected,
    Response(IncomingMessage),
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send_prompt(&self, prompt: PromptEvent) -> Result<(), TransportError>;

    /// Wait for the next inbound event. `None` once the transport is closed.
    async fn next_event(&mut self) -> Option<TransportEvent>;

    /// Fetch earlier messages of a conversation.
    async fn load_history(&self, _chat_id: &str) -> Result<Vec<Message>, TransportError> {
        Ok(Vec::new())
    }
}

/// In-process transport backed by bounded tokio channels.
#[derive(Debug)]
pub struct ChannelTransport {
    prompts: mpsc::Sender<PromptEvent>,
    events: mpsc::Receiver<TransportEvent>,
    history: HashMap<String, Vec<Message>>,
}

/// The other side of a [`ChannelTransport`]: receives prompts and pushes
/// events back.
#[derive(Debug)]
pub struct RemoteEnd {
    prompts: mpsc::Receiver<PromptEvent>,
    events: mpsc::Sender<TransportEvent>,
}

impl ChannelTransport {
    pub fn pair() -> (ChannelTransport, RemoteEnd) {
        let (prompt_tx, prompt_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
        (
            ChannelTransport {
                prompts: prompt_tx,
                events: event_rx,
                history: HashMap::new(),
            },
            RemoteEnd {
                prompts: prompt_rx,
                events: event_tx,
            },
        )
    }

    /// Serve `messages` as the stored history of `chat_id`.
    pub fn with_history(mut self, chat_id: impl Into<String>, messages: Vec<Message>) -> Self {
        self.history.insert(chat_id.into(), messages);
        self
    }
}

#[async_trait]
impl ChatTransport for ChannelTransport {
    async fn send_prompt(&self, prompt: PromptEvent) -> Result<(), TransportError> {
        self.prompts
            .send(prompt)
            .await
            .map_err(|_| TransportError::Closed)
    }

    async fn next_event(&mut self) -> Option<TransportEvent> {
        self.events.recv().await
    }

    async fn load_history(&self, chat_id: &str) -> Result<Vec<Message>, TransportError> {
        Ok(self.history.get(chat_id).cloned().unwrap_or_default())
    }
}

impl RemoteEnd {
    pub async fn recv_prompt(&mut self) -> Option<PromptEvent> {
        self.prompts.recv().await
    }

    pub fn try_recv_prompt(&mut self) -> Option<PromptEvent> {
        self.prompts.try_recv().ok()
    }

    pub async fn send(&self, event: TransportEvent) -> Result<(), TransportError> {
        self.events
            .send(event)
            .await
            .map_err(|_| TransportError::Closed)
    }

    pub async fn connect(&self) -> Result<(), TransportError> {
        self.send(TransportEvent::Connected).await
    }

    pub async fn disconnect(&self) -> Result<(), TransportError> {
        self.send(TransportEvent::Disconnected).await
    }

    pub async fn reply(&self, message: IncomingMessage) -> Result<(), TransportError> {
        self.send(TransportEvent::Response(message)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_defaults() {
        let msg = IncomingMessage::default().into_message();
        assert_eq!(msg.role, Role::Model);
        assert_eq!(msg.content, "");
        assert!(!msg.id.is_empty());

        let explicit = IncomingMessage {
            id: Some("srv-1".into()),
            role: Some(Role::User),
            content: Some("echo".into()),
        }
        .into_message();
        assert_eq!(explicit, Message::new("srv-1", Role::User, "echo"));
    }

    #[test]
    fn test_incoming_parses_partial_json() {
        let incoming: IncomingMessage = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(incoming, IncomingMessage::text("hi"));
    }

    #[tokio::test]
    async fn test_channel_round_trip() {
        let (mut transport, mut remote) = ChannelTransport::pair();

        transport
            .send_prompt(PromptEvent {
                chat_id: "1".into(),
                prompt: "ping".into(),
            })
            .await
            .unwrap();
        let prompt = remote.recv_prompt().await.unwrap();
        assert_eq!(prompt.prompt, "ping");

        remote.reply(IncomingMessage::text("pong")).await.unwrap();
        assert_eq!(
            transport.next_event().await,
            Some(TransportEvent::Response(IncomingMessage::text("pong")))
        );
    }

    #[tokio::test]
    async fn test_send_after_remote_dropped() {
        let (mut transport, remote) = ChannelTransport::pair();
        drop(remote);

        let err = transport
            .send_prompt(PromptEvent {
                chat_id: "1".into(),
                prompt: "anyone?".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Closed));
        assert_eq!(transport.next_event().await, None);
    }
}
