//! Connection container - transport status and send-in-flight flag

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    #[default]
    Disconnected,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::Disconnected => "disconnected",
        }
    }

    /// Badge text shown in the chat header.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Connected => "Connected",
            _ => "Disconnected",
        }
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any status may be set from any other; transitions are not validated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionState {
    pub status: ConnectionStatus,
    pub is_sending: bool,
}

impl ConnectionState {
    pub fn set_status(&mut self, status: ConnectionStatus) {
        self.status = status;
    }

    pub fn set_is_sending(&mut self, sending: bool) {
        self.is_sending = sending;
    }

    pub fn mark_connected(&mut self) {
        self.status = ConnectionStatus::Connected;
    }

    pub fn mark_disconnected(&mut self) {
        self.status = ConnectionStatus::Disconnected;
    }

    pub fn mark_connecting(&mut self) {
        self.status = ConnectionStatus::Connecting;
    }

    pub fn is_connected(&self) -> bool {
        self.status == ConnectionStatus::Connected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disconnected_and_idle() {
        let state = ConnectionState::default();
        assert_eq!(state.status, ConnectionStatus::Disconnected);
        assert!(!state.is_sending);
    }

    #[test]
    fn test_any_transition_allowed() {
        let mut state = ConnectionState::default();
        state.mark_connected();
        assert!(state.is_connected());
        state.mark_connecting();
        assert_eq!(state.status, ConnectionStatus::Connecting);
        state.set_status(ConnectionStatus::Disconnected);
        assert!(!state.is_connected());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ConnectionStatus::Connecting).unwrap();
        assert_eq!(json, "\"connecting\"");
        assert_eq!(ConnectionStatus::Connecting.label(), "Disconnected");
    }
}
