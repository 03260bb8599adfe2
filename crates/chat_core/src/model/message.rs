//! Message - One turn in the active conversation

use serde::{Deserialize, Serialize};

/// Author of a message.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    /// Replies coming back over the transport.
    #[default]
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(id: impl Into<String>, role: Role, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role,
            content: content.into(),
        }
    }

    /// Create a user message with a fresh id.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(super::new_id(), Role::User, content)
    }

    /// Create a model message with a fresh id.
    pub fn model(content: impl Into<String>) -> Self {
        Self::new(super::new_id(), Role::Model, content)
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let msg = Message::new("m1", Role::Model, "hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "model");

        let back: Message =
            serde_json::from_str(r#"{"id":"m2","role":"user","content":"yo"}"#).unwrap();
        assert!(back.is_user());
    }

    #[test]
    fn test_constructors_assign_role() {
        assert_eq!(Message::user("a").role, Role::User);
        assert_eq!(Message::model("b").role, Role::Model);
        assert_eq!(Role::default(), Role::Model);
    }
}
