//! Chat message domain types.
//!
//! These are the value objects that flow through the conversation pipeline:
//! the user sends a message → the assembler builds the outbound sequence →
//! the provider generates a reply → both ends land in persisted history.

use serde::{Deserialize, Serialize};

/// The role of a message sender in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The end user
    User,
    /// The digital persona
    Assistant,
    /// Persona instructions, reconstructed fresh each turn and never persisted
    System,
}

/// A single message in a conversation.
///
/// Timestamps are Unix milliseconds — the wire format the front-end and the
/// stored history use. Ordering in persisted history is append-only and
/// timestamp-monotonic per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who sent this message
    pub role: Role,

    /// The text content
    pub content: String,

    /// Unix timestamp in milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    /// Create a new user message stamped with the current time.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            timestamp: now_millis(),
        }
    }

    /// Create a new assistant message stamped with the current time.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            timestamp: now_millis(),
        }
    }

    /// Create a new system message stamped with the current time.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
            timestamp: now_millis(),
        }
    }
}

/// Current wall-clock time as Unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_message() {
        let msg = ChatMessage::user("Hello!");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "Hello!");
        assert!(msg.timestamp > 0);
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = ChatMessage::assistant("hi");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"role\":\"assistant\""));
    }

    #[test]
    fn message_serialization_roundtrip() {
        let msg = ChatMessage {
            role: Role::User,
            content: "Test message".into(),
            timestamp: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&msg).unwrap();
        let deserialized: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }
}
