//! Claude conversation transcripts
//!
//! A conversation is the full message log of one session, shared by every
//! commit whose context carries the same `context_id`.

use serde::{Deserialize, Serialize};

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    /// Session markers and other injected notes
    System,
}

impl MessageRole {
    pub fn label(self) -> &'static str {
        match self {
            MessageRole::User => "You",
            MessageRole::Assistant => "Claude",
            MessageRole::System => "System",
        }
    }
}

/// One message of a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "type")]
    pub role: MessageRole,

    pub content: String,

    /// Timestamp (ISO 8601 format)
    #[serde(default)]
    pub timestamp: String,

    #[serde(default)]
    pub uuid: String,

    /// Message this one replies to (None for the first message)
    #[serde(default, rename = "parentUuid", alias = "parent_uuid")]
    pub parent_uuid: Option<String>,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: String::new(),
            uuid: String::new(),
            parent_uuid: None,
        }
    }

    /// Clock part of the timestamp (`HH:MM:SS`), or the raw value if it
    /// has no `T` separator
    pub fn time(&self) -> &str {
        let time = self
            .timestamp
            .split_once('T')
            .map_or(self.timestamp.as_str(), |(_, time)| time);
        time.get(..8).unwrap_or(time)
    }
}

/// Message log of one session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub context_id: String,

    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Conversation {
    pub fn new(context_id: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            context_id: context_id.into(),
            messages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_json() {
        let json = r#"{
            "type": "assistant",
            "content": "Let's start with the core components.",
            "timestamp": "2025-01-20T10:00:05Z",
            "uuid": "a2",
            "parentUuid": "a1"
        }"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.parent_uuid.as_deref(), Some("a1"));
        assert_eq!(message.time(), "10:00:05");
    }

    #[test]
    fn test_message_optional_fields() {
        let json = r#"{"type": "user", "content": "hi"}"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message, Message::new(MessageRole::User, "hi"));
        assert_eq!(message.time(), "");
    }

    #[test]
    fn test_message_rejects_unknown_role() {
        let json = r#"{"type": "tool", "content": "ls"}"#;
        assert!(serde_json::from_str::<Message>(json).is_err());
    }

    #[test]
    fn test_time_without_date() {
        let mut message = Message::new(MessageRole::System, "marker");
        message.timestamp = "19:00".to_string();
        assert_eq!(message.time(), "19:00");
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(MessageRole::User.label(), "You");
        assert_eq!(MessageRole::Assistant.label(), "Claude");
        assert_eq!(MessageRole::System.label(), "System");
    }
}
