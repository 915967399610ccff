//! Conversation transcript: the append-only message log a front end renders,
//! plus the submission guard that keeps blank input away from the wire.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::assistant::{fallback_for, Assistant, GeminiConnector, SessionConnector};
use crate::config::AssistantConfig;
use crate::persona;

/// Who authored a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Model => "model",
        }
    }
}

/// One rendered line of the conversation. `is_error` marks fallback lines so
/// a front end can style them; the text itself is always an ordinary reply.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    #[serde(default)]
    pub is_error: bool,
    pub created_at: i64,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::build(ChatRole::User, text, false)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::build(ChatRole::Model, text, false)
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self::build(ChatRole::Model, text, true)
    }

    fn build(role: ChatRole, text: impl Into<String>, is_error: bool) -> Self {
        Self {
            role,
            text: text.into(),
            is_error,
            created_at: Utc::now().timestamp(),
        }
    }
}

/// An assistant plus its ordered transcript, seeded with the greeting line.
///
/// Submissions go through `&mut self`, so a conversation has at most one
/// turn in flight and messages land in submission order.
pub struct Conversation<C: SessionConnector> {
    assistant: Assistant<C>,
    messages: Vec<ChatMessage>,
}

impl Conversation<GeminiConnector> {
    pub fn new(config: AssistantConfig) -> Self {
        Self::with_assistant(Assistant::new(config))
    }
}

impl<C: SessionConnector> Conversation<C> {
    pub fn with_assistant(assistant: Assistant<C>) -> Self {
        Self {
            assistant,
            messages: vec![ChatMessage::model(persona::GREETING)],
        }
    }

    /// Submit one line of user input and return the reply text.
    ///
    /// Whitespace-only input is suppressed before anything is sent or
    /// recorded, yielding `None`. Otherwise the input is appended verbatim
    /// as a user line, relayed, and the reply (or fallback) is appended as a
    /// model line; the transcript always grows by exactly two lines.
    pub async fn submit(&mut self, input: &str) -> Option<&str> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(input));

        let reply = match self.assistant.dispatch(input).await {
            Ok(text) => ChatMessage::model(text),
            Err(error) => ChatMessage::fallback(fallback_for(&error)),
        };
        self.messages.push(reply);

        self.messages.last().map(|message| message.text.as_str())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&ChatRole::Model).unwrap(), "\"model\"");
    }

    #[test]
    fn message_wire_format_is_camel_case() {
        let message = ChatMessage::fallback(persona::CONNECTIVITY_FALLBACK);
        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["role"], "model");
        assert_eq!(value["isError"], true);
        assert!(value["createdAt"].is_i64());
    }

    #[test]
    fn greeting_is_a_regular_model_line() {
        let message = ChatMessage::model(persona::GREETING);
        assert_eq!(message.role, ChatRole::Model);
        assert!(!message.is_error);
    }
}
