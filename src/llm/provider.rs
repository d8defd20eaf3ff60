// src/llm/provider.rs
// Chat message types and the client trait every completion backend implements

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// Message format sent to the completions endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Trait for chat completion clients
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &'static str;

    /// Send the messages and return the model's reply text
    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_serializes_with_lowercase_role() {
        let json = serde_json::to_value(ChatMessage::system("be brief")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "system", "content": "be brief"}));

        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
    }
}
