// src/invoker.rs
// Turns a question plus a persona label into one completion call

use std::sync::Arc;

use tracing::{debug, error};

use crate::error::Result;
use crate::llm::{ChatMessage, LlmClient};
use crate::persona::resolve_instruction;

/// Sends a user's question to the model under the chosen expert persona.
///
/// Holds no per-call state: each call builds its own message list, and nothing
/// is remembered between calls.
#[derive(Clone)]
pub struct CompletionInvoker {
    client: Arc<dyn LlmClient>,
}

impl CompletionInvoker {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// The two-message exchange for one question: system instruction, then user text.
    pub fn build_request(query: &str, persona_label: &str) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(resolve_instruction(persona_label)),
            ChatMessage::user(query),
        ]
    }

    /// Ask the model, keeping the failure typed.
    ///
    /// The query is expected to be non-empty; callers reject blank input first.
    pub async fn ask(&self, query: &str, persona_label: &str) -> Result<String> {
        debug!(
            provider = self.client.name(),
            persona = persona_label,
            query_chars = query.chars().count(),
            "Invoking completion"
        );
        self.client
            .chat(Self::build_request(query, persona_label))
            .await
    }

    /// Ask the model and flatten the outcome into the text shown to the user.
    ///
    /// On success this is the model's reply, unmodified. On failure it is a
    /// message embedding the error description. Never fails.
    pub async fn respond(&self, query: &str, persona_label: &str) -> String {
        match self.ask(query, persona_label).await {
            Ok(text) => text,
            Err(e) => {
                error!(persona = persona_label, error = %e, "Completion failed");
                e.to_user_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompletionError;
    use crate::llm::Role;
    use crate::persona::{DEFAULT_INSTRUCTION, Persona};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every request and replies with a canned outcome
    struct MockClient {
        reply: std::result::Result<String, CompletionError>,
        calls: Mutex<Vec<Vec<ChatMessage>>>,
    }

    impl MockClient {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.to_string()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn failing(err: CompletionError) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(err),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Vec<ChatMessage>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LlmClient for MockClient {
        fn name(&self) -> &'static str {
            "mock"
        }

        async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String> {
            self.calls.lock().unwrap().push(messages);
            self.reply.clone()
        }
    }

    #[test]
    fn test_build_request_is_system_then_user() {
        let messages = CompletionInvoker::build_request("What is a roux?", "cooking expert");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, Persona::Cooking.instruction());
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "What is a roux?");
    }

    #[test]
    fn test_build_request_unknown_label_uses_default() {
        let messages = CompletionInvoker::build_request("test", "unknown");
        assert_eq!(messages[0].content, DEFAULT_INSTRUCTION);
    }

    #[tokio::test]
    async fn test_respond_returns_model_text_unmodified() {
        let mock = MockClient::replying("Use list.reverse().");
        let invoker = CompletionInvoker::new(mock.clone());

        let answer = invoker
            .respond("How do I reverse a list?", "programming expert")
            .await;

        assert_eq!(answer, "Use list.reverse().");
        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0][0].content, Persona::Programming.instruction());
        assert_eq!(calls[0][1].content, "How do I reverse a list?");
    }

    #[tokio::test]
    async fn test_respond_passes_through_any_persona() {
        let reply = "  keep\n  whitespace <b>and markup</b>  ";
        let mock = MockClient::replying(reply);
        let invoker = CompletionInvoker::new(mock.clone());

        for label in ["medical expert", "business expert", "no such expert"] {
            assert_eq!(invoker.respond("question", label).await, reply);
        }
        assert_eq!(mock.calls().len(), 3);
    }

    #[tokio::test]
    async fn test_respond_turns_failure_into_text() {
        let mock = MockClient::failing(CompletionError::Network("connection refused".to_string()));
        let invoker = CompletionInvoker::new(mock);

        let answer = invoker.respond("Hello", "medical expert").await;

        assert!(answer.starts_with("An error occurred: "));
        assert!(answer.contains("connection refused"));
    }

    #[tokio::test]
    async fn test_ask_keeps_error_typed() {
        let mock = MockClient::failing(CompletionError::Auth("invalid key".to_string()));
        let invoker = CompletionInvoker::new(mock);

        let err = invoker.ask("Hello", "medical expert").await.unwrap_err();
        assert_eq!(err, CompletionError::Auth("invalid key".to_string()));
    }

    #[tokio::test]
    async fn test_different_personas_same_query() {
        let mock = MockClient::replying("ok");
        let invoker = CompletionInvoker::new(mock.clone());

        invoker.respond("How should I study?", "education expert").await;
        invoker.respond("How should I study?", "medical expert").await;

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_ne!(calls[0][0].content, calls[1][0].content);
        assert_eq!(calls[0][1].content, calls[1][1].content);
    }
}
