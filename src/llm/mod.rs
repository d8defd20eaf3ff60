// src/llm/mod.rs
// Chat completion clients

mod openai;
mod provider;

pub use openai::OpenAiChatClient;
pub use provider::{ChatMessage, LlmClient, Role};
