// src/llm/openai.rs
// OpenAI-compatible chat completions client

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::{API_KEY_ENV_VAR, AppConfig, CredentialProvider};
use crate::error::{CompletionError, Result};
use crate::llm::provider::{ChatMessage, LlmClient};

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Pull the reply text out of a completions response body.
fn parse_completion(body: &str) -> Result<(String, Option<Usage>)> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body)?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| CompletionError::MalformedResponse("no message content in response".to_string()))?;
    Ok((content, parsed.usage))
}

/// Best-effort human-readable message from an error response body.
fn error_message(body: &str) -> String {
    if let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) {
        return envelope.error.message;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.to_string()
    }
}

// ============================================================================
// Client
// ============================================================================

pub struct OpenAiChatClient {
    client: Client,
    base_url: String,
    model: String,
    temperature: f32,
    credentials: Arc<dyn CredentialProvider>,
}

impl OpenAiChatClient {
    pub fn new(config: &AppConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            credentials,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl LlmClient for OpenAiChatClient {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request_id = Uuid::new_v4().to_string();

        // Credential is read per call so a key added to the environment is picked up
        let api_key = self.credentials.api_key().ok_or_else(|| {
            CompletionError::Auth(format!("no API key configured; set {}", API_KEY_ENV_VAR))
        })?;

        let body = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: &messages,
        };

        debug!(
            request_id = %request_id,
            model = %self.model,
            message_count = messages.len(),
            "Sending chat completion request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text);
            warn!(
                request_id = %request_id,
                status = %status,
                error = %message,
                "Chat completion request failed"
            );
            return Err(CompletionError::from_status(status.as_u16(), message));
        }

        let (content, usage) = parse_completion(&text)?;

        info!(
            request_id = %request_id,
            model = %self.model,
            latency_ms = start.elapsed().as_millis() as u64,
            prompt_tokens = usage.as_ref().map(|u| u.prompt_tokens),
            completion_tokens = usage.as_ref().map(|u| u.completion_tokens),
            "Chat completion finished"
        );

        Ok(content)
    }
}
