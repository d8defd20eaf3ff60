// src/web/state.rs
// Web server state

use std::sync::Arc;

use minijinja::Environment;

use crate::invoker::CompletionInvoker;
use crate::llm::LlmClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub invoker: CompletionInvoker,
    pub templates: Arc<Environment<'static>>,
}

impl AppState {
    pub fn new(client: Arc<dyn LlmClient>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            invoker: CompletionInvoker::new(client),
            templates: Arc::new(super::page::templates()?),
        })
    }
}
