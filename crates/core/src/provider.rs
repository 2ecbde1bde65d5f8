//! CompletionProvider trait — the abstraction over the hosted LLM endpoint.
//!
//! A provider accepts an ordered list of role-tagged messages plus a
//! temperature and returns one generated message. The chat pipeline calls
//! `complete()` without knowing which backend is configured.

use crate::error::ProviderError;
use crate::message::ChatMessage;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The model to use (e.g., "deepseek-v3")
    pub model: String,

    /// The outbound message sequence: system instruction first, then the
    /// recent history window, then the new user message.
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature. Derived per turn from the persona's
    /// planning↔spontaneity axis.
    pub temperature: f32,
}

/// A complete response from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The generated assistant message.
    pub message: ChatMessage,

    /// Which model actually responded (may differ from requested).
    pub model: String,

    /// Token usage statistics, when the endpoint reports them.
    pub usage: Option<Usage>,
}

/// Token usage information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// The core CompletionProvider trait.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// A human-readable name for this provider (e.g., "dashscope").
    fn name(&self) -> &str;

    /// Send a request and get a complete response.
    ///
    /// A response lacking generated text must surface as
    /// [`ProviderError::EmptyCompletion`], never as fabricated content.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> std::result::Result<CompletionResponse, ProviderError>;

    /// Health check — can we reach the provider?
    async fn health_check(&self) -> std::result::Result<bool, ProviderError> {
        Ok(true)
    }
}
