pub mod few_shot;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ProviderConfig;
use crate::types::{ChatMessage, Message};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("OpenRouter API key not set. Set OPENROUTER_API_KEY env var.")]
    MissingApiKey,
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion response was not JSON: {0}")]
    InvalidResponse(String),
}

/// Sampling parameters sent with every completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampling {
    pub temperature: f32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub max_tokens: u32,
}

/// A hosted chat-completion API.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send the full message sequence and return the provider's JSON reply
    /// exactly as received.
    async fn complete(
        &self,
        messages: &[serde_json::Value],
    ) -> Result<serde_json::Value, ProviderError>;
}

/// OpenAI-compatible chat completions endpoint (OpenRouter by default).
pub struct OpenRouterProvider {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
    sampling: Sampling,
    site_url: String,
    site_name: String,
}

impl OpenRouterProvider {
    pub fn new(
        endpoint: String,
        api_key: String,
        model: String,
        sampling: Sampling,
        site_url: String,
        site_name: String,
    ) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model,
            sampling,
            site_url,
            site_name,
        }
    }

    /// Request body for a completion call.
    pub fn request_body(&self, messages: &[serde_json::Value]) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "messages": messages,
            "temperature": self.sampling.temperature,
            "max_tokens": self.sampling.max_tokens,
            "top_p": self.sampling.top_p,
            "frequency_penalty": self.sampling.frequency_penalty,
            "presence_penalty": self.sampling.presence_penalty,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterProvider {
    async fn complete(
        &self,
        messages: &[serde_json::Value],
    ) -> Result<serde_json::Value, ProviderError> {
        let body = self.request_body(messages);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", &self.site_name)
            .json(&body)
            .send()
            .await?;

        // Provider error payloads are relayed like successes; the caller
        // sees whatever the provider said.
        let status = response.status();
        let text = response.text().await?;
        debug!(%status, bytes = text.len(), "completion response received");

        serde_json::from_str(&text)
            .map_err(|e| ProviderError::InvalidResponse(format!("{status}: {e}")))
    }
}

/// Build the outbound message sequence.
///
/// Order: system prompt, few-shot exchanges, prior memory, then the latest
/// user message. When the request carried a latest message it is also the
/// last memory entry, so that entry is left out of the history.
pub fn build_messages(
    system_prompt: &str,
    memory: &[Message],
    latest: Option<&ChatMessage>,
) -> Vec<serde_json::Value> {
    let prior = match latest {
        Some(_) => &memory[..memory.len().saturating_sub(1)],
        None => memory,
    };

    let mut messages = Vec::with_capacity(1 + few_shot::EXCHANGES.len() * 2 + memory.len());
    messages.push(serde_json::json!({
        "role": "system",
        "content": system_prompt,
    }));
    for (question, answer) in few_shot::EXCHANGES {
        messages.push(serde_json::json!({ "role": "user", "content": question }));
        messages.push(serde_json::json!({ "role": "assistant", "content": answer }));
    }
    messages.extend(prior.iter().map(Message::as_provider_message));
    if let Some(latest) = latest {
        messages.push(serde_json::json!(latest));
    }
    messages
}

/// Create a provider from config. Fails before any I/O if no key is set.
pub fn from_config(config: &ProviderConfig) -> Result<OpenRouterProvider, ProviderError> {
    let api_key = config
        .api_key
        .clone()
        .filter(|k| !k.trim().is_empty())
        .ok_or(ProviderError::MissingApiKey)?;

    Ok(OpenRouterProvider::new(
        config.endpoint.clone(),
        api_key,
        config.model.clone(),
        config.sampling(),
        config.site_url.clone(),
        config.site_name.clone(),
    ))
}
