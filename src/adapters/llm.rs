//! Anthropic Messages API adapter
//!
//! Implements `CodeGenerator` over HTTP. The client is async; each call is
//! driven to completion on a private current-thread runtime so the rest of
//! nbkit stays synchronous.

use std::fmt;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::runtime::Runtime;

use crate::config::LlmConfig;
use crate::core::ports::CodeGenerator;
use crate::error::{Error, Result};

/// Messages API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Messages API request body
#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Messages API response body
#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

/// Code generator backed by the Anthropic Messages API
pub struct AnthropicGenerator {
    endpoint: String,
    model: String,
    max_tokens: u32,
    api_key: String,
    client: Client,
    runtime: Runtime,
}

impl fmt::Debug for AnthropicGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnthropicGenerator")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}

impl AnthropicGenerator {
    /// Create a generator with an explicit API key
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        max_tokens: u32,
        api_key: impl Into<String>,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            max_tokens,
            api_key: api_key.into(),
            client: Client::builder().build()?,
            runtime,
        })
    }

    /// Create a generator from config, reading the key from the configured env var
    pub fn from_config(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;

        Self::new(&config.endpoint, &config.model, config.max_tokens, api_key)
    }

    async fn send(&self, prompt: &str) -> Result<String> {
        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        log::debug!("POST {} (model {})", self.endpoint, self.model);
        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::Llm(format!("HTTP {status}: {detail}")));
        }

        let parsed: MessagesResponse = response.json().await?;
        collect_text(&parsed)
    }
}

impl CodeGenerator for AnthropicGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.runtime.block_on(self.send(prompt))
    }
}

/// Join all text blocks of a response
fn collect_text(response: &MessagesResponse) -> Result<String> {
    let text: String = response
        .content
        .iter()
        .filter(|block| block.kind == "text")
        .map(|block| block.text.as_str())
        .collect();

    if text.trim().is_empty() {
        return Err(Error::Llm("response contained no text".to_string()));
    }
    Ok(text)
}
