use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{env_or, required_env};
use crate::error::GenerationError;
use crate::llm::generator::{DraftGenerator, non_empty};

const PROVIDER: &str = "Anthropic";

pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";

/// Configuration for the Anthropic API client
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    /// API key (from ANTHROPIC_API_KEY env var)
    pub api_key: String,
    /// Messages endpoint
    pub api_url: String,
    /// Model to use (e.g., "claude-sonnet-4-20250514")
    pub model: String,
    /// Maximum tokens in response
    pub max_tokens: u32,
}

impl AnthropicConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = required_env("ANTHROPIC_API_KEY")?;

        Ok(Self {
            api_key,
            api_url: env_or("ANTHROPIC_API_URL", DEFAULT_ANTHROPIC_URL),
            model: env_or("ANTHROPIC_MODEL", DEFAULT_ANTHROPIC_MODEL),
            max_tokens: 4096,
        })
    }

    /// Create with custom settings
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_ANTHROPIC_URL.to_string(),
            model,
            max_tokens: 4096,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

/// Anthropic API client, used as the draft generator
pub struct AnthropicClient {
    client: Client,
    config: AnthropicConfig,
}

impl AnthropicClient {
    pub fn new(config: AnthropicConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a single user message to Claude and return the reply text
    pub async fn send_message(&self, user: &str) -> Result<String, GenerationError> {
        let request = AnthropicRequest {
            model: &self.config.model,
            max_tokens: self.config.max_tokens,
            messages: vec![Message {
                role: "user",
                content: user,
            }],
        };

        debug!(model = %self.config.model, "calling Anthropic API");

        let response = self
            .client
            .post(&self.config.api_url)
            .header("x-api-key", &self.config.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|source| GenerationError::Transport {
                provider: PROVIDER,
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Status {
                provider: PROVIDER,
                status,
                body,
            });
        }

        let response: AnthropicResponse =
            response
                .json()
                .await
                .map_err(|source| GenerationError::Decode {
                    provider: PROVIDER,
                    source,
                })?;

        // Extract text from the first content block
        let text = response
            .content
            .first()
            .filter(|c| c.content_type == "text")
            .map(|c| c.text.as_str())
            .unwrap_or_default();

        non_empty(text, PROVIDER)
    }
}

impl DraftGenerator for AnthropicClient {
    async fn generate_draft(&self, prompt: &str) -> Result<String, GenerationError> {
        self.send_message(prompt).await
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: String,
}
