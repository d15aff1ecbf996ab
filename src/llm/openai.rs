use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{env_or, required_env};
use crate::error::GenerationError;
use crate::llm::generator::{Rewriter, non_empty};
use crate::llm::prompts::{REWRITE_SYSTEM_PROMPT, build_rewrite_prompt};

const PROVIDER: &str = "OpenAI";

pub const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";

/// Configuration for the OpenAI chat completions client
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key (from OPENAI_API_KEY env var)
    pub api_key: String,
    /// Chat completions endpoint
    pub api_url: String,
    pub model: String,
    /// Temperature (0-2, lower = more deterministic)
    pub temperature: f64,
    /// Maximum tokens in response
    pub max_tokens: u32,
}

impl OpenAiConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = required_env("OPENAI_API_KEY")?;

        Ok(Self {
            api_key,
            api_url: env_or("OPENAI_API_URL", DEFAULT_OPENAI_URL),
            model: env_or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
            temperature: 0.4,
            max_tokens: 2000,
        })
    }

    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_OPENAI_URL.to_string(),
            model,
            temperature: 0.4,
            max_tokens: 2000,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

/// OpenAI chat completions client, used as the rewriter
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Send a system + user message pair and return the first choice's content
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        debug!(model = %self.config.model, "calling OpenAI API");

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
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

        let response: ChatResponse =
            response
                .json()
                .await
                .map_err(|source| GenerationError::Decode {
                    provider: PROVIDER,
                    source,
                })?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .unwrap_or_default();

        non_empty(content, PROVIDER)
    }
}

impl Rewriter for OpenAiClient {
    async fn rewrite(&self, draft: &str) -> Result<String, GenerationError> {
        self.chat(REWRITE_SYSTEM_PROMPT, &build_rewrite_prompt(draft))
            .await
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
