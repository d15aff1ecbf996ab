use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm::{AnthropicConfig, OpenAiConfig};

pub const DEFAULT_STORAGE_DIR: &str = "generated-articles";
pub const DEFAULT_WEB_DIR: &str = "static";

/// Application configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Draft generator (Anthropic)
    pub draft: AnthropicConfig,
    /// Rewriter (OpenAI)
    pub rewrite: OpenAiConfig,
    /// Directory that receives saved articles
    pub storage_dir: PathBuf,
    /// Directory holding the static web UI, served when present
    pub web_dir: PathBuf,
}

impl AppConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            draft: AnthropicConfig::from_env()?,
            rewrite: OpenAiConfig::from_env()?,
            storage_dir: PathBuf::from(env_or("FILE_STORAGE_PATH", DEFAULT_STORAGE_DIR)),
            web_dir: PathBuf::from(env_or("BLOGSMITH_WEB_DIR", DEFAULT_WEB_DIR)),
        })
    }
}

/// Read a required environment variable; unset and blank are both errors
pub(crate) fn required_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("{name} environment variable not set"))
}

/// Read an environment variable, falling back to `default` when unset or blank
pub(crate) fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_env_rejects_blank_value() {
        // SAFETY: the variable name is unique to this test
        unsafe { std::env::set_var("BLOGSMITH_TEST_BLANK_API_KEY", "   ") };

        let err = required_env("BLOGSMITH_TEST_BLANK_API_KEY").unwrap_err();
        assert_eq!(
            err.to_string(),
            "BLOGSMITH_TEST_BLANK_API_KEY environment variable not set"
        );
        assert!(required_env("BLOGSMITH_TEST_SURELY_UNSET_VARIABLE").is_err());
    }

    #[test]
    fn test_env_or_falls_back_when_unset() {
        assert_eq!(
            env_or("BLOGSMITH_TEST_SURELY_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
