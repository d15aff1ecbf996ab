use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the draft and rewrite generator clients.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to reach {provider} API: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API error - HTTP {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("failed to decode {provider} API response: {source}")]
    Decode {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} API returned an empty response")]
    EmptyResponse { provider: &'static str },
}

/// Errors raised while persisting articles to disk.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create storage directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write article file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failure of a single article inside a batch.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = GenerationError::Status {
            provider: "Anthropic",
            status: 429,
            body: "{\"error\":\"rate_limited\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Anthropic API error - HTTP 429: {\"error\":\"rate_limited\"}"
        );
    }

    #[test]
    fn test_article_error_is_transparent() {
        let err: ArticleError = GenerationError::EmptyResponse { provider: "OpenAI" }.into();
        assert_eq!(err.to_string(), "OpenAI API returned an empty response");
    }
}
