use serde::{Deserialize, Serialize};

/// Upper bound on articles per batch request
pub const MAX_ARTICLES_PER_BATCH: u32 = 10;

/// A batch generation request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Base prompt for the draft generator
    #[serde(default)]
    pub prompt: String,
    /// Number of articles to produce
    #[serde(default)]
    pub article_count: u32,
    /// Pause between consecutive articles, in seconds
    #[serde(default)]
    pub delay_seconds: u64,
    /// Persist each successful draft/rewrite pair to disk
    #[serde(default)]
    pub auto_save: bool,
    /// Key phrase to weave into the article
    #[serde(default)]
    pub keyword: Option<String>,
    /// Topic of the article
    #[serde(default)]
    pub topic: Option<String>,
}

impl GenerateRequest {
    /// Check the request before any upstream call is made
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("prompt must not be empty".to_string());
        }
        if !(1..=MAX_ARTICLES_PER_BATCH).contains(&self.article_count) {
            return Err(format!(
                "articleCount must be between 1 and {}",
                MAX_ARTICLES_PER_BATCH
            ));
        }
        Ok(())
    }
}

/// Result of a single article (or a standalone save)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleOutcome {
    pub success: bool,
    pub message: String,
    /// Draft text; kept even if a later step failed
    pub original_content: Option<String>,
    /// Rewritten text; kept even if saving failed
    pub replaced_content: Option<String>,
    /// 1-based position in the batch
    pub article_number: u32,
    pub saved_file_path: Option<String>,
}

impl ArticleOutcome {
    pub fn new(article_number: u32) -> Self {
        Self {
            article_number,
            ..Default::default()
        }
    }

    pub fn succeed(&mut self, message: impl Into<String>) {
        self.success = true;
        self.message = message.into();
    }

    pub fn fail(&mut self, cause: impl std::fmt::Display) {
        self.success = false;
        self.message = format!("error: {}", cause);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_with_defaults() {
        let json = r#"{"prompt": "write about tea", "articleCount": 3}"#;
        let request: GenerateRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.prompt, "write about tea");
        assert_eq!(request.article_count, 3);
        assert_eq!(request.delay_seconds, 0);
        assert!(!request.auto_save);
        assert!(request.keyword.is_none());
    }

    #[test]
    fn test_missing_fields_reach_validation() {
        let request: GenerateRequest = serde_json::from_str(r#"{"prompt": "tea"}"#).unwrap();
        assert_eq!(request.article_count, 0);
        assert!(request.validate().unwrap_err().contains("articleCount"));

        let request: GenerateRequest = serde_json::from_str(r#"{"articleCount": 1}"#).unwrap();
        assert!(request.prompt.is_empty());
        assert!(request.validate().unwrap_err().contains("prompt"));
    }

    #[test]
    fn test_validate_rejects_blank_prompt_and_bad_counts() {
        let mut request = GenerateRequest {
            prompt: "  ".to_string(),
            article_count: 1,
            ..Default::default()
        };
        assert!(request.validate().is_err());

        request.prompt = "ok".to_string();
        assert!(request.validate().is_ok());

        request.article_count = 0;
        assert!(request.validate().is_err());

        request.article_count = MAX_ARTICLES_PER_BATCH + 1;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_outcome_serializes_camel_case() {
        let mut outcome = ArticleOutcome::new(2);
        outcome.original_content = Some("draft".to_string());
        outcome.fail("OpenAI API returned an empty response");

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["articleNumber"], 2);
        assert_eq!(value["success"], false);
        assert_eq!(value["originalContent"], "draft");
        assert!(value["replacedContent"].is_null());
        assert_eq!(
            value["message"],
            "error: OpenAI API returned an empty response"
        );
    }
}
