use std::future::Future;

use crate::error::GenerationError;

/// Produces the first draft of an article from a prompt.
pub trait DraftGenerator: Send + Sync {
    fn generate_draft(
        &self,
        prompt: &str,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Rewrites a draft into the final article text.
pub trait Rewriter: Send + Sync {
    fn rewrite(&self, draft: &str) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

/// Trim a model reply and reject it if nothing is left.
pub(crate) fn non_empty(text: &str, provider: &'static str) -> Result<String, GenerationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(GenerationError::EmptyResponse { provider });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_trims() {
        assert_eq!(non_empty("  hello\n", "X").unwrap(), "hello");
    }

    #[test]
    fn test_non_empty_rejects_blank() {
        let err = non_empty(" \n\t ", "Anthropic").unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse { provider: "Anthropic" }));
    }
}
