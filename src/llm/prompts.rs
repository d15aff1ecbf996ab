/// System instruction for the rewrite model.
///
/// Asks for readable output with a line break after every sentence.
pub const REWRITE_SYSTEM_PROMPT: &str =
    "가독성 좋게 줄바꿈 처리해서 출력하고, 마침표 기준으로 줄바꿈 해줘.";

/// Prefix placed before the draft text in the rewrite request.
pub const REWRITE_USER_PREFIX: &str = "다음 텍스트를 자연스럽게 재작성해줘: ";

/// Build the prompt sent to the draft model.
///
/// When both `keyword` and `topic` are present and non-blank the base prompt
/// is followed by a block of writing conditions; otherwise it is used as is.
pub fn build_draft_prompt(prompt: &str, keyword: Option<&str>, topic: Option<&str>) -> String {
    let keyword = keyword.map(str::trim).filter(|k| !k.is_empty());
    let topic = topic.map(str::trim).filter(|t| !t.is_empty());

    let (Some(keyword), Some(topic)) = (keyword, topic) else {
        return prompt.to_string();
    };

    let mut out = String::with_capacity(prompt.len() + 256);
    out.push_str(prompt);
    out.push_str("\n\n");
    out.push_str("【작성 조건】\n");
    out.push_str(&format!("- 주제: {}\n", topic));
    out.push_str(&format!("- 중요 키워드: {} (자연스럽게 포함)\n", keyword));
    out.push_str("- 공백 제외 2500~3000자 분량\n");
    out.push_str("- 목차 5개 구성\n");
    out.push_str("- 각 문장은 20~30자 기준으로 줄바꿈하여 가독성 향상\n");
    out.push_str("- 전문적이면서도 이해하기 쉬운 문체");
    out
}

/// Build the user message sent to the rewrite model.
pub fn build_rewrite_prompt(draft: &str) -> String {
    format!("{}{}", REWRITE_USER_PREFIX, draft)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_prompt_unchanged_without_conditions() {
        assert_eq!(build_draft_prompt("write", None, None), "write");
        assert_eq!(build_draft_prompt("write", Some("cholesterol"), None), "write");
        assert_eq!(build_draft_prompt("write", Some("  "), Some("health")), "write");
    }

    #[test]
    fn test_draft_prompt_with_keyword_and_topic() {
        let prompt = build_draft_prompt("write a post", Some("cholesterol"), Some("normal levels"));
        assert!(prompt.starts_with("write a post\n\n【작성 조건】\n"));
        assert!(prompt.contains("- 주제: normal levels\n"));
        assert!(prompt.contains("- 중요 키워드: cholesterol (자연스럽게 포함)\n"));
        assert!(prompt.ends_with("이해하기 쉬운 문체"));
    }

    #[test]
    fn test_rewrite_prompt_prefixes_draft() {
        let prompt = build_rewrite_prompt("line one.\nline two.");
        assert!(prompt.starts_with(REWRITE_USER_PREFIX));
        assert!(prompt.ends_with("line one.\nline two."));
    }
}
