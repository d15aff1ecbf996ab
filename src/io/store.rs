use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::debug;

use crate::error::StorageError;

const ORIGINAL_HEADER: &str = "==================== 원본 원고 ====================";
const REWRITTEN_HEADER: &str = "==================== 치환된 원고 ====================";

/// Writes generated articles as text files under a single directory
#[derive(Debug, Clone)]
pub struct ArticleStore {
    root: PathBuf,
}

impl ArticleStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Save a draft and its rewrite together as `article_<n>_<timestamp>.txt`
    pub async fn save_pair(
        &self,
        original: &str,
        rewritten: &str,
        article_number: u32,
    ) -> Result<PathBuf, StorageError> {
        let content = format_pair(original, rewritten);
        self.write(article_number, &content, Local::now().naive_local())
            .await
    }

    async fn write(
        &self,
        article_number: u32,
        content: &str,
        at: NaiveDateTime,
    ) -> Result<PathBuf, StorageError> {
        let dir = self.ensure_dir().await?;
        let path = dir.join(article_file_name(article_number, at));

        debug!("Writing article {} to {:?}", article_number, path);
        tokio::fs::write(&path, content)
            .await
            .map_err(|source| StorageError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }

    /// Resolve the root to an absolute path and create it if missing
    async fn ensure_dir(&self) -> Result<PathBuf, StorageError> {
        let dir = std::path::absolute(&self.root).map_err(|source| StorageError::CreateDir {
            path: self.root.clone(),
            source,
        })?;
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| StorageError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        Ok(dir)
    }
}

/// File name for an article saved at `at`
pub fn article_file_name(article_number: u32, at: NaiveDateTime) -> String {
    format!(
        "article_{}_{}.txt",
        article_number,
        at.format("%Y%m%d_%H%M%S")
    )
}

/// Layout of a saved draft/rewrite pair
pub fn format_pair(original: &str, rewritten: &str) -> String {
    let mut output = String::with_capacity(original.len() + rewritten.len() + 128);
    output.push_str(ORIGINAL_HEADER);
    output.push_str("\n\n");
    output.push_str(original);
    output.push_str("\n\n\n");
    output.push_str(REWRITTEN_HEADER);
    output.push_str("\n\n");
    output.push_str(rewritten);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_article_file_name() {
        let at = NaiveDate::from_ymd_opt(2025, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();
        assert_eq!(article_file_name(4, at), "article_4_20250307_090501.txt");
    }

    #[test]
    fn test_format_pair_layout() {
        let text = format_pair("draft", "final");
        assert_eq!(
            text,
            format!("{ORIGINAL_HEADER}\n\ndraft\n\n\n{REWRITTEN_HEADER}\n\nfinal")
        );
    }

    #[tokio::test]
    async fn test_save_pair_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ArticleStore::new(tmp.path().join("out").join("articles"));

        let path = store.save_pair("draft", "final", 3).await.unwrap();

        assert!(path.is_absolute());
        assert!(path.starts_with(tmp.path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("article_3_"));
        assert!(name.ends_with(".txt"));

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, format_pair("draft", "final"));
    }

    #[tokio::test]
    async fn test_save_fails_when_root_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let store = ArticleStore::new(&blocker);
        let err = store.save_pair("a", "b", 1).await.unwrap_err();
        assert!(matches!(err, StorageError::CreateDir { .. }));
    }
}
