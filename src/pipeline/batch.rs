use std::time::Duration;

use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use crate::error::ArticleError;
use crate::io::ArticleStore;
use crate::llm::{DraftGenerator, Rewriter, build_draft_prompt};
use crate::models::{ArticleOutcome, GenerateRequest};

pub const SUCCESS_MESSAGE: &str = "article generated";

/// Draft → rewrite → save pipeline over a sequential batch
pub struct Pipeline<D, R> {
    drafter: D,
    rewriter: R,
    store: ArticleStore,
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchStats {
    pub fn from_outcomes(outcomes: &[ArticleOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
        }
    }
}

impl<D: DraftGenerator, R: Rewriter> Pipeline<D, R> {
    pub fn new(drafter: D, rewriter: R, store: ArticleStore) -> Self {
        Self {
            drafter,
            rewriter,
            store,
        }
    }

    pub fn store(&self) -> &ArticleStore {
        &self.store
    }

    /// Run a whole batch.
    ///
    /// Articles are produced one at a time. A failed article is recorded in
    /// its outcome and the loop moves on; the returned list always holds one
    /// outcome per requested article, in order. The configured delay follows
    /// each successful article except the last; a failed article moves
    /// straight on to the next one.
    pub async fn run_batch(&self, request: &GenerateRequest) -> Vec<ArticleOutcome> {
        let batch_id = Uuid::new_v4();
        let span = info_span!("batch", %batch_id);
        self.run_batch_inner(request).instrument(span).await
    }

    async fn run_batch_inner(&self, request: &GenerateRequest) -> Vec<ArticleOutcome> {
        let total = request.article_count;
        let prompt = build_draft_prompt(
            &request.prompt,
            request.keyword.as_deref(),
            request.topic.as_deref(),
        );
        let delay = Duration::from_secs(request.delay_seconds);

        info!(
            "Starting batch: {} articles, delay {}s, auto_save={}",
            total, request.delay_seconds, request.auto_save
        );
        if request.auto_save {
            info!("Saving articles under {:?}", self.store.root());
        }

        let mut outcomes = Vec::with_capacity(total as usize);

        for article_number in 1..=total {
            info!("Article {}/{}: starting", article_number, total);

            let mut outcome = ArticleOutcome::new(article_number);
            match self
                .process_article(&prompt, article_number, request.auto_save, &mut outcome)
                .await
            {
                Ok(()) => {
                    outcome.succeed(SUCCESS_MESSAGE);
                    outcomes.push(outcome);

                    if article_number < total && !delay.is_zero() {
                        info!("Waiting {}s before next article", request.delay_seconds);
                        tokio::time::sleep(delay).await;
                    }
                }
                Err(e) => {
                    error!("Article {} failed: {}", article_number, e);
                    outcome.fail(&e);
                    outcomes.push(outcome);
                }
            }
        }

        let stats = BatchStats::from_outcomes(&outcomes);
        info!(
            "Batch complete: {} succeeded, {} failed",
            stats.succeeded, stats.failed
        );

        outcomes
    }

    /// Process a single article, filling `outcome` as each step completes
    async fn process_article(
        &self,
        prompt: &str,
        article_number: u32,
        auto_save: bool,
        outcome: &mut ArticleOutcome,
    ) -> Result<(), ArticleError> {
        let draft = self.drafter.generate_draft(prompt).await?;
        info!(
            "Article {}: draft ready ({} chars)",
            article_number,
            draft.chars().count()
        );
        outcome.original_content = Some(draft.clone());

        let rewritten = self.rewriter.rewrite(&draft).await?;
        info!(
            "Article {}: rewrite ready ({} chars)",
            article_number,
            rewritten.chars().count()
        );
        outcome.replaced_content = Some(rewritten.clone());

        if auto_save {
            let path = self
                .store
                .save_pair(&draft, &rewritten, article_number)
                .await?;
            info!("Article {}: saved to {:?}", article_number, path);
            outcome.saved_file_path = Some(path.display().to_string());
        }

        Ok(())
    }
}
