use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::{error, info};

use crate::http::error::AppError;
use crate::http::state::AppState;
use crate::llm::{DraftGenerator, Rewriter};
use crate::models::{ArticleOutcome, GenerateRequest};

pub const HEALTH_MESSAGE: &str = "AI Blog Generator is running";

/// Query parameters for a manual save.
#[derive(Debug, Deserialize)]
pub struct SaveParams {
    pub original: String,
    pub replaced: String,
    pub number: u32,
}

/// POST /api/generate - Run a batch and return one outcome per article.
///
/// A body that does not parse is rejected the same way as one that fails
/// validation.
pub async fn generate<D, R>(
    State(state): State<AppState<D, R>>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Vec<ArticleOutcome>>, AppError>
where
    D: DraftGenerator + 'static,
    R: Rewriter + 'static,
{
    let Json(request) = payload?;
    request.validate().map_err(AppError::Validation)?;

    let outcomes = state.pipeline.run_batch(&request).await;
    Ok(Json(outcomes))
}

/// POST /api/save - Save an edited draft/rewrite pair.
pub async fn save<D, R>(
    State(state): State<AppState<D, R>>,
    Query(params): Query<SaveParams>,
) -> (StatusCode, Json<ArticleOutcome>)
where
    D: DraftGenerator + 'static,
    R: Rewriter + 'static,
{
    let mut outcome = ArticleOutcome::new(params.number);

    match state
        .pipeline
        .store()
        .save_pair(&params.original, &params.replaced, params.number)
        .await
    {
        Ok(path) => {
            info!("Article {} saved manually to {:?}", params.number, path);
            outcome.succeed("saved");
            outcome.saved_file_path = Some(path.display().to_string());
            (StatusCode::OK, Json(outcome))
        }
        Err(e) => {
            error!("Manual save of article {} failed: {}", params.number, e);
            outcome.fail(&e);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(outcome))
        }
    }
}

/// GET /api/health
pub async fn health() -> &'static str {
    HEALTH_MESSAGE
}
