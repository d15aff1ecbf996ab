pub mod config;
pub mod error;
pub mod http;
pub mod io;
pub mod llm;
pub mod models;
pub mod pipeline;

pub use config::AppConfig;
pub use error::{ArticleError, GenerationError, StorageError};
pub use http::{AppState, build_router};
pub use io::ArticleStore;
pub use llm::{
    AnthropicClient, AnthropicConfig, DraftGenerator, OpenAiClient, OpenAiConfig, Rewriter,
};
pub use models::{ArticleOutcome, GenerateRequest};
pub use pipeline::{BatchStats, Pipeline};

/// Pipeline wired to the real Anthropic and OpenAI clients
pub type LivePipeline = Pipeline<AnthropicClient, OpenAiClient>;

impl LivePipeline {
    pub fn from_config(config: &AppConfig) -> Self {
        Pipeline::new(
            AnthropicClient::new(config.draft.clone()),
            OpenAiClient::new(config.rewrite.clone()),
            ArticleStore::new(config.storage_dir.clone()),
        )
    }
}
