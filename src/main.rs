use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use blogsmith::{
    AppConfig, AppState, BatchStats, GenerateRequest, LivePipeline, build_router,
};

#[derive(Parser)]
#[command(name = "blogsmith")]
#[command(author, version, about = "Draft, rewrite and save blog articles in batches", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Address to bind
        #[arg(long, env = "BLOGSMITH_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "BLOGSMITH_PORT", default_value = "8080")]
        port: u16,
    },

    /// Run a single batch from the terminal
    Generate {
        /// Base prompt for the draft model
        #[arg(long)]
        prompt: String,

        /// Number of articles to produce
        #[arg(short, long, default_value = "1")]
        count: u32,

        /// Seconds to wait between articles
        #[arg(short, long, default_value = "0")]
        delay: u64,

        /// Save each draft/rewrite pair to the storage directory
        #[arg(long)]
        save: bool,

        /// Key phrase to weave into the article
        #[arg(long)]
        keyword: Option<String>,

        /// Topic of the article
        #[arg(long)]
        topic: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Serve { host, port } => serve(config, &host, port).await,
        Commands::Generate {
            prompt,
            count,
            delay,
            save,
            keyword,
            topic,
        } => {
            let request = GenerateRequest {
                prompt,
                article_count: count,
                delay_seconds: delay,
                auto_save: save,
                keyword,
                topic,
            };
            generate(config, request).await
        }
    }
}

fn setup_logging(verbose: bool) {
    let default_directives = if verbose {
        "blogsmith=debug,tower_http=debug"
    } else {
        "blogsmith=info,tower_http=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn serve(config: AppConfig, host: &str, port: u16) -> Result<()> {
    info!(
        "Draft model: {}, rewrite model: {}",
        config.draft.model, config.rewrite.model
    );
    info!("Articles are saved under {:?}", config.storage_dir);

    let state = AppState::new(LivePipeline::from_config(&config));
    let router = build_router(state, Some(config.web_dir.as_path()));

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("Server stopped");
    Ok(())
}

async fn generate(config: AppConfig, request: GenerateRequest) -> Result<()> {
    request
        .validate()
        .map_err(|msg| anyhow::anyhow!("Invalid request: {msg}"))?;

    let pipeline = LivePipeline::from_config(&config);
    let outcomes = pipeline.run_batch(&request).await;

    for outcome in &outcomes {
        let status = if outcome.success { "ok" } else { "FAILED" };
        println!(
            "Article {}: {} - {}",
            outcome.article_number, status, outcome.message
        );
        if let Some(path) = &outcome.saved_file_path {
            println!("  saved to {}", path);
        }
    }

    let stats = BatchStats::from_outcomes(&outcomes);
    println!();
    println!("{} succeeded, {} failed", stats.succeeded, stats.failed);

    if stats.succeeded == 0 {
        anyhow::bail!("No article was generated");
    }
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down");
}
