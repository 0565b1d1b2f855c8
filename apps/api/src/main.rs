use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobmatch_api::config::Config;
use jobmatch_api::jobs::provider::AdzunaProvider;
use jobmatch_api::llm_client::{self, LlmClient};
use jobmatch_api::matching::matcher::Matcher;
use jobmatch_api::routes::build_router;
use jobmatch_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "jobmatch_api={level},{}={level},tower_http={level}",
                env!("CARGO_CRATE_NAME"),
                level = &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize job listings provider
    let provider = Arc::new(AdzunaProvider::new(config.adzuna.clone())?);
    info!(
        "Job listings provider initialized (country: {})",
        config.adzuna.country
    );

    // Initialize matcher
    let matcher_config = config.matcher_config();
    info!(
        "Matcher: {} pages x {} results, {:?} fetch budget, {:?} weighting",
        matcher_config.pages,
        matcher_config.results_per_page,
        matcher_config.fetch_timeout,
        matcher_config.scoring.weighting
    );
    let matcher = Matcher::new(provider, matcher_config);

    // Initialize LLM client
    let llm = LlmClient::new(config.openai_api_key.clone())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let state = AppState { matcher, llm };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // front end is served from a different origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
