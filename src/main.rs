//! Vexus - minimal chat relay
//!
//! Relays each message to the DeepSeek completion API when a credential is
//! configured, falling back to a canned-response table on any failure.

mod api;
mod config;
mod fallback;
mod llm;
mod relay;

use api::{create_router, AppState};
use config::Config;
use fallback::FallbackTable;
use llm::{CompletionService, DeepSeekService, LoggingService};
use relay::ChatRelay;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vexus=info,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false),
        )
        .init();

    // Configuration
    let config = Config::from_env();

    // Remote provider, only when a usable credential is present
    let remote: Option<Arc<dyn CompletionService>> = config.remote_key().map(|key| {
        let service = Arc::new(DeepSeekService::new(key.to_string()));
        Arc::new(LoggingService::new(service)) as Arc<dyn CompletionService>
    });

    let mode = if remote.is_some() { "ai+local" } else { "local-only" };

    let relay = ChatRelay::new(FallbackTable::vexus(), remote);
    let state = AppState::new(relay);

    // Create router
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let compression = CompressionLayer::new()
        .gzip(true)
        .br(true)
        .deflate(true)
        .zstd(true);

    let app = create_router(state)
        .layer(cors)
        .layer(compression)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        port = config.port,
        mode,
        health = %format!("http://localhost:{}/health", config.port),
        chat = %format!("http://localhost:{}/api/chat", config.port),
        "Vexus Foundation listening"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
