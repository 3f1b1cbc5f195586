mod analysis;
mod config;
mod errors;
mod extract;
mod nlp;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::nlp::annotator::HttpAnnotator;
use crate::nlp::embedder::{Embed, HttpEmbedder};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume scoring API v{}", env!("CARGO_PKG_VERSION"));

    // The annotator is a hard dependency: keyword extraction cannot run
    // without it, so an unreachable sidecar aborts startup.
    let annotator = HttpAnnotator::connect(&config.annotator_url).await?;
    info!("Annotator ready at {}", config.annotator_url);

    // The embedder is optional: without it, semantic matching degrades to 0.
    let embedder: Option<Arc<dyn Embed>> = match &config.embedding_url {
        Some(url) => {
            info!("Embedding service configured at {url}");
            Some(Arc::new(HttpEmbedder::new(url.clone())))
        }
        None => {
            info!("No embedding service configured; semantic match disabled");
            None
        }
    };

    let state = AppState {
        config: config.clone(),
        annotator: Arc::new(annotator),
        embedder,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
