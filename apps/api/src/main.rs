mod analysis;
mod auth;
mod chat;
mod config;
mod errors;
mod jobs;
mod models;
mod recommend;
mod routes;
mod state;
mod upstream;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::jobs::store::JobStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::upstream::AnalysisClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("resumatch_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resumatch API v{}", env!("CARGO_PKG_VERSION"));

    // The one client through which every analysis-service call goes
    let analysis = AnalysisClient::new(&config.analysis_service_url, config.upstream_timeout_secs);
    info!(
        "Analysis client initialized (base: {}, timeout: {}s)",
        config.analysis_service_url, config.upstream_timeout_secs
    );

    // Static job dataset, loaded lazily on first listing request
    let jobs = Arc::new(JobStore::new(config.jobs_csv_path.as_deref()));

    let state = AppState {
        config: config.clone(),
        analysis,
        jobs,
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
