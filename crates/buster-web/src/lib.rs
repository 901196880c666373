//! Bureaucracy Buster Web Server
//!
//! Axum-based server for the document capture page, the analysis API and
//! the view-state endpoint.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use buster_core::config::AnalyzerConfig;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Default request body limit; base64 photos are large.
pub const DEFAULT_BODY_LIMIT: usize = 20 * 1024 * 1024;

/// Create the application router with the default body limit.
pub fn create_router(state: AppState) -> Router {
    create_router_with_limit(state, DEFAULT_BODY_LIMIT)
}

/// Create the application router.
pub fn create_router_with_limit(state: AppState, body_limit: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/analyze", post(routes::analyze::analyze))
        .route("/view", post(routes::view::apply_event))
        .with_state(state.clone());

    Router::new()
        .route("/", get(routes::dashboard::index))
        .route("/static/app.js", get(routes::dashboard::app_js))
        .route("/static/app.css", get(routes::dashboard::app_css))
        .route("/health", get(routes::health::health))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    config: &AnalyzerConfig,
    host: &str,
    port: u16,
    body_limit: usize,
) -> anyhow::Result<()> {
    let state = AppState::from_config(config)?;
    let app = create_router_with_limit(state, body_limit);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
