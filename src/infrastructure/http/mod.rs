pub mod request_id;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, speech::SpeechController};
use crate::domain::speech::SpeechService;
use crate::infrastructure::config::Config;

pub use request_id::{request_id_middleware, RequestId};

/// Build the application router with all routes configured
pub fn create_router(
    config: &Config,
    speech_service: Arc<SpeechService>,
    speech_controller: Arc<SpeechController>,
) -> Router {
    // Form and API routes
    let speech_routes = Router::new()
        .route(
            "/",
            get(SpeechController::index).post(SpeechController::submit),
        )
        .route("/api/speech", post(SpeechController::synthesize))
        .route("/api/catalog", get(SpeechController::catalog))
        .with_state(speech_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(speech_service)
        .merge(speech_routes)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
