//! HTTP server implementation for the API

use anyhow::Result;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use super::handlers;
use super::models::TranscriptQuery;
use crate::assembler::TranscriptService;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: TranscriptService,
    pub config: Arc<Config>,
}

/// Build the router with CORS, tracing and the request timeout applied
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);

    Router::new()
        .route("/", get(get_transcript_handler).post(post_transcript_handler))
        .route(
            "/transcript",
            get(get_transcript_handler).post(post_transcript_handler),
        )
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(timeout)),
        )
}

/// Configure and start the HTTP server
pub async fn start_http_server(service: TranscriptService, config: Arc<Config>) -> Result<()> {
    let address = config.bind_address();
    let app = router(AppState { service, config });

    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("🌐 API server listening on http://{}", address);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, Json(handlers::health_check()))
}

/// `GET /?videoId=...`
async fn get_transcript_handler(
    State(state): State<AppState>,
    Query(query): Query<TranscriptQuery>,
) -> Response {
    match handlers::fetch_transcript(&state.service, query.video_id).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => e.into_response(),
    }
}

/// `POST /` with a JSON body carrying `videoId`
async fn post_transcript_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let video_id = handlers::video_id_from_body(&body);
    match handlers::fetch_transcript(&state.service, video_id).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => e.into_response(),
    }
}
