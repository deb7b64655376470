//! HTTP wrapper for the transcript operation
//!
//! `GET /?videoId=...` or `POST /` with `{"videoId": "..."}`. Both answer 200
//! with the result JSON, found or not.

use anyhow::Result;
use std::sync::Arc;
use tracing::info;

use crate::assembler::TranscriptService;
use crate::config::Config;

pub mod handlers;
pub mod models;
pub mod server;

pub use server::{router, AppState};

/// API Server serving the transcript operation over HTTP
pub struct ApiServer {
    service: TranscriptService,
    config: Arc<Config>,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(service: TranscriptService, config: Arc<Config>) -> Self {
        Self { service, config }
    }

    /// Run the API server until it fails
    pub async fn start(self) -> Result<()> {
        info!("🚀 Starting API server on {}", self.config.bind_address());
        server::start_http_server(self.service, self.config).await
    }
}
