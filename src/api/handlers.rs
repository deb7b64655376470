//! API request handlers

use serde_json::Value;
use tracing::{error, info};

use super::models::ApiError;
use crate::assembler::TranscriptService;

/// Handle health check requests
pub fn health_check() -> Value {
    serde_json::json!({
        "status": "healthy",
        "service": "ja-transcript",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })
}

/// `videoId` from a POST body. Bodies that are not JSON objects, or whose
/// `videoId` is not a string, yield `None`.
pub fn video_id_from_body(body: &[u8]) -> Option<String> {
    let json: Value = serde_json::from_slice(body).ok()?;
    json.get("videoId")?.as_str().map(str::to_string)
}

/// Run the transcript operation for a request
pub async fn fetch_transcript(
    service: &TranscriptService,
    video_id: Option<String>,
) -> Result<Value, ApiError> {
    let video_id = video_id
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingVideoId)?;

    info!("Processing transcript request for video: {}", video_id);
    let result = service.fetch_japanese_transcript(&video_id).await;
    info!(
        "Transcript for {}: available={} source={}",
        result.video_id(),
        result.is_available(),
        result.source().as_str()
    );

    serde_json::to_value(&result).map_err(|e| {
        error!("Failed to serialize result for {}: {}", video_id, e);
        ApiError::Internal(e.to_string())
    })
}
