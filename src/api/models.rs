//! API data models

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::types::ResultSource;

/// Query string of `GET /`
#[derive(Debug, Default, Deserialize)]
pub struct TranscriptQuery {
    #[serde(rename = "videoId", default)]
    pub video_id: Option<String>,
}

/// Error body for responses that are not a transcript result
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub source: Option<ResultSource>,
}

/// Transport-level failures
#[derive(Debug)]
pub enum ApiError {
    MissingVideoId,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingVideoId => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: "Video ID is required".to_string(),
                    message: "Please provide videoId as query parameter or in request body"
                        .to_string(),
                    available: None,
                    source: None,
                }),
            )
                .into_response(),
            ApiError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Internal server error".to_string(),
                    message,
                    available: Some(false),
                    source: Some(ResultSource::HttpFunction),
                }),
            )
                .into_response(),
        }
    }
}
