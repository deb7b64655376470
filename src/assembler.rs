//! Result assembly and the end-to-end transcript operation.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::catalog::{CaptionProvider, CatalogResolver};
use crate::error::TranscriptError;
use crate::normalizer::{normalize_snippets, total_duration};
use crate::selector::{japanese_candidates, select_track};
use crate::types::{
    FoundTranscript, MissingTranscript, ResultSource, Segment, TranscriptDescriptor,
    TranscriptResult,
};

pub const NO_JAPANESE_MESSAGE: &str = "No Japanese transcripts available for this video";

/// NotFound result for a failed provider call. `catalog` is only used when the
/// catalog was retrieved and the provider later reported missing data.
pub fn failure_result(
    video_id: &str,
    err: &TranscriptError,
    catalog: Option<&[TranscriptDescriptor]>,
    source: ResultSource,
) -> TranscriptResult {
    let (message, available_languages, error_type) = match err {
        TranscriptError::Disabled => (err.to_string(), None, None),
        TranscriptError::NotFound(detail) => (
            format!("No transcript found: {}", detail),
            catalog.map(catalog_labels),
            None,
        ),
        TranscriptError::Other { message, type_tag } => (
            format!("Error fetching transcript: {}", message),
            None,
            Some(type_tag.clone()),
        ),
    };

    TranscriptResult::NotFound(MissingTranscript {
        available: false,
        video_id: video_id.to_string(),
        message,
        available_languages,
        error_type,
        source,
    })
}

/// NotFound result for a video whose catalog has no Japanese track
pub fn no_japanese_result(
    video_id: &str,
    catalog: &[TranscriptDescriptor],
    source: ResultSource,
) -> TranscriptResult {
    TranscriptResult::NotFound(MissingTranscript {
        available: false,
        video_id: video_id.to_string(),
        message: NO_JAPANESE_MESSAGE.to_string(),
        available_languages: Some(catalog_labels(catalog)),
        error_type: None,
        source,
    })
}

/// Found result for the selected track and its normalized segments
pub fn found_result(
    video_id: &str,
    selected: &TranscriptDescriptor,
    candidates: &[&TranscriptDescriptor],
    segments: Vec<Segment>,
    source: ResultSource,
) -> TranscriptResult {
    let total_duration = total_duration(&segments);

    TranscriptResult::Found(FoundTranscript {
        available: true,
        video_id: video_id.to_string(),
        language: selected.language.clone(),
        language_code: selected.language_code.clone(),
        is_japanese: true,
        is_generated: selected.is_generated,
        available_languages: candidates.iter().map(|d| d.kind_label()).collect(),
        total_segments: segments.len(),
        total_duration,
        segments,
        source,
    })
}

fn catalog_labels(catalog: &[TranscriptDescriptor]) -> Vec<String> {
    catalog.iter().map(|d| d.catalog_label()).collect()
}

fn log_failure(video_id: &str, err: &TranscriptError) {
    match err {
        TranscriptError::Other { message, type_tag } => {
            error!("Transcript fetch for {} failed ({}): {}", video_id, type_tag, message)
        }
        _ => warn!("Transcript fetch for {} failed ({}): {}", video_id, err.type_tag(), err),
    }
}

/// Runs catalog lookup, selection, track fetch and normalization for one video.
///
/// Every provider failure is turned into a NotFound result; the operation
/// itself never fails.
#[derive(Clone)]
pub struct TranscriptService {
    provider: Arc<dyn CaptionProvider>,
    source: ResultSource,
}

impl TranscriptService {
    pub fn new(provider: Arc<dyn CaptionProvider>, source: ResultSource) -> Self {
        Self { provider, source }
    }

    /// Fetch the best Japanese transcript for `video_id`
    pub async fn fetch_japanese_transcript(&self, video_id: &str) -> TranscriptResult {
        let catalog = match CatalogResolver::new(self.provider.as_ref())
            .resolve(video_id)
            .await
        {
            Ok(catalog) => catalog,
            Err(e) => {
                log_failure(video_id, &e);
                return failure_result(video_id, &e, None, self.source);
            }
        };

        let candidates = japanese_candidates(&catalog);
        let Some(selected) = select_track(&candidates) else {
            warn!("{} ({} catalog tracks)", NO_JAPANESE_MESSAGE, catalog.len());
            return no_japanese_result(video_id, &catalog, self.source);
        };

        let snippets = match self.provider.fetch_track(selected).await {
            Ok(snippets) => snippets,
            Err(e) => {
                log_failure(video_id, &e);
                return failure_result(video_id, &e, Some(&catalog), self.source);
            }
        };

        let segments = normalize_snippets(&snippets);
        info!(
            "✅ {} segments for {} ({})",
            segments.len(),
            video_id,
            selected.language
        );

        found_result(video_id, selected, &candidates, segments, self.source)
    }
}
