//! Transcript catalog resolution.
//!
//! The captions provider is injected through [`CaptionProvider`] so the
//! selection logic can run against YouTube in production and against a
//! scripted provider in tests.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::Result;
use crate::selector::is_japanese;
use crate::types::{RawSnippet, TranscriptDescriptor};

/// External captions capability: list the tracks of a video, fetch one track.
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    /// All caption tracks for `video_id`, in provider order
    async fn list_caption_tracks(&self, video_id: &str) -> Result<Vec<TranscriptDescriptor>>;

    /// Raw timed snippets of one track previously returned by `list_caption_tracks`
    async fn fetch_track(&self, descriptor: &TranscriptDescriptor) -> Result<Vec<RawSnippet>>;

    /// Short provider name used in logs
    fn name(&self) -> &'static str;
}

/// Resolves the caption catalog for a video through a [`CaptionProvider`].
pub struct CatalogResolver<'a> {
    provider: &'a dyn CaptionProvider,
}

impl<'a> CatalogResolver<'a> {
    pub fn new(provider: &'a dyn CaptionProvider) -> Self {
        Self { provider }
    }

    /// Request the track list once. Failures are returned untouched for the
    /// assembler to classify; there is no retry.
    pub async fn resolve(&self, video_id: &str) -> Result<Vec<TranscriptDescriptor>> {
        debug!("Listing caption tracks for {} via {}", video_id, self.provider.name());

        let tracks = self.provider.list_caption_tracks(video_id).await?;

        info!("Available transcripts for {}: {}", video_id, tracks.len());
        for track in &tracks {
            info!(
                "  - {} ({}) - Generated: {}",
                track.language, track.language_code, track.is_generated
            );
        }
        info!(
            "Japanese transcripts found: {}",
            tracks.iter().filter(|t| is_japanese(t)).count()
        );

        Ok(tracks)
    }
}
