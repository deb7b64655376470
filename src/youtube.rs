//! YouTube captions provider built on `yt-transcript-rs`.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};
use yt_transcript_rs::errors::{CouldNotRetrieveTranscript, CouldNotRetrieveTranscriptReason};
use yt_transcript_rs::YouTubeTranscriptApi;

use crate::catalog::CaptionProvider;
use crate::config::YouTubeConfig;
use crate::error::{Result, TranscriptError};
use crate::types::{RawSnippet, TranscriptDescriptor};

/// Identifiers that can never resolve: empty, or a full URL instead of an id
pub fn validate_video_id(video_id: &str) -> Result<()> {
    if video_id.trim().is_empty() {
        return Err(TranscriptError::not_found("the video id is empty"));
    }
    if video_id.starts_with("http://") || video_id.starts_with("https://") {
        return Err(TranscriptError::not_found(format!(
            "invalid video id {:?}; pass the id, not the URL",
            video_id
        )));
    }
    Ok(())
}

/// First non-blank line of a library error message
fn summary(message: &str) -> String {
    message
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("could not retrieve a transcript")
        .to_string()
}

/// Map a library failure onto Disabled / NotFound / Other
pub fn classify_error(err: &CouldNotRetrieveTranscript) -> TranscriptError {
    use CouldNotRetrieveTranscriptReason as Reason;

    let message = summary(&err.to_string());
    let type_tag = match &err.reason {
        Some(Reason::TranscriptsDisabled { .. }) => return TranscriptError::Disabled,
        Some(Reason::NoTranscriptFound { .. })
        | Some(Reason::VideoUnavailable { .. })
        | Some(Reason::InvalidVideoId { .. }) => return TranscriptError::not_found(message),
        Some(Reason::IpBlocked { .. }) => "IpBlocked",
        Some(Reason::RequestBlocked { .. }) => "RequestBlocked",
        Some(Reason::AgeRestricted { .. }) => "AgeRestricted",
        Some(Reason::VideoUnplayable { .. }) => "VideoUnplayable",
        Some(Reason::YouTubeRequestFailed { .. }) => "YouTubeRequestFailed",
        Some(Reason::YouTubeDataUnparsable { .. }) => "YouTubeDataUnparsable",
        _ => "CouldNotRetrieveTranscript",
    };
    TranscriptError::other(type_tag, message)
}

/// Snippet with finite, non-negative timing; anything else is unparsable data
pub fn raw_snippet(start: f64, duration: f64, text: &str) -> Result<RawSnippet> {
    for (name, value) in [("start", start), ("duration", duration)] {
        if !value.is_finite() || value < 0.0 {
            return Err(TranscriptError::other(
                "YouTubeDataUnparsable",
                format!("caption snippet has invalid {}: {}", name, value),
            ));
        }
    }
    Ok(RawSnippet::new(start, duration, text))
}

/// [`CaptionProvider`] backed by youtube.com
pub struct YouTubeCaptionProvider {
    api: YouTubeTranscriptApi,
    timeout: Duration,
    preserve_formatting: bool,
}

impl YouTubeCaptionProvider {
    pub fn new(config: YouTubeConfig) -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None)
            .map_err(|e| TranscriptError::other("ClientInitFailed", e.to_string()))?;

        Ok(Self {
            api,
            timeout: Duration::from_secs(config.timeout_seconds),
            preserve_formatting: config.preserve_formatting,
        })
    }

    async fn call<T, F>(&self, what: &str, request: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, CouldNotRetrieveTranscript>>,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                debug!("{} failed: {}", what, e);
                Err(classify_error(&e))
            }
            Err(_) => Err(TranscriptError::other(
                "RequestTimeout",
                format!("{} timed out after {}s", what, self.timeout.as_secs()),
            )),
        }
    }
}

#[async_trait]
impl CaptionProvider for YouTubeCaptionProvider {
    async fn list_caption_tracks(&self, video_id: &str) -> Result<Vec<TranscriptDescriptor>> {
        validate_video_id(video_id)?;

        let list = self
            .call("caption catalog request", self.api.list_transcripts(video_id))
            .await?;

        let mut tracks = Vec::new();
        for transcript in list.transcripts() {
            tracks.push(
                TranscriptDescriptor::new(
                    transcript.language(),
                    transcript.language_code(),
                    transcript.is_generated(),
                )
                .with_translatable(transcript.is_translatable())
                .with_video_id(video_id),
            );
        }
        Ok(tracks)
    }

    async fn fetch_track(&self, descriptor: &TranscriptDescriptor) -> Result<Vec<RawSnippet>> {
        validate_video_id(&descriptor.video_id)?;

        info!("🌐 Downloading track: {}", descriptor.catalog_label());
        let fetched = self
            .call(
                "caption track request",
                self.api.fetch_transcript(
                    &descriptor.video_id,
                    &[descriptor.language_code.as_str()],
                    self.preserve_formatting,
                ),
            )
            .await?;

        fetched
            .parts()
            .iter()
            .map(|part| raw_snippet(part.start, part.duration, &part.text))
            .collect()
    }

    fn name(&self) -> &'static str {
        "youtube"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(reason: Option<CouldNotRetrieveTranscriptReason>) -> CouldNotRetrieveTranscript {
        CouldNotRetrieveTranscript {
            video_id: "dQw4w9WgXcQ".to_string(),
            reason,
        }
    }

    #[test]
    fn test_validate_video_id() {
        assert!(validate_video_id("dQw4w9WgXcQ").is_ok());
        assert!(validate_video_id("-4kAbCdEfGh").is_ok());
        assert!(matches!(
            validate_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Err(TranscriptError::NotFound(_))
        ));
        assert!(matches!(validate_video_id("  "), Err(TranscriptError::NotFound(_))));
    }

    #[test]
    fn test_disabled_maps_to_disabled() {
        let err = failure(Some(CouldNotRetrieveTranscriptReason::TranscriptsDisabled));
        assert_eq!(classify_error(&err), TranscriptError::Disabled);
    }

    #[test]
    fn test_unavailable_video_is_not_found() {
        let err = failure(Some(CouldNotRetrieveTranscriptReason::VideoUnavailable));
        assert!(matches!(classify_error(&err), TranscriptError::NotFound(_)));
    }

    #[test]
    fn test_unknown_failure_is_other() {
        let err = classify_error(&failure(None));
        assert_eq!(err.type_tag(), "CouldNotRetrieveTranscript");
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_summary_takes_first_line() {
        assert_eq!(
            summary("\n  Could not retrieve a transcript for x!  \nThis is most likely caused by:\n"),
            "Could not retrieve a transcript for x!"
        );
        assert_eq!(summary(""), "could not retrieve a transcript");
    }

    #[test]
    fn test_raw_snippet_rejects_bad_timing() {
        assert_eq!(raw_snippet(1.5, 2.0, "はい").unwrap(), RawSnippet::new(1.5, 2.0, "はい"));

        let err = raw_snippet(f64::NAN, 1.0, "x").unwrap_err();
        assert_eq!(err.type_tag(), "YouTubeDataUnparsable");
        assert!(err.to_string().contains("start"));

        let err = raw_snippet(0.0, -1.0, "x").unwrap_err();
        assert!(err.to_string().contains("duration"));
    }

    #[tokio::test]
    async fn test_rejects_bad_ids_before_any_request() {
        let provider = YouTubeCaptionProvider::new(YouTubeConfig::default()).unwrap();
        assert_eq!(provider.name(), "youtube");

        let err = provider
            .list_caption_tracks("https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap_err();
        assert!(matches!(err, TranscriptError::NotFound(_)));

        // descriptor that was never listed for a video
        let err = provider
            .fetch_track(&TranscriptDescriptor::new("Japanese", "ja", false))
            .await
            .unwrap_err();
        assert!(matches!(err, TranscriptError::NotFound(_)));
    }
}
