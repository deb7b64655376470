//! Scripted caption provider shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use ja_transcript::{
    CaptionProvider, RawSnippet, Result, ResultSource, TranscriptDescriptor, TranscriptError,
    TranscriptService,
};

/// Answers from fixed tables instead of the network
#[derive(Default)]
pub struct ScriptedProvider {
    catalogs: HashMap<String, std::result::Result<Vec<TranscriptDescriptor>, TranscriptError>>,
    tracks: HashMap<String, std::result::Result<Vec<RawSnippet>, TranscriptError>>,
    pub list_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, video_id: &str, tracks: Vec<TranscriptDescriptor>) -> Self {
        self.catalogs.insert(video_id.to_string(), Ok(tracks));
        self
    }

    pub fn with_catalog_error(mut self, video_id: &str, err: TranscriptError) -> Self {
        self.catalogs.insert(video_id.to_string(), Err(err));
        self
    }

    /// Snippets served for the track named `language`
    pub fn with_track(mut self, language: &str, snippets: Vec<RawSnippet>) -> Self {
        self.tracks.insert(language.to_string(), Ok(snippets));
        self
    }

    pub fn with_track_error(mut self, language: &str, err: TranscriptError) -> Self {
        self.tracks.insert(language.to_string(), Err(err));
        self
    }
}

#[async_trait]
impl CaptionProvider for ScriptedProvider {
    async fn list_caption_tracks(&self, video_id: &str) -> Result<Vec<TranscriptDescriptor>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.catalogs
            .get(video_id)
            .cloned()
            .unwrap_or_else(|| Err(TranscriptError::not_found(format!("unknown video {}", video_id))))
    }

    async fn fetch_track(&self, descriptor: &TranscriptDescriptor) -> Result<Vec<RawSnippet>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.tracks
            .get(&descriptor.language)
            .cloned()
            .unwrap_or_else(|| Err(TranscriptError::not_found("track is gone")))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

pub fn track(language: &str, code: &str, generated: bool) -> TranscriptDescriptor {
    TranscriptDescriptor::new(language, code, generated)
}

pub fn service(provider: ScriptedProvider, source: ResultSource) -> TranscriptService {
    TranscriptService::new(Arc::new(provider), source)
}

/// Catalog used by most tests: English first, then auto and manual Japanese
pub fn mixed_provider() -> ScriptedProvider {
    ScriptedProvider::new()
        .with_catalog(
            "mixed",
            vec![
                track("English", "en", false),
                track("Japanese (auto-generated)", "ja", true),
                track("Japanese", "ja", false),
            ],
        )
        .with_track(
            "Japanese",
            vec![
                RawSnippet::new(0.0, 2.0, "  こんにちは "),
                RawSnippet::new(2.0, 1.5, "[音楽]"),
                RawSnippet::new(3.5, 0.5, "   "),
                RawSnippet::new(4.0, 3.0, "ありがとう"),
            ],
        )
        .with_track(
            "Japanese (auto-generated)",
            vec![RawSnippet::new(0.0, 1.0, "自動")],
        )
}
