/// Japanese YouTube transcript fetcher
///
/// Picks the best Japanese caption track of a video (manual before
/// auto-generated, catalog order as tie-break) and normalizes its snippets
/// into a flat, time-indexed segment list.

pub mod assembler;
pub mod catalog;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod selector;
pub mod types;
pub mod youtube;

#[cfg(feature = "api")]
pub mod api;

// Re-export main types for easy access
pub use crate::assembler::TranscriptService;
pub use crate::catalog::{CaptionProvider, CatalogResolver};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{Result, TranscriptError};
pub use crate::normalizer::normalize_snippets;
pub use crate::selector::{is_japanese, select_japanese_track};
pub use crate::types::{
    FoundTranscript, MissingTranscript, RawSnippet, ResultSource, Segment, TranscriptDescriptor,
    TranscriptResult,
};
pub use crate::youtube::YouTubeCaptionProvider;
