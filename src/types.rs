//! Core data model: caption track descriptors, raw snippets, normalized
//! segments and the two result shapes returned to callers.

use serde::{Deserialize, Serialize};

/// One caption track available for a video, as reported by the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptDescriptor {
    /// Human-readable name, e.g. "Japanese"
    pub language: String,
    /// Short language code, e.g. "ja"
    pub language_code: String,
    /// Auto-generated (speech recognition) vs. manually authored
    pub is_generated: bool,
    /// Informational only
    pub is_translatable: bool,
    /// Video the track belongs to, used to fetch it later
    #[serde(skip)]
    pub video_id: String,
}

impl TranscriptDescriptor {
    pub fn new(language: impl Into<String>, language_code: impl Into<String>, is_generated: bool) -> Self {
        Self {
            language: language.into(),
            language_code: language_code.into(),
            is_generated,
            is_translatable: false,
            video_id: String::new(),
        }
    }

    pub fn with_translatable(mut self, is_translatable: bool) -> Self {
        self.is_translatable = is_translatable;
        self
    }

    pub fn with_video_id(mut self, video_id: impl Into<String>) -> Self {
        self.video_id = video_id.into();
        self
    }

    /// "{language} ({languageCode})", used when listing the whole catalog
    pub fn catalog_label(&self) -> String {
        format!("{} ({})", self.language, self.language_code)
    }

    /// "{language} (auto)" or "{language} (manual)", used for Japanese candidates
    pub fn kind_label(&self) -> String {
        let kind = if self.is_generated { "auto" } else { "manual" };
        format!("{} ({})", self.language, kind)
    }
}

/// One timed caption unit exactly as delivered by the track fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSnippet {
    pub start: f64,
    pub duration: f64,
    pub text: String,
}

impl RawSnippet {
    pub fn new(start: f64, duration: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            duration,
            text: text.into(),
        }
    }
}

/// A normalized transcript segment. `text` is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub duration: f64,
    pub end: f64,
    pub text: String,
}

/// Which execution context produced a result. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultSource {
    #[serde(rename = "cli")]
    Cli,
    #[serde(rename = "http-function")]
    HttpFunction,
}

impl ResultSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSource::Cli => "cli",
            ResultSource::HttpFunction => "http-function",
        }
    }
}

/// Successful lookup: a Japanese track was selected and normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundTranscript {
    pub available: bool,
    pub video_id: String,
    pub language: String,
    pub language_code: String,
    pub is_japanese: bool,
    pub is_generated: bool,
    pub available_languages: Vec<String>,
    pub segments: Vec<Segment>,
    pub total_segments: usize,
    pub total_duration: f64,
    pub source: ResultSource,
}

/// Unsuccessful lookup, with a short human-readable reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingTranscript {
    pub available: bool,
    pub video_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub available_languages: Option<Vec<String>>,
    #[serde(rename = "error_type", skip_serializing_if = "Option::is_none", default)]
    pub error_type: Option<String>,
    pub source: ResultSource,
}

/// The operation's single output value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranscriptResult {
    Found(FoundTranscript),
    NotFound(MissingTranscript),
}

impl TranscriptResult {
    pub fn is_available(&self) -> bool {
        matches!(self, TranscriptResult::Found(_))
    }

    pub fn video_id(&self) -> &str {
        match self {
            TranscriptResult::Found(found) => &found.video_id,
            TranscriptResult::NotFound(missing) => &missing.video_id,
        }
    }

    pub fn source(&self) -> ResultSource {
        match self {
            TranscriptResult::Found(found) => found.source,
            TranscriptResult::NotFound(missing) => missing.source,
        }
    }

    pub fn as_found(&self) -> Option<&FoundTranscript> {
        match self {
            TranscriptResult::Found(found) => Some(found),
            TranscriptResult::NotFound(_) => None,
        }
    }

    pub fn as_not_found(&self) -> Option<&MissingTranscript> {
        match self {
            TranscriptResult::Found(_) => None,
            TranscriptResult::NotFound(missing) => Some(missing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_labels() {
        let manual = TranscriptDescriptor::new("Japanese", "ja", false);
        let auto = TranscriptDescriptor::new("Japanese (auto-generated)", "ja", true);

        assert_eq!(manual.catalog_label(), "Japanese (ja)");
        assert_eq!(manual.kind_label(), "Japanese (manual)");
        assert_eq!(auto.kind_label(), "Japanese (auto-generated) (auto)");
    }

    #[test]
    fn test_not_found_omits_missing_fields() {
        let result = TranscriptResult::NotFound(MissingTranscript {
            available: false,
            video_id: "abc".to_string(),
            message: "Transcripts are disabled for this video".to_string(),
            available_languages: None,
            error_type: None,
            source: ResultSource::Cli,
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["available"], false);
        assert_eq!(json["videoId"], "abc");
        assert_eq!(json["source"], "cli");
        assert!(json.get("availableLanguages").is_none());
        assert!(json.get("error_type").is_none());
    }

    #[test]
    fn test_found_field_names() {
        let result = TranscriptResult::Found(FoundTranscript {
            available: true,
            video_id: "abc".to_string(),
            language: "Japanese".to_string(),
            language_code: "ja".to_string(),
            is_japanese: true,
            is_generated: false,
            available_languages: vec!["Japanese (manual)".to_string()],
            segments: vec![Segment {
                start: 0.0,
                duration: 2.0,
                end: 2.0,
                text: "こんにちは".to_string(),
            }],
            total_segments: 1,
            total_duration: 2.0,
            source: ResultSource::HttpFunction,
        });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["languageCode"], "ja");
        assert_eq!(json["isJapanese"], true);
        assert_eq!(json["isGenerated"], false);
        assert_eq!(json["totalSegments"], 1);
        assert_eq!(json["totalDuration"], 2.0);
        assert_eq!(json["segments"][0]["end"], 2.0);
        assert_eq!(json["source"], "http-function");
        assert!(json.get("message").is_none());
    }
}
