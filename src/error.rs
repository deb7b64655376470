use thiserror::Error;

/// Result type for caption provider operations
pub type Result<T> = std::result::Result<T, TranscriptError>;

/// Failures reported by the captions provider.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TranscriptError {
    /// The provider explicitly reports captions are turned off for the video
    #[error("Transcripts are disabled for this video")]
    Disabled,

    /// No caption data at all, or the identifier is invalid
    #[error("{0}")]
    NotFound(String),

    /// Anything else: network errors, unexpected responses, malformed data
    #[error("{message}")]
    Other { message: String, type_tag: String },
}

impl TranscriptError {
    pub fn not_found(detail: impl Into<String>) -> Self {
        TranscriptError::NotFound(detail.into())
    }

    pub fn other(type_tag: impl Into<String>, message: impl Into<String>) -> Self {
        TranscriptError::Other {
            message: message.into(),
            type_tag: type_tag.into(),
        }
    }

    /// Short name of the failure kind, for diagnostics
    pub fn type_tag(&self) -> &str {
        match self {
            TranscriptError::Disabled => "TranscriptsDisabled",
            TranscriptError::NotFound(_) => "NoTranscriptFound",
            TranscriptError::Other { type_tag, .. } => type_tag,
        }
    }
}
