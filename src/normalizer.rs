//! Raw snippet to segment normalization.

use tracing::debug;

use crate::types::{RawSnippet, Segment};

/// Whole-string check: text wrapped in square brackets is a non-speech cue
/// such as "[Music]" or "[拍手]".
pub fn is_annotation(text: &str) -> bool {
    text.starts_with('[') && text.ends_with(']')
}

/// Normalize one snippet, or `None` if it carries no transcript text.
pub fn normalize_snippet(snippet: &RawSnippet) -> Option<Segment> {
    let text = snippet.text.trim();
    if text.is_empty() || is_annotation(text) {
        return None;
    }

    Some(Segment {
        start: snippet.start,
        duration: snippet.duration,
        end: snippet.start + snippet.duration,
        text: text.to_string(),
    })
}

/// Normalize a whole track in timeline order. No merging, reordering or
/// deduplication.
pub fn normalize_snippets(snippets: &[RawSnippet]) -> Vec<Segment> {
    let segments: Vec<Segment> = snippets.iter().filter_map(normalize_snippet).collect();
    debug!(
        "Normalized {} snippets into {} segments",
        snippets.len(),
        segments.len()
    );
    segments
}

/// End of the last segment, or 0 for an empty sequence
pub fn total_duration(segments: &[Segment]) -> f64 {
    segments.last().map(|s| s.end).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_and_trim() {
        let segment = normalize_snippet(&RawSnippet::new(1.25, 0.5, "  こんにちは \n")).unwrap();
        assert_eq!(segment.text, "こんにちは");
        assert!((segment.end - 1.75).abs() < 1e-9);
        assert_eq!(segment.start, 1.25);
        assert_eq!(segment.duration, 0.5);
    }

    #[test]
    fn test_drops_noise() {
        assert!(normalize_snippet(&RawSnippet::new(0.0, 1.0, "[music]")).is_none());
        assert!(normalize_snippet(&RawSnippet::new(0.0, 1.0, "  [音楽]  ")).is_none());
        assert!(normalize_snippet(&RawSnippet::new(0.0, 1.0, "   ")).is_none());
        assert!(normalize_snippet(&RawSnippet::new(0.0, 1.0, "")).is_none());
    }

    #[test]
    fn test_keeps_partial_brackets() {
        let kept = [
            "[partial] hello",
            "hello [laughs]",
            "[",
            "]",
        ];
        for text in kept {
            assert!(
                normalize_snippet(&RawSnippet::new(0.0, 1.0, text)).is_some(),
                "{text:?} should be kept"
            );
        }
        // "[]" is both prefix and suffix bracketed
        assert!(normalize_snippet(&RawSnippet::new(0.0, 1.0, "[]")).is_none());
    }

    #[test]
    fn test_order_preserved_without_merging() {
        let snippets = vec![
            RawSnippet::new(5.0, 1.0, "後"),
            RawSnippet::new(1.0, 1.0, "[applause]"),
            RawSnippet::new(0.0, 1.0, "前"),
            RawSnippet::new(0.0, 1.0, "前"),
        ];

        let texts: Vec<String> = normalize_snippets(&snippets)
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(texts, vec!["後", "前", "前"]);
    }

    #[test]
    fn test_total_duration() {
        assert_eq!(total_duration(&[]), 0.0);

        let segments = normalize_snippets(&[RawSnippet::new(1.0, 2.5, "one")]);
        assert_eq!(total_duration(&segments), 3.5);
    }
}
