//! Japanese track selection.

use tracing::info;

use crate::types::TranscriptDescriptor;

/// Japanese language code, matched case-sensitively
const JAPANESE_CODE: &str = "ja";

/// Japanese language name in Japanese
const JAPANESE_NATIVE_NAME: &str = "日本語";

/// A track is a Japanese candidate if its code is exactly "ja" or its name
/// mentions Japanese (English or native spelling).
pub fn is_japanese(descriptor: &TranscriptDescriptor) -> bool {
    descriptor.language_code == JAPANESE_CODE
        || descriptor.language.to_lowercase().contains("japanese")
        || descriptor.language.contains(JAPANESE_NATIVE_NAME)
}

/// Japanese candidates in catalog order
pub fn japanese_candidates(catalog: &[TranscriptDescriptor]) -> Vec<&TranscriptDescriptor> {
    catalog.iter().filter(|d| is_japanese(d)).collect()
}

/// Pick one track from the candidates: the first manual track if any exists,
/// otherwise the first auto-generated one. `None` when there are no candidates.
pub fn select_track<'a>(candidates: &[&'a TranscriptDescriptor]) -> Option<&'a TranscriptDescriptor> {
    if let Some(manual) = candidates.iter().find(|d| !d.is_generated) {
        info!("Selected manual Japanese transcript: {}", manual.language);
        return Some(*manual);
    }

    let generated = candidates.iter().find(|d| d.is_generated)?;
    info!("Selected auto-generated Japanese transcript: {}", generated.language);
    Some(*generated)
}

/// Filter the catalog and pick a Japanese track in one step
pub fn select_japanese_track(catalog: &[TranscriptDescriptor]) -> Option<&TranscriptDescriptor> {
    select_track(&japanese_candidates(catalog))
}
