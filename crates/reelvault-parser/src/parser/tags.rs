//! Source and quality tag extraction.

use crate::model::{Quality, Source};

/// Containment-check order for quality tokens (case-sensitive).
const QUALITY_ORDER: [Quality; 4] = [
    Quality::_480p,
    Quality::_720p,
    Quality::_1080p,
    Quality::_4K,
];

/// Containment-check order for source tokens once REMUX is ruled out
/// (case-insensitive).
const SOURCE_ORDER: [Source; 4] = [Source::WebDl, Source::WebRip, Source::BluRay, Source::Dvd];

/// Extract source and quality tags from the raw filename.
///
/// Quality is matched case-sensitively against the unnormalized name,
/// first match wins. REMUX beats every other source marker; without any
/// marker the source falls back to [`Source::BluRay`], so the source side
/// is total.
pub(crate) fn extract_source_quality(filename: &str) -> (Source, Option<Quality>) {
    let quality = QUALITY_ORDER
        .iter()
        .copied()
        .find(|q| filename.contains(q.as_str()));

    let source = if filename.to_uppercase().contains("REMUX") {
        Source::Remux
    } else {
        let lowered = filename.to_lowercase();
        SOURCE_ORDER
            .iter()
            .copied()
            .find(|s| lowered.contains(&s.as_str().to_lowercase()))
            .unwrap_or(Source::BluRay)
    };

    (source, quality)
}
