//! Extraction routines for release filenames.

mod tags;
mod title;

use crate::model::ParsedRelease;

/// Run all extractors against one filename.
pub(crate) fn parse_release(input: &str) -> ParsedRelease {
    let title_year = title::extract_title_year(input);
    let (source, quality) = tags::extract_source_quality(input);

    ParsedRelease {
        release_title: input.to_string(),
        title_year,
        source,
        quality,
    }
}
