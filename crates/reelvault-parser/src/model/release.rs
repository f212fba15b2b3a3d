//! Parsed release data.

use super::{Quality, Source};

/// A movie title and release year extracted together from a filename.
///
/// The two fields are extracted as a unit: a filename yields either both
/// or neither.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleYear {
    /// Title text preceding the year. May be empty when the filename
    /// starts with its year.
    pub title: String,
    /// Release year, within `[1920, 2030]`.
    pub year: u16,
}

/// Everything extracted from a single release filename.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedRelease {
    /// The raw input, preserved verbatim.
    pub release_title: String,
    /// Title and year, when a valid year was found.
    pub title_year: Option<TitleYear>,
    /// Release source. Falls back to [`Source::BluRay`] when the name
    /// carries no recognizable marker, so this is always populated.
    pub source: Source,
    /// Quality tier, when the name carries one.
    pub quality: Option<Quality>,
}
