//! Canonical library name formatting.

use super::OutputFormat;
use crate::model::ParsedRelease;

/// Canonical library name formatter.
///
/// Formats parsed releases as a `Title (Year)` folder plus a file stem
/// carrying the source and quality tags:
/// - Folder: `The Movie (2015)`
/// - Stem: `The Movie (2015) BluRay-1080p`
///
/// # Example
///
/// ```
/// use reelvault_parser::{parse, output::{LibraryFormat, OutputFormat}};
///
/// let release = parse("The.Movie.2015.1080p.BluRay.mkv");
/// let name = LibraryFormat.format(&release).unwrap();
///
/// assert_eq!(name.folder_name, "The Movie (2015)");
/// assert_eq!(name.file_stem, "The Movie (2015) BluRay-1080p");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryFormat;

/// Canonical folder and file names for one release.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LibraryName {
    /// Destination folder name: `{title} ({year})`.
    pub folder_name: String,
    /// Destination file stem: the folder name plus source/quality tags.
    pub file_stem: String,
}

impl OutputFormat for LibraryFormat {
    type Output = Option<LibraryName>;

    /// Returns `None` when the release has no title/year.
    ///
    /// The source is always populated, so the stem always carries at least
    /// the source tag; the quality joins it with a hyphen when present.
    fn format(&self, release: &ParsedRelease) -> Self::Output {
        let title_year = release.title_year.as_ref()?;
        let folder_name = format!("{} ({})", title_year.title, title_year.year);

        let file_stem = match release.quality {
            Some(quality) => format!("{} {}-{}", folder_name, release.source, quality),
            None => format!("{} {}", folder_name, release.source),
        };

        Some(LibraryName {
            folder_name,
            file_stem,
        })
    }
}
