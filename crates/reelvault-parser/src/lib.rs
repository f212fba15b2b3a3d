//! # reelvault-parser
//!
//! A parser for movie release filenames.
//!
//! This crate extracts structured metadata (title, year, source, quality)
//! from loosely structured release names, and renders the canonical
//! library name used for linking.
//!
//! ## Quick Start
//!
//! ```
//! use reelvault_parser::parse;
//!
//! let result = parse("The.Movie.2015.1080p.BluRay.mkv");
//!
//! let title_year = result.title_year.as_ref().unwrap();
//! assert_eq!(title_year.title, "The Movie");
//! assert_eq!(title_year.year, 2015);
//! ```

pub mod model;
pub mod output;

mod parser;

// Re-export main types for convenience
pub use model::{ParseError, ParsedRelease, Quality, Source, TitleYear};

/// Parse a release filename into structured metadata.
///
/// Title/year extraction is all-or-nothing: a name without a valid year
/// in `[1920, 2030]` yields no title either. The source always resolves
/// (falling back to [`Source::BluRay`]); only the quality may be absent.
///
/// # Examples
///
/// ```
/// use reelvault_parser::{parse, Quality, Source};
///
/// let result = parse("Some.Film.1999.REMUX.mkv");
/// assert_eq!(result.source, Source::Remux);
/// assert_eq!(result.quality, None);
/// ```
pub fn parse(input: &str) -> ParsedRelease {
    parser::parse_release(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_movie() {
        let result = parse("The.Movie.2015.1080p.BluRay.mkv");
        let title_year = result.title_year.as_ref().unwrap();
        assert_eq!(title_year.title, "The Movie");
        assert_eq!(title_year.year, 2015);
        assert_eq!(result.source, Source::BluRay);
        assert_eq!(result.quality, Some(Quality::_1080p));
    }

    #[test]
    fn test_parse_remux_without_quality() {
        let result = parse("Some.Film.1999.REMUX.mkv");
        let title_year = result.title_year.as_ref().unwrap();
        assert_eq!(title_year.title, "Some Film");
        assert_eq!(title_year.year, 1999);
        assert_eq!(result.source, Source::Remux);
        assert_eq!(result.quality, None);
    }

    #[test]
    fn test_parse_web_release() {
        let result = parse("Movie.2023.1080p.WEB-DL.mkv");
        assert_eq!(result.source, Source::WebDl);
        assert_eq!(result.quality, Some(Quality::_1080p));
    }

    #[test]
    fn test_no_year_yields_no_title() {
        let result = parse("Trailer.mkv");
        assert_eq!(result.title_year, None);
        // Tags stay total/independent of the title outcome
        assert_eq!(result.source, Source::BluRay);
        assert_eq!(result.quality, None);
    }

    #[test]
    fn test_year_out_of_range_fails_whole_extraction() {
        let result = parse("Blade.Runner.2049.1080p.mkv");
        assert_eq!(result.title_year, None);
        assert_eq!(result.quality, Some(Quality::_1080p));
    }

    #[test]
    fn test_release_title_preserved() {
        let input = "Some.Movie.2021.1080p.WEB-DL.mkv";
        let result = parse(input);
        assert_eq!(result.release_title, input);
    }

    #[test]
    fn test_parse_already_canonical_name() {
        let result = parse("The Movie (2015) BluRay-1080p.mkv");
        let title_year = result.title_year.as_ref().unwrap();
        assert_eq!(title_year.title, "The Movie");
        assert_eq!(title_year.year, 2015);
        assert_eq!(result.source, Source::BluRay);
        assert_eq!(result.quality, Some(Quality::_1080p));
    }

    #[test]
    fn test_source_is_always_one_of_five() {
        for input in ["Trailer.mkv", "A.2020.mkv", "x.4K.dvd.2001.mp4", ""] {
            let result = parse(input);
            assert!(matches!(
                result.source,
                Source::Remux | Source::WebDl | Source::WebRip | Source::BluRay | Source::Dvd
            ));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let result = parse("The.Movie.2015.1080p.BluRay.mkv");
        let json = serde_json::to_string(&result).unwrap();
        let back: ParsedRelease = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
