//! Title and year extraction.
//!
//! Release names put the title before the year (`The.Movie.2015.1080p...`),
//! so the year doubles as the title delimiter.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::TitleYear;

/// Earliest year accepted as a release year.
const YEAR_MIN: u16 = 1920;
/// Latest year accepted as a release year.
const YEAR_MAX: u16 = 2030;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d{4}").unwrap());

/// Replace separator dots with spaces and drop parentheses so the title
/// and year read as plain words.
fn normalize(filename: &str) -> String {
    filename.replace('.', " ").replace(['(', ')'], "")
}

/// Extract title and year from a release filename.
///
/// The first run of four digits in the normalized name is the year
/// candidate; the title is everything before it, trimmed. A candidate
/// outside `[1920, 2030]` fails the whole extraction — there is no search
/// for a later candidate.
pub(crate) fn extract_title_year(filename: &str) -> Option<TitleYear> {
    let normalized = normalize(filename);

    let found = YEAR_RE.find(&normalized)?;
    let year: u16 = found.as_str().parse().ok()?;
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return None;
    }

    let title = normalized[..found.start()].trim().to_string();
    Some(TitleYear { title, year })
}
