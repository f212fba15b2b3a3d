//! Data model types for parsed release information.
//!
//! This module contains the types used to represent metadata extracted
//! from movie release filenames: title, year, source, and quality.

mod quality;
mod release;

pub use quality::{Quality, Source};
pub use release::{ParsedRelease, TitleYear};

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError(pub String);

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}", self.0)
    }
}

impl std::error::Error for ParseError {}
